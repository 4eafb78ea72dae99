use crate::{
    action::{SessionAction, SpinnerKind},
    flow::{FlowExecutor, FlowHandle, helpers},
    worker::{self, Worker},
};

pub(crate) use self::thumbnail::spawn_thumbnail_flow;

mod thumbnail;

/// Spawn a random meal fetch if no other fetch is active.
///
/// Returns `false` if the request was dropped because the executor is busy.
pub(crate) fn spawn_random_meal_flow(executor: &mut FlowExecutor, worker: &Worker) -> bool {
    if !executor.is_idle() {
        return false;
    }
    let handle = executor.handle();
    executor.spawn(random_meal_flow(handle, worker.clone()));
    true
}

async fn random_meal_flow(handle: FlowHandle, worker: Worker) {
    let work = worker::request_random_meal(&worker);
    let result = helpers::with_spinner(&handle, SpinnerKind::RandomMeal, work).await;
    handle.request_action(SessionAction::ApplyRandomMeal(result).into());
}

/// Spawn a search for `query` if no other fetch is active.
pub(crate) fn spawn_search_flow(executor: &mut FlowExecutor, worker: &Worker, query: String) -> bool {
    if !executor.is_idle() {
        return false;
    }
    let handle = executor.handle();
    executor.spawn(search_flow(handle, worker.clone(), query));
    true
}

async fn search_flow(handle: FlowHandle, worker: Worker, query: String) {
    let work = worker::request_search(&worker, query);
    let result = helpers::with_spinner(&handle, SpinnerKind::Search, work).await;
    handle.request_action(SessionAction::ApplySearchResults(result).into());
}
