use crate::{
    action::UiAction,
    flow::{FlowExecutor, FlowHandle},
    worker::{self, Worker},
};

/// Spawn a thumbnail download that runs alongside other flows.
pub(crate) fn spawn_thumbnail_flow(executor: &mut FlowExecutor, worker: &Worker, url: String) {
    let handle = executor.handle();
    executor.spawn_background(thumbnail_flow(handle, worker.clone(), url));
}

async fn thumbnail_flow(handle: FlowHandle, worker: Worker, url: String) {
    let result = worker::request_thumbnail(&worker, url.clone()).await;
    handle.request_action(UiAction::ThumbnailLoaded { url, result }.into());
}
