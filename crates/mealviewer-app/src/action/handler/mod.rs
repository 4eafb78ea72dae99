use mealviewer_core::{FetchError, Meal};

use crate::{
    action::{Action, ActionRequestQueue, FlowAction, ModalRequest, SessionAction, UiAction},
    flow,
    state::{AppState, Settings, SettingsDraft, UiState},
    worker::Worker,
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state,
        ui_state,
    };

    match action {
        Action::Session(action) => ctx.handle_session(action),
        Action::Ui(action) => ctx.handle_ui(action),
        Action::Flow(action) => ctx.handle_flow(action),
    }
}

impl ActionContext<'_> {
    fn handle_session(&mut self, action: SessionAction) {
        let view = &mut self.app_state.view;
        match action {
            SessionAction::OpenSearch => {
                if view.open_search() {
                    self.ui_state.query_input.clear();
                }
            }
            SessionAction::SelectResult(index) => {
                if view.select_result(index) {
                    self.load_thumbnail_for(self.app_state.view.selected_meal().cloned());
                }
            }
            SessionAction::Back => {
                view.back();
            }
            SessionAction::ApplyRandomMeal(result) => self.apply_random_meal(result),
            SessionAction::ApplySearchResults(result) => view.apply_search_results(result),
        }
    }

    fn handle_ui(&mut self, action: UiAction) {
        match action {
            UiAction::OpenSettings => {
                let draft = SettingsDraft::new(self.app_state.settings());
                self.ui_state.active_modal = Some(ModalRequest::Settings(draft));
            }
            UiAction::CloseModal => {
                self.ui_state.active_modal = None;
            }
            UiAction::StartSpinner { id, kind } => {
                self.ui_state.spinner_state.start(id, kind);
            }
            UiAction::StopSpinner { id } => {
                self.ui_state.spinner_state.stop(id);
            }
            UiAction::ThumbnailLoaded { url, result } => {
                self.ui_state.thumbnails.finish(url, result);
            }
            UiAction::UpdateSettings(settings) => self.update_settings(settings),
        }
    }

    fn handle_flow(&mut self, action: FlowAction) {
        match action {
            FlowAction::RequestRandomMeal => {
                if !self.app_state.view.current_view().is_home() {
                    log::debug!("random meal requested outside of home; ignored");
                    return;
                }
                if !flow::spawn_random_meal_flow(&mut self.ui_state.executor, &self.ui_state.worker)
                {
                    log::debug!("random meal requested while a fetch is running; ignored");
                }
            }
            FlowAction::SubmitSearch(query) => {
                if !self.ui_state.executor.is_idle() {
                    log::debug!("search submitted while a fetch is running; ignored");
                    return;
                }
                if let Some(query) = self.app_state.view.begin_search(&query) {
                    flow::spawn_search_flow(&mut self.ui_state.executor, &self.ui_state.worker, query);
                }
            }
        }
    }

    fn apply_random_meal(&mut self, result: Result<Meal, FetchError>) {
        self.app_state.view.apply_random_meal(result);
        self.load_thumbnail_for(self.app_state.view.last_random_meal().cloned());
    }

    fn load_thumbnail_for(&mut self, meal: Option<Meal>) {
        if !self.app_state.settings().load_thumbnails {
            return;
        }
        let Some(url) = meal.as_ref().and_then(Meal::thumbnail_url) else {
            return;
        };
        if self.ui_state.thumbnails.start(url) {
            flow::spawn_thumbnail_flow(
                &mut self.ui_state.executor,
                &self.ui_state.worker,
                url.to_owned(),
            );
        }
    }

    fn update_settings(&mut self, settings: Settings) {
        let previous_base_url = self.app_state.effective_base_url().to_owned();
        let thumbnails_were_enabled = self.app_state.settings().load_thumbnails;
        self.app_state.set_settings(settings);

        if self.app_state.effective_base_url() != previous_base_url {
            match Worker::for_base_url(self.app_state.effective_base_url()) {
                Ok(worker) => self.ui_state.worker = worker,
                Err(err) => log::error!("keeping previous worker: {err}"),
            }
        }

        if !thumbnails_were_enabled && self.app_state.settings().load_thumbnails {
            self.load_thumbnail_for(self.app_state.view.last_random_meal().cloned());
            self.load_thumbnail_for(self.app_state.view.selected_meal().cloned());
        }
    }
}
