//! Desktop window for the meal viewer.
//!
//! # Design Notes
//! - Each frame polls running flows, applies queued actions, then redraws from
//!   view models built out of [`AppState`] and [`UiState`].
//! - Random and search fetches show a blocking spinner; thumbnails load in the
//!   background and fill in when ready.
//! - Only settings are persisted.

use std::{error::Error, time::Duration};

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context, TopBottomPanel},
};
use mealviewer_core::DEFAULT_BASE_URL;

use crate::{
    action::{self, ActionRequestQueue},
    persistence,
    state::{AppState, UiState},
    ui, view_model_builder,
    worker::{Worker, WorkerInitError},
};

const FLOW_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub struct MealviewerApp {
    app_state: AppState,
    ui_state: UiState,
}

impl MealviewerApp {
    /// Creates the app, loading saved settings from eframe storage.
    ///
    /// `base_url_override` replaces the saved API base URL for this session only.
    pub fn new(
        cc: &CreationContext<'_>,
        base_url_override: Option<String>,
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let settings = cc
            .storage
            .and_then(persistence::load_settings)
            .unwrap_or_default();
        let app_state = AppState::new(settings).with_base_url_override(base_url_override);

        let worker = match Worker::for_base_url(app_state.effective_base_url()) {
            Ok(worker) => worker,
            Err(WorkerInitError::BaseUrl(err)) => {
                log::warn!(
                    "cannot use API base URL {}: {err}; falling back to {DEFAULT_BASE_URL}",
                    app_state.effective_base_url()
                );
                Worker::for_base_url(DEFAULT_BASE_URL)?
            }
            Err(err) => return Err(err.into()),
        };
        let ui_state = UiState::new(worker);

        Ok(Self {
            app_state,
            ui_state,
        })
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }
}

impl App for MealviewerApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        persistence::save_settings(storage, self.app_state.settings());
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        self.ui_state.executor.poll(&mut action_queue);
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        if self.ui_state.accepts_input() {
            ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
            action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
        }

        let screen_vm = view_model_builder::build_screen_vm(&self.app_state, &self.ui_state);

        TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show(ui, &mut action_queue);
        });
        CentralPanel::default().show(ctx, |ui| {
            ui::show_screen(
                ui,
                &screen_vm,
                &mut self.ui_state.query_input,
                &mut action_queue,
            );
        });

        if let Some(modal_request) = &mut self.ui_state.active_modal {
            let settings_vm = view_model_builder::build_settings_vm(&self.app_state);
            ui::modal::show(ctx, &mut action_queue, modal_request, &settings_vm);
        }

        if let Some(spinner) = self.ui_state.spinner_state.active_kind() {
            ui::spinner::show(ctx, spinner);
        }

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        if self.ui_state.executor.has_pending() {
            ctx.request_repaint_after(FLOW_POLL_INTERVAL);
        }

        self.apply_persistence(frame);
    }
}
