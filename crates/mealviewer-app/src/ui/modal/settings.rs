use eframe::egui::{Context, Id, Modal, RichText, Sides, TextEdit};

use crate::{
    action::{ActionRequestQueue, UiAction},
    state::SettingsDraft,
    ui::icon,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SettingsViewModel {
    pub(crate) version: String,
    pub(crate) base_url_override: Option<String>,
}

pub(crate) fn show(
    ctx: &Context,
    vm: &SettingsViewModel,
    draft: &mut SettingsDraft,
    action_queue: &mut ActionRequestQueue,
) {
    let modal = Modal::new(Id::new("settings")).show(ctx, |ui| {
        ui.heading(format!("{} Settings", icon::GEAR));
        ui.add_space(4.0);

        ui.label("API base URL");
        ui.add(TextEdit::singleline(&mut draft.api_base_url).desired_width(360.0));
        if let Some(url) = &vm.base_url_override {
            ui.label(
                RichText::new(format!("Overridden on the command line by {url}"))
                    .small()
                    .color(ui.visuals().warn_fg_color),
            );
        }
        if let Some(error) = &draft.error {
            ui.label(RichText::new(error).color(ui.visuals().error_fg_color));
        }
        ui.checkbox(&mut draft.load_thumbnails, "Load meal images");

        ui.add_space(8.0);
        ui.label(RichText::new(format!("Version {}", vm.version)).small().weak());
        ui.add_space(8.0);

        Sides::new().show(
            ui,
            |_ui| {},
            |ui| {
                if ui.button(format!("{} Save", icon::CHECK)).clicked() {
                    match draft.to_settings() {
                        Ok(settings) => {
                            action_queue.request(UiAction::UpdateSettings(settings).into());
                            action_queue.request(UiAction::CloseModal.into());
                        }
                        Err(err) => draft.error = Some(err.to_string()),
                    }
                }
                if ui.button(format!("{} Cancel", icon::CROSS)).clicked() {
                    action_queue.request(UiAction::CloseModal.into());
                }
            },
        );
    });

    if modal.should_close() {
        action_queue.request(UiAction::CloseModal.into());
    }
}
