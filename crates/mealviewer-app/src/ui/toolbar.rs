use eframe::egui::{Align, Layout, Ui};

use crate::{
    action::{ActionRequestQueue, UiAction},
    ui::icon,
};

pub(crate) fn show(ui: &mut Ui, action_queue: &mut ActionRequestQueue) {
    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
        if ui
            .button(icon::GEAR)
            .on_hover_text("Settings (Ctrl+,)")
            .clicked()
        {
            action_queue.request(UiAction::OpenSettings.into());
        }
    });
}
