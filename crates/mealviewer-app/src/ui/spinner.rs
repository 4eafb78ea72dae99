use eframe::egui::{Context, Id, Modal, Spinner};

use crate::action::SpinnerKind;

pub(crate) fn show(ctx: &Context, spinner: SpinnerKind) {
    ctx.request_repaint();
    let (id, heading, label) = match spinner {
        SpinnerKind::RandomMeal => ("fetching_random_meal", "Loading...", "Fetching random meal..."),
        SpinnerKind::Search => ("searching_meals", "Searching...", "Searching meals..."),
    };
    Modal::new(Id::new(id)).show(ctx, |ui| {
        ui.heading(heading);
        ui.add(Spinner::new());
        ui.label(label);
    });
}
