use eframe::egui::Ui;

use crate::{
    action::{ActionRequestQueue, SessionAction},
    ui::{
        icon,
        meal_card::{self, MealCardViewModel},
        theme,
    },
};

#[derive(Debug, Clone)]
pub(crate) struct DetailScreenViewModel {
    card: MealCardViewModel,
}

impl DetailScreenViewModel {
    #[must_use]
    pub(crate) fn new(card: MealCardViewModel) -> Self {
        Self { card }
    }

    #[cfg(test)]
    pub(crate) fn card(&self) -> &MealCardViewModel {
        &self.card
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &DetailScreenViewModel,
    action_queue: &mut ActionRequestQueue,
) {
    meal_card::show(ui, &vm.card, "detail_instructions");

    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        let back = theme::filled_button(format!("{} Back", icon::BACK), theme::BACK_BUTTON);
        if ui.add(back).on_hover_text("Esc").clicked() {
            action_queue.request(SessionAction::Back.into());
        }
    });
}
