use eframe::egui::Ui;

use crate::{
    action::{ActionRequestQueue, FlowAction, SessionAction},
    ui::{
        icon,
        meal_card::{self, MealCardViewModel},
        theme,
    },
};

#[derive(Debug, Clone)]
pub(crate) struct HomeScreenViewModel {
    card: MealCardViewModel,
}

impl HomeScreenViewModel {
    #[must_use]
    pub(crate) fn new(card: MealCardViewModel) -> Self {
        Self { card }
    }

    #[cfg(test)]
    pub(crate) fn card(&self) -> &MealCardViewModel {
        &self.card
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &HomeScreenViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical_centered(|ui| {
        ui.label(theme::title("Random Meal Viewer"));
        ui.add_space(8.0);

        let random = theme::filled_button(
            format!("{} Get Random Meal", icon::DICE),
            theme::PRIMARY_BUTTON,
        );
        if ui.add(random).on_hover_text("Ctrl+R").clicked() {
            action_queue.request(FlowAction::RequestRandomMeal.into());
        }
        ui.add_space(4.0);

        let by_name =
            theme::filled_button(format!("{} Meal By Name", icon::SEARCH), theme::PRIMARY_BUTTON);
        if ui.add(by_name).on_hover_text("Ctrl+F").clicked() {
            action_queue.request(SessionAction::OpenSearch.into());
        }
        ui.add_space(8.0);
    });

    meal_card::show(ui, &vm.card, "home_instructions");
}
