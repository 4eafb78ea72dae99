use eframe::egui::Ui;

use crate::action::ActionRequestQueue;

pub(crate) mod detail_screen;
pub(crate) mod home_screen;
pub(crate) mod icon;
pub(crate) mod input;
pub(crate) mod meal_card;
pub(crate) mod modal;
pub(crate) mod search_screen;
pub(crate) mod spinner;
pub(crate) mod theme;
pub(crate) mod toolbar;

/// View model for whichever screen is current.
#[derive(Debug, Clone)]
pub(crate) enum ScreenViewModel {
    Home(home_screen::HomeScreenViewModel),
    Search(search_screen::SearchScreenViewModel),
    Detail(detail_screen::DetailScreenViewModel),
}

pub(crate) fn show_screen(
    ui: &mut Ui,
    vm: &ScreenViewModel,
    query_input: &mut String,
    action_queue: &mut ActionRequestQueue,
) {
    match vm {
        ScreenViewModel::Home(vm) => home_screen::show(ui, vm, action_queue),
        ScreenViewModel::Search(vm) => search_screen::show(ui, vm, query_input, action_queue),
        ScreenViewModel::Detail(vm) => detail_screen::show(ui, vm, action_queue),
    }
}
