use eframe::egui::{Key, RichText, ScrollArea, TextEdit, Ui};

use crate::{
    action::{ActionRequestQueue, FlowAction, SessionAction},
    ui::{icon, theme},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SearchScreenViewModel {
    pub(crate) status: String,
    pub(crate) status_is_error: bool,
    pub(crate) results: Vec<String>,
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &SearchScreenViewModel,
    query_input: &mut String,
    action_queue: &mut ActionRequestQueue,
) {
    ui.vertical_centered(|ui| {
        ui.label(theme::heading("Search Meals by Name"));
        ui.add_space(8.0);

        let response = ui.add(
            TextEdit::singleline(query_input)
                .hint_text("Meal name")
                .desired_width(320.0),
        );
        let submitted_with_enter =
            response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

        let search = theme::filled_button(format!("{} Search", icon::SEARCH), theme::PRIMARY_BUTTON);
        if ui.add(search).clicked() || submitted_with_enter {
            action_queue.request(FlowAction::SubmitSearch(query_input.clone()).into());
        }

        ui.add_space(4.0);
        let status_color = if vm.status_is_error {
            ui.visuals().error_fg_color
        } else {
            theme::BODY_TEXT
        };
        ui.label(RichText::new(&vm.status).color(status_color));
        ui.add_space(4.0);
    });

    ScrollArea::vertical()
        .id_salt("search_results")
        .auto_shrink([false, true])
        .max_height((ui.available_height() - 48.0).max(0.0))
        .show(ui, |ui| {
            for (index, name) in vm.results.iter().enumerate() {
                if ui.selectable_label(false, name).clicked() {
                    action_queue.request(SessionAction::SelectResult(index).into());
                }
            }
        });

    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        let back = theme::filled_button(format!("{} Back", icon::BACK), theme::BACK_BUTTON);
        if ui.add(back).on_hover_text("Esc").clicked() {
            action_queue.request(SessionAction::Back.into());
        }
    });
}
