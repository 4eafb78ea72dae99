use eframe::egui::Context;

pub(crate) use self::settings::SettingsViewModel;
use crate::action::{ActionRequestQueue, ModalRequest};

mod settings;

pub(crate) fn show(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    modal_request: &mut ModalRequest,
    settings_vm: &SettingsViewModel,
) {
    match modal_request {
        ModalRequest::Settings(draft) => {
            settings::show(ctx, settings_vm, draft, action_queue);
        }
    }
}
