use std::sync::Arc;

use eframe::egui::{Image, RichText, ScrollArea, Spinner, Ui, Vec2};

use crate::ui::theme;

const THUMBNAIL_SIZE: f32 = 200.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ThumbnailView {
    /// No image slot at all.
    Hidden,
    NotAvailable,
    Loading,
    Ready { uri: String, bytes: Arc<[u8]> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MealCardViewModel {
    pub(crate) heading: String,
    pub(crate) thumbnail: ThumbnailView,
    pub(crate) instructions: String,
}

pub(crate) fn show(ui: &mut Ui, vm: &MealCardViewModel, id_salt: &str) {
    ui.vertical_centered(|ui| {
        if !vm.heading.is_empty() {
            ui.label(theme::heading(&vm.heading));
        }
        ui.add_space(8.0);

        let size = Vec2::splat(THUMBNAIL_SIZE);
        match &vm.thumbnail {
            ThumbnailView::Hidden => {}
            ThumbnailView::NotAvailable => {
                ui.label(RichText::new("Image not available").color(theme::ACCENT));
            }
            ThumbnailView::Loading => {
                ui.add_sized(size, Spinner::new());
            }
            ThumbnailView::Ready { uri, bytes } => {
                ui.add(Image::from_bytes(uri.clone(), Arc::clone(bytes)).fit_to_exact_size(size));
            }
        }
        ui.add_space(8.0);
    });

    ScrollArea::vertical()
        .id_salt(id_salt)
        .auto_shrink([false, true])
        .max_height((ui.available_height() - 48.0).max(0.0))
        .show(ui, |ui| {
            ui.label(RichText::new(&vm.instructions).color(theme::BODY_TEXT));
        });
}
