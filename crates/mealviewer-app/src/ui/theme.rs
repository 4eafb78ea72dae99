use eframe::egui::{Button, Color32, RichText};

pub(crate) const ACCENT: Color32 = Color32::from_rgb(0xE0, 0xBE, 0x36);
pub(crate) const BODY_TEXT: Color32 = Color32::from_rgb(0x8D, 0x75, 0x16);
pub(crate) const PRIMARY_BUTTON: Color32 = Color32::from_rgb(0xF3, 0x88, 0x16);
pub(crate) const BACK_BUTTON: Color32 = Color32::from_rgb(0xD9, 0x53, 0x4F);
pub(crate) const BUTTON_TEXT: Color32 = Color32::from_rgb(0xF7, 0xF7, 0xFF);

pub(crate) const TITLE_SIZE: f32 = 32.0;
pub(crate) const HEADING_SIZE: f32 = 24.0;
pub(crate) const BUTTON_SIZE: f32 = 18.0;

#[must_use]
pub(crate) fn title(text: &str) -> RichText {
    RichText::new(text)
        .size(TITLE_SIZE)
        .strong()
        .italics()
        .color(ACCENT)
}

#[must_use]
pub(crate) fn heading(text: &str) -> RichText {
    RichText::new(text)
        .size(HEADING_SIZE)
        .strong()
        .italics()
        .color(ACCENT)
}

#[must_use]
pub(crate) fn filled_button(text: String, fill: Color32) -> Button<'static> {
    Button::new(RichText::new(text).size(BUTTON_SIZE).color(BUTTON_TEXT)).fill(fill)
}
