//! Glyphs from egui's bundled emoji font.

pub(crate) const DICE: &str = "🎲";
pub(crate) const SEARCH: &str = "🔍";
pub(crate) const BACK: &str = "⬅";
pub(crate) const GEAR: &str = "⚙";
pub(crate) const CHECK: &str = "✔";
pub(crate) const CROSS: &str = "✖";
