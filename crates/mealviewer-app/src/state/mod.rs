pub(crate) use self::{app_state::*, settings::*, thumbnails::*, ui_state::*};

mod app_state;
mod settings;
mod thumbnails;
mod ui_state;
