//! Desktop and terminal front ends for the meal viewer.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub use self::app::MealviewerApp;

pub mod app;
pub mod cli;
pub mod text_view;
pub mod version;

mod action;
mod flow;
mod persistence;
mod state;
mod ui;
mod view_model_builder;
mod worker;
