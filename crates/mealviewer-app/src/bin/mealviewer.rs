//! Random Meal Viewer desktop application using egui/eframe.

use clap::Parser as _;
use mealviewer_app::{MealviewerApp, cli::GuiArgs};

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "mealviewer";

    better_panic::install();
    env_logger::init();

    let args = GuiArgs::parse();
    log::info!(
        "starting mealviewer, version={}",
        mealviewer_app::version::build_version()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((600.0, 800.0))
            .with_min_inner_size((400.0, 500.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Random Meal Viewer",
        options,
        Box::new(move |cc| {
            let app = MealviewerApp::new(cc, args.api_base_url)?;
            Ok(Box::new(app))
        }),
    )
}
