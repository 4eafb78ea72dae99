//! Headless meal viewer: runs one command and prints what the window would show.

use std::{error::Error, sync::Arc};

use clap::Parser as _;
use mealviewer_app::{cli::CliArgs, text_view};
use mealviewer_core::{HttpTransport, MealClient, parse_base_url};

fn main() -> Result<(), Box<dyn Error>> {
    better_panic::install();
    env_logger::init();

    let args = CliArgs::parse();
    let base_url = parse_base_url(&args.api_base_url)?;
    let client = MealClient::new(base_url, Arc::new(HttpTransport::new()?));

    let state = args.command.execute(&client);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", text_view::render(&state));
    }
    Ok(())
}
