//! Command-line arguments for both binaries.

use std::num::NonZeroUsize;

use clap::{Parser, Subcommand};
use mealviewer_core::{DEFAULT_BASE_URL, MealClient, Transport, client::BaseUrlError, parse_base_url};
use mealviewer_session::ViewState;

const BASE_URL_ENV: &str = "MEALVIEWER_API_BASE_URL";

/// Arguments of the desktop viewer.
#[derive(Debug, Parser)]
#[command(name = "mealviewer", author, version, about)]
pub struct GuiArgs {
    /// Meal service base URL for this session. Not saved to the settings.
    #[arg(long, value_name = "URL", env = BASE_URL_ENV, value_parser = parse_api_base_url)]
    pub api_base_url: Option<String>,
}

/// Arguments of the headless client.
#[derive(Debug, Parser)]
#[command(name = "mealviewer-cli", author, version, about)]
pub struct CliArgs {
    /// Meal service base URL.
    #[arg(
        long,
        value_name = "URL",
        env = BASE_URL_ENV,
        default_value = DEFAULT_BASE_URL,
        value_parser = parse_api_base_url
    )]
    pub api_base_url: String,

    /// Print the view state as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show a random meal.
    Random,
    /// Search meals by name.
    Search {
        /// Meal name to search for.
        query: String,

        /// Open the N-th result (1-based) in the detail view.
        #[arg(long, value_name = "N")]
        select: Option<NonZeroUsize>,
    },
}

fn parse_api_base_url(text: &str) -> Result<String, BaseUrlError> {
    parse_base_url(text).map(String::from)
}

impl Command {
    /// Runs the command against `client` from a fresh [`ViewState`].
    ///
    /// Fetch failures are recorded in the returned state, not reported as errors.
    pub fn execute<T>(&self, client: &MealClient<T>) -> ViewState
    where
        T: Transport,
    {
        let mut state = ViewState::new();
        match self {
            Command::Random => {
                state.request_random_meal(client);
            }
            Command::Search { query, select } => {
                state.open_search();
                state.submit_search(client, query);
                if let Some(position) = select {
                    state.select_result(position.get() - 1);
                }
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use clap::Parser as _;
    use mealviewer_core::{DEFAULT_BASE_URL, MealClient, testing::FakeTransport};
    use mealviewer_session::{SearchStatus, View};

    use super::{CliArgs, Command, GuiArgs};

    const PASTA: &str = r#"{"meals":[{"strMeal":"Pasta A"},{"strMeal":"Pasta B"}]}"#;

    #[test]
    fn parses_search_with_selection() {
        let args =
            CliArgs::try_parse_from(["mealviewer-cli", "search", "pasta", "--select", "2", "--json"])
                .unwrap();

        assert!(args.json);
        assert_eq!(args.api_base_url, DEFAULT_BASE_URL);
        let Command::Search { query, select } = args.command else {
            panic!("expected search");
        };
        assert_eq!(query, "pasta");
        assert_eq!(select.map(|n| n.get()), Some(2));
    }

    #[test]
    fn rejects_zero_selection_and_bad_urls() {
        assert!(CliArgs::try_parse_from(["mealviewer-cli", "search", "x", "--select", "0"]).is_err());
        assert!(
            CliArgs::try_parse_from(["mealviewer-cli", "--api-base-url", "ftp://x/", "random"])
                .is_err()
        );
        assert!(GuiArgs::try_parse_from(["mealviewer", "--api-base-url", "not a url"]).is_err());
    }

    #[test]
    fn base_url_is_normalized() {
        let args = GuiArgs::try_parse_from([
            "mealviewer",
            "--api-base-url",
            "http://localhost:8080/api/json/v1/1",
        ])
        .unwrap();
        assert_eq!(
            args.api_base_url.as_deref(),
            Some("http://localhost:8080/api/json/v1/1/")
        );
    }

    #[test]
    fn search_command_selects_result() {
        let transport = FakeTransport::new().with_json(200, PASTA);
        let client = MealClient::with_default_base_url(&transport);
        let command = Command::Search {
            query: "pasta".into(),
            select: NonZeroUsize::new(2),
        };

        let state = command.execute(&client);

        assert_eq!(state.current_view(), View::MealDetail);
        assert_eq!(state.selected_meal().unwrap().name(), "Pasta B");
        assert_eq!(state.search_results().len(), 2);
    }

    #[test]
    fn out_of_range_selection_stays_on_results() {
        let transport = FakeTransport::new().with_json(200, PASTA);
        let client = MealClient::with_default_base_url(&transport);
        let command = Command::Search {
            query: "pasta".into(),
            select: NonZeroUsize::new(5),
        };

        let state = command.execute(&client);

        assert_eq!(state.current_view(), View::SearchResults);
        assert_eq!(state.search_status(), &SearchStatus::Found(2));
    }

    #[test]
    fn random_failure_is_recorded_not_raised() {
        let transport = FakeTransport::new().with_error("connection refused");
        let client = MealClient::with_default_base_url(&transport);

        let state = Command::Random.execute(&client);

        assert_eq!(state.current_view(), View::Home);
        assert!(state.random_failure().is_some());
    }
}
