//! Plain-text rendering of a [`ViewState`] for terminals.

use std::fmt::Write as _;

use mealviewer_core::Meal;
use mealviewer_session::{HomeContent, View, ViewState};

/// Renders whatever `state` currently shows.
#[must_use]
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    match state.current_view() {
        View::Home => render_home(&mut out, state),
        View::SearchResults => render_search(&mut out, state),
        View::MealDetail => {
            if let Some(meal) = state.selected_meal() {
                render_meal(&mut out, meal);
            }
        }
    }
    out
}

fn render_home(out: &mut String, state: &ViewState) {
    let content = HomeContent::of(state);
    match content.meal() {
        Some(meal) => render_meal(out, meal),
        None => {
            let _ = writeln!(out, "{}", content.heading());
            let body = content.body();
            if !body.is_empty() {
                let _ = writeln!(out, "\n{body}");
            }
        }
    }
}

fn render_search(out: &mut String, state: &ViewState) {
    let _ = writeln!(out, "Search: {}", state.search_query());
    let _ = writeln!(out, "{}", state.search_status());
    for (index, meal) in state.search_results().iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", index + 1, meal.name());
    }
}

fn render_meal(out: &mut String, meal: &Meal) {
    let _ = writeln!(out, "{}", meal.name());
    let _ = writeln!(
        out,
        "Image: {}",
        meal.thumbnail_url().unwrap_or("Image not available")
    );
    let _ = writeln!(out, "\n{}", meal.instructions());
}

#[cfg(test)]
mod tests {
    use mealviewer_core::{FetchError, Meal};
    use mealviewer_session::ViewState;

    use super::render;

    fn pasta() -> Vec<Meal> {
        vec![
            Meal::new("1", Some("Pasta A"), Some("Boil."), Some("https://example.test/a.jpg")),
            Meal::new("2", Some("Pasta B"), None, None),
        ]
    }

    #[test]
    fn home_renders_random_meal() {
        let mut state = ViewState::new();
        state.apply_random_meal(Ok(pasta().remove(0)));

        assert_eq!(
            render(&state),
            "Pasta A\nImage: https://example.test/a.jpg\n\nBoil.\n"
        );
    }

    #[test]
    fn home_renders_failures() {
        let mut state = ViewState::new();
        state.apply_random_meal(Err(FetchError::NotFound));
        assert_eq!(render(&state), "No meal found.\n");

        state.apply_random_meal(Err(FetchError::Http(500)));
        assert_eq!(
            render(&state),
            format!("Error fetching meal\n\n{}\n", FetchError::Http(500))
        );
    }

    #[test]
    fn search_renders_numbered_results() {
        let mut state = ViewState::new();
        assert!(state.open_search());
        assert!(state.begin_search("pasta").is_some());
        state.apply_search_results(Ok(pasta()));

        assert_eq!(
            render(&state),
            "Search: pasta\nFound 2 meal(s).\n  1. Pasta A\n  2. Pasta B\n"
        );
    }

    #[test]
    fn detail_without_image_says_so() {
        let mut state = ViewState::new();
        assert!(state.open_search());
        state.apply_search_results(Ok(pasta()));
        assert!(state.select_result(1));

        let text = render(&state);
        assert!(text.starts_with("Pasta B\nImage: Image not available\n"));
        assert!(text.ends_with(&format!("\n{}\n", Meal::DEFAULT_INSTRUCTIONS)));
    }
}
