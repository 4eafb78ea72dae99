use mealviewer_core::Meal;
use mealviewer_session::{HomeContent, View};

use crate::{
    state::{AppState, Settings, ThumbnailCache, ThumbnailState, UiState},
    ui::{
        ScreenViewModel,
        detail_screen::DetailScreenViewModel,
        home_screen::HomeScreenViewModel,
        meal_card::{MealCardViewModel, ThumbnailView},
        modal::SettingsViewModel,
        search_screen::SearchScreenViewModel,
    },
    version,
};

#[must_use]
pub(crate) fn build_screen_vm(app_state: &AppState, ui_state: &UiState) -> ScreenViewModel {
    match app_state.view.current_view() {
        View::Home => ScreenViewModel::Home(build_home_vm(app_state, ui_state)),
        View::SearchResults => ScreenViewModel::Search(build_search_vm(app_state)),
        View::MealDetail => ScreenViewModel::Detail(build_detail_vm(app_state, ui_state)),
    }
}

#[must_use]
pub(crate) fn build_settings_vm(app_state: &AppState) -> SettingsViewModel {
    SettingsViewModel {
        version: version::build_version(),
        base_url_override: app_state.base_url_override().map(str::to_owned),
    }
}

fn build_home_vm(app_state: &AppState, ui_state: &UiState) -> HomeScreenViewModel {
    let content = HomeContent::of(&app_state.view);
    let thumbnail = match content.meal() {
        Some(meal) => build_thumbnail_view(meal, app_state.settings(), &ui_state.thumbnails),
        None => ThumbnailView::Hidden,
    };
    HomeScreenViewModel::new(MealCardViewModel {
        heading: content.heading().to_owned(),
        thumbnail,
        instructions: content.body(),
    })
}

fn build_search_vm(app_state: &AppState) -> SearchScreenViewModel {
    let status = app_state.view.search_status();
    SearchScreenViewModel {
        status: status.to_string(),
        status_is_error: status.is_error(),
        results: app_state
            .view
            .search_results()
            .iter()
            .map(|meal| meal.name().to_owned())
            .collect(),
    }
}

fn build_detail_vm(app_state: &AppState, ui_state: &UiState) -> DetailScreenViewModel {
    let card = match app_state.view.selected_meal() {
        Some(meal) => MealCardViewModel {
            heading: meal.name().to_owned(),
            thumbnail: build_thumbnail_view(meal, app_state.settings(), &ui_state.thumbnails),
            instructions: meal.instructions().to_owned(),
        },
        None => MealCardViewModel {
            heading: String::new(),
            thumbnail: ThumbnailView::Hidden,
            instructions: String::new(),
        },
    };
    DetailScreenViewModel::new(card)
}

fn build_thumbnail_view(meal: &Meal, settings: &Settings, cache: &ThumbnailCache) -> ThumbnailView {
    let Some(url) = meal.thumbnail_url() else {
        return ThumbnailView::NotAvailable;
    };
    if !settings.load_thumbnails {
        return ThumbnailView::Hidden;
    }
    match cache.get(url) {
        None | Some(ThumbnailState::Loading) => ThumbnailView::Loading,
        Some(ThumbnailState::Ready(bytes)) => ThumbnailView::Ready {
            uri: format!("bytes://{url}"),
            bytes: bytes.clone(),
        },
        Some(ThumbnailState::Unavailable) => ThumbnailView::NotAvailable,
    }
}
