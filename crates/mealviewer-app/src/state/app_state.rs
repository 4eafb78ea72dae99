use mealviewer_session::ViewState;

use crate::state::Settings;

// AppState holds the view state machine and the user settings. Only the settings are persisted.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) view: ViewState,
    settings: Settings,
    base_url_override: Option<String>,
    dirty: bool,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(settings: Settings) -> Self {
        Self {
            view: ViewState::new(),
            settings,
            base_url_override: None,
            dirty: false,
        }
    }

    /// Uses `base_url` for this session without persisting it.
    #[must_use]
    pub(crate) fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        self.base_url_override = base_url;
        self
    }

    #[must_use]
    pub(crate) fn settings(&self) -> &Settings {
        &self.settings
    }

    pub(crate) fn set_settings(&mut self, settings: Settings) {
        if self.settings != settings {
            self.settings = settings;
            self.dirty = true;
        }
    }

    #[must_use]
    pub(crate) fn base_url_override(&self) -> Option<&str> {
        self.base_url_override.as_deref()
    }

    #[must_use]
    pub(crate) fn effective_base_url(&self) -> &str {
        self.base_url_override
            .as_deref()
            .unwrap_or(&self.settings.api_base_url)
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use crate::state::Settings;

    use super::AppState;

    #[test]
    fn override_wins_over_settings() {
        let state = AppState::new(Settings::default())
            .with_base_url_override(Some("http://localhost:8080/".into()));
        assert_eq!(state.effective_base_url(), "http://localhost:8080/");
        assert_eq!(
            state.settings().api_base_url,
            Settings::default().api_base_url
        );
    }

    #[test]
    fn only_changed_settings_mark_dirty() {
        let mut state = AppState::new(Settings::default());

        state.set_settings(Settings::default());
        assert!(!state.is_dirty());

        state.set_settings(Settings {
            load_thumbnails: false,
            ..Settings::default()
        });
        assert!(state.is_dirty());
        state.clear_dirty();
        assert!(!state.is_dirty());
    }
}
