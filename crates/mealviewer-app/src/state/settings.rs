use mealviewer_core::{DEFAULT_BASE_URL, client::BaseUrlError, parse_base_url};

/// User preferences persisted across sessions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub(crate) api_base_url: String,
    pub(crate) load_thumbnails: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_owned(),
            load_thumbnails: true,
        }
    }
}

/// Editable copy of [`Settings`] held by the settings dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SettingsDraft {
    pub(crate) api_base_url: String,
    pub(crate) load_thumbnails: bool,
    pub(crate) error: Option<String>,
}

impl SettingsDraft {
    #[must_use]
    pub(crate) fn new(settings: &Settings) -> Self {
        Self {
            api_base_url: settings.api_base_url.clone(),
            load_thumbnails: settings.load_thumbnails,
            error: None,
        }
    }

    pub(crate) fn to_settings(&self) -> Result<Settings, BaseUrlError> {
        let url = parse_base_url(&self.api_base_url)?;
        Ok(Settings {
            api_base_url: url.into(),
            load_thumbnails: self.load_thumbnails,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Settings, SettingsDraft};

    #[test]
    fn draft_normalizes_base_url() {
        let mut draft = SettingsDraft::new(&Settings::default());
        draft.api_base_url = " http://localhost:8080/api/json/v1/1 ".into();
        draft.load_thumbnails = false;

        let settings = draft.to_settings().unwrap();

        assert_eq!(settings.api_base_url, "http://localhost:8080/api/json/v1/1/");
        assert!(!settings.load_thumbnails);
    }

    #[test]
    fn draft_rejects_invalid_url() {
        let mut draft = SettingsDraft::new(&Settings::default());
        draft.api_base_url = "themealdb".into();
        assert!(draft.to_settings().is_err());
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"load_thumbnails": false}"#).unwrap();
        assert_eq!(settings.api_base_url, Settings::default().api_base_url);
        assert!(!settings.load_thumbnails);
    }
}
