//! Settings storage through eframe's key-value store.
//!
//! Only [`Settings`] are written. The view state, search history and
//! thumbnails live for one session.

use eframe::Storage;

use crate::state::Settings;

const SETTINGS_KEY: &str = "mealviewer-settings";

#[must_use]
pub(crate) fn load_settings(storage: &dyn Storage) -> Option<Settings> {
    let settings = eframe::get_value(storage, SETTINGS_KEY);
    if settings.is_none() && storage.get_string(SETTINGS_KEY).is_some() {
        log::warn!("stored settings could not be read; using defaults");
    }
    settings
}

pub(crate) fn save_settings(storage: &mut dyn Storage, settings: &Settings) {
    eframe::set_value(storage, SETTINGS_KEY, settings);
    log::debug!("settings saved");
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use eframe::Storage;

    use super::{SETTINGS_KEY, load_settings, save_settings};
    use crate::state::Settings;

    #[derive(Default)]
    struct MemoryStorage {
        values: HashMap<String, String>,
    }

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.values.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.values.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn settings_survive_save_and_load() {
        let mut storage = MemoryStorage::default();
        let settings = Settings {
            api_base_url: "http://localhost:8080/".into(),
            load_thumbnails: false,
        };

        save_settings(&mut storage, &settings);

        assert_eq!(load_settings(&storage), Some(settings));
    }

    #[test]
    fn missing_or_corrupt_settings_load_as_none() {
        let mut storage = MemoryStorage::default();
        assert_eq!(load_settings(&storage), None);

        storage.set_string(SETTINGS_KEY, "not ron at all (".into());
        assert_eq!(load_settings(&storage), None);
    }
}
