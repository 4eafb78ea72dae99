use std::{collections::HashMap, sync::Arc};

use mealviewer_core::FetchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ThumbnailState {
    Loading,
    Ready(Arc<[u8]>),
    Unavailable,
}

// Thumbnails are keyed by URL and kept for the process lifetime. Failures are not retried.
#[derive(Debug, Default)]
pub(crate) struct ThumbnailCache {
    entries: HashMap<String, ThumbnailState>,
}

impl ThumbnailCache {
    /// Marks `url` as loading. Returns `false` if it is already known.
    pub(crate) fn start(&mut self, url: &str) -> bool {
        if self.entries.contains_key(url) {
            return false;
        }
        self.entries.insert(url.to_owned(), ThumbnailState::Loading);
        true
    }

    pub(crate) fn finish(&mut self, url: String, result: Result<Vec<u8>, FetchError>) {
        let state = match result {
            Ok(bytes) => ThumbnailState::Ready(bytes.into()),
            Err(err) => {
                log::warn!("thumbnail {url} unavailable: {err}");
                ThumbnailState::Unavailable
            }
        };
        self.entries.insert(url, state);
    }

    #[must_use]
    pub(crate) fn get(&self, url: &str) -> Option<&ThumbnailState> {
        self.entries.get(url)
    }
}

#[cfg(test)]
mod tests {
    use mealviewer_core::FetchError;

    use super::{ThumbnailCache, ThumbnailState};

    #[test]
    fn start_is_idempotent() {
        let mut cache = ThumbnailCache::default();
        assert!(cache.start("https://example.test/a.jpg"));
        assert!(!cache.start("https://example.test/a.jpg"));
        assert_eq!(
            cache.get("https://example.test/a.jpg"),
            Some(&ThumbnailState::Loading)
        );
    }

    #[test]
    fn finish_records_outcome() {
        let mut cache = ThumbnailCache::default();
        cache.start("a");
        cache.start("b");

        cache.finish("a".into(), Ok(vec![1, 2, 3]));
        cache.finish("b".into(), Err(FetchError::Http(404)));

        assert_eq!(
            cache.get("a"),
            Some(&ThumbnailState::Ready(vec![1, 2, 3].into()))
        );
        assert_eq!(cache.get("b"), Some(&ThumbnailState::Unavailable));
        assert!(!cache.start("b"));
    }
}
