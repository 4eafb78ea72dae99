use crate::{
    action::{ModalRequest, SpinnerId, SpinnerKind},
    flow::FlowExecutor,
    state::ThumbnailCache,
    worker::Worker,
};

// UiState holds ephemeral UI-only state (modals, spinners, text input, thumbnails). It is not persisted.
#[derive(Debug)]
pub(crate) struct UiState {
    pub(crate) active_modal: Option<ModalRequest>,
    pub(crate) executor: FlowExecutor,
    pub(crate) spinner_state: SpinnerState,
    pub(crate) query_input: String,
    pub(crate) thumbnails: ThumbnailCache,
    pub(crate) worker: Worker,
}

impl UiState {
    #[must_use]
    pub(crate) fn new(worker: Worker) -> Self {
        Self {
            active_modal: None,
            executor: FlowExecutor::new(),
            spinner_state: SpinnerState::default(),
            query_input: String::new(),
            thumbnails: ThumbnailCache::default(),
            worker,
        }
    }

    /// Returns `true` if user input should be routed to the main screen.
    #[must_use]
    pub(crate) fn accepts_input(&self) -> bool {
        self.active_modal.is_none() && !self.spinner_state.is_active()
    }
}

#[derive(Debug, Default)]
pub(crate) struct SpinnerState {
    active: Vec<SpinnerEntry>,
}

impl SpinnerState {
    pub(crate) fn start(&mut self, id: SpinnerId, kind: SpinnerKind) {
        self.active.push(SpinnerEntry { id, kind });
    }

    pub(crate) fn stop(&mut self, id: SpinnerId) {
        if let Some(index) = self.active.iter().position(|entry| entry.id == id) {
            self.active.remove(index);
        }
    }

    #[must_use]
    pub(crate) fn is_active(&self) -> bool {
        !self.active.is_empty()
    }

    #[must_use]
    pub(crate) fn active_kind(&self) -> Option<SpinnerKind> {
        self.active.first().map(|entry| entry.kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SpinnerEntry {
    pub(crate) id: SpinnerId,
    pub(crate) kind: SpinnerKind,
}

#[cfg(test)]
mod tests {
    use crate::action::{SpinnerId, SpinnerKind};

    use super::SpinnerState;

    #[test]
    fn spinner_stops_by_id() {
        let mut spinners = SpinnerState::default();
        spinners.start(SpinnerId::new(1), SpinnerKind::RandomMeal);
        spinners.start(SpinnerId::new(2), SpinnerKind::Search);
        assert_eq!(spinners.active_kind(), Some(SpinnerKind::RandomMeal));

        spinners.stop(SpinnerId::new(1));
        assert_eq!(spinners.active_kind(), Some(SpinnerKind::Search));

        spinners.stop(SpinnerId::new(2));
        assert!(!spinners.is_active());
    }
}
