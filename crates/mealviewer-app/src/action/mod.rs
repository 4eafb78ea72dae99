use std::mem;

use mealviewer_core::{FetchError, Meal};

use crate::state::{Settings, SettingsDraft};

pub(crate) mod handler;

#[derive(Debug, derive_more::From)]
pub(crate) enum Action {
    Session(SessionAction),
    Ui(UiAction),
    Flow(FlowAction),
}

/// Transitions of the view state machine.
#[derive(Debug)]
pub(crate) enum SessionAction {
    OpenSearch,
    SelectResult(usize),
    Back,
    ApplyRandomMeal(Result<Meal, FetchError>),
    ApplySearchResults(Result<Vec<Meal>, FetchError>),
}

#[derive(Debug)]
pub(crate) enum UiAction {
    OpenSettings,
    CloseModal,
    StartSpinner { id: SpinnerId, kind: SpinnerKind },
    StopSpinner { id: SpinnerId },
    ThumbnailLoaded {
        url: String,
        result: Result<Vec<u8>, FetchError>,
    },
    UpdateSettings(Settings),
}

/// Actions that start background work.
#[derive(Debug)]
pub(crate) enum FlowAction {
    RequestRandomMeal,
    SubmitSearch(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SpinnerId(u64);

impl SpinnerId {
    #[must_use]
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpinnerKind {
    RandomMeal,
    Search,
}

#[derive(Debug)]
pub(crate) enum ModalRequest {
    Settings(SettingsDraft),
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }

    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
