//! Async flows driven from the UI update loop.
//!
//! A flow is a future that requests actions through a [`FlowHandle`] and awaits
//! background work. The [`FlowExecutor`] polls every flow once per frame with a
//! no-op waker; flows never run on another thread.

use std::{
    cell::RefCell,
    future::Future,
    pin::Pin,
    rc::Rc,
    task::{Context, Waker},
};

use crate::action::{Action, ActionRequestQueue};

pub(crate) use self::tasks::{spawn_random_meal_flow, spawn_search_flow, spawn_thumbnail_flow};

mod helpers;
mod tasks;

/// Lightweight async flow executor for UI orchestration.
///
/// Flows are either exclusive (a fetch the user is waiting on) or background
/// (thumbnail downloads). At most one exclusive flow runs at a time.
pub(crate) struct FlowExecutor {
    state: Rc<RefCell<FlowState>>,
    tasks: Vec<FlowTask>,
}

impl std::fmt::Debug for FlowExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowExecutor")
            .field("tasks", &self.tasks.len())
            .finish_non_exhaustive()
    }
}

impl Default for FlowExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowExecutor {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(FlowState::default())),
            tasks: Vec::new(),
        }
    }

    /// Returns a handle for flows to request actions.
    #[must_use]
    pub(crate) fn handle(&self) -> FlowHandle {
        FlowHandle {
            state: Rc::clone(&self.state),
        }
    }

    /// Returns true if no exclusive flow is running.
    #[must_use]
    pub(crate) fn is_idle(&self) -> bool {
        !self.tasks.iter().any(|task| task.exclusive)
    }

    /// Returns true if any flow, exclusive or background, is pending.
    #[must_use]
    pub(crate) fn has_pending(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Spawn an exclusive flow.
    pub(crate) fn spawn(&mut self, future: impl Future<Output = ()> + 'static) {
        self.push(future, true);
    }

    /// Spawn a flow that may run alongside others.
    pub(crate) fn spawn_background(&mut self, future: impl Future<Output = ()> + 'static) {
        self.push(future, false);
    }

    fn push(&mut self, future: impl Future<Output = ()> + 'static, exclusive: bool) {
        self.tasks.push(FlowTask {
            future: Box::pin(future),
            exclusive,
        });
    }

    /// Poll all active flows and drain any queued actions into the UI action queue.
    pub(crate) fn poll(&mut self, action_queue: &mut ActionRequestQueue) {
        self.drain_actions(action_queue);

        let mut cx = Context::from_waker(Waker::noop());

        let mut i = 0;
        while i < self.tasks.len() {
            let task = &mut self.tasks[i];
            if task.future.as_mut().poll(&mut cx).is_ready() {
                self.tasks.swap_remove(i);
            } else {
                i += 1;
            }
        }

        self.drain_actions(action_queue);
    }

    fn drain_actions(&mut self, action_queue: &mut ActionRequestQueue) {
        let mut state = self.state.borrow_mut();
        for action in state.pending_actions.drain(..) {
            action_queue.request(action);
        }
    }
}

/// Flow handle used by async flows to request actions.
#[derive(Clone)]
pub(crate) struct FlowHandle {
    state: Rc<RefCell<FlowState>>,
}

impl FlowHandle {
    pub(crate) fn request_action(&self, action: Action) {
        self.state.borrow_mut().pending_actions.push(action);
    }
}

struct FlowTask {
    future: Pin<Box<dyn Future<Output = ()>>>,
    exclusive: bool,
}

#[derive(Default)]
struct FlowState {
    pending_actions: Vec<Action>,
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, future, rc::Rc, task::Poll};

    use crate::action::{Action, ActionRequestQueue, SessionAction};

    use super::FlowExecutor;

    #[test]
    fn ready_flow_actions_are_drained() {
        let mut executor = FlowExecutor::new();
        let handle = executor.handle();
        executor.spawn(async move {
            handle.request_action(SessionAction::Back.into());
        });
        assert!(!executor.is_idle());

        let mut queue = ActionRequestQueue::default();
        executor.poll(&mut queue);

        assert!(executor.is_idle());
        assert!(!executor.has_pending());
        let actions = queue.take_all();
        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], Action::Session(SessionAction::Back)));
    }

    #[test]
    fn background_flows_do_not_block() {
        let mut executor = FlowExecutor::new();
        let polls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&polls);
        executor.spawn_background(future::poll_fn(move |_| {
            counter.set(counter.get() + 1);
            if counter.get() < 3 {
                Poll::Pending
            } else {
                Poll::Ready(())
            }
        }));

        assert!(executor.is_idle());
        assert!(executor.has_pending());

        let mut queue = ActionRequestQueue::default();
        executor.poll(&mut queue);
        executor.poll(&mut queue);
        assert!(executor.has_pending());
        executor.poll(&mut queue);
        assert!(!executor.has_pending());
        assert_eq!(polls.get(), 3);
    }
}
