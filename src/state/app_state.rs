// ============================================================================
// APP STATE - session + view state + change notifications
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::QueryResponse;
use crate::state::session_state::SessionState;

/// What the results area should show.
#[derive(Clone, PartialEq, Debug)]
pub enum QueryOutcome {
    /// A request is in flight.
    Pending,
    /// A status or error line (not found, no quota, must log in).
    Message(String),
    /// A non-empty result set to render as a table.
    Results(QueryResponse),
}

/// Whole-app state. Cloning shares the underlying cells, so views,
/// viewmodels and event closures all observe the same data.
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,
    pub show_login_modal: Rc<RefCell<bool>>,
    pub show_register_modal: Rc<RefCell<bool>>,
    pub query_outcome: Rc<RefCell<Option<QueryOutcome>>>,
    subscribers: Rc<RefCell<Vec<Box<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: SessionState::restore(),
            show_login_modal: Rc::new(RefCell::new(false)),
            show_register_modal: Rc::new(RefCell::new(false)),
            query_outcome: Rc::new(RefCell::new(None)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    /// Tell subscribers the state changed. The App subscribes a batched
    /// re-render here; event handlers call this after mutating state.
    pub fn notify_change(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }

    pub fn open_login_modal(&self) {
        *self.show_login_modal.borrow_mut() = true;
        *self.show_register_modal.borrow_mut() = false;
        self.notify_change();
    }

    pub fn open_register_modal(&self) {
        *self.show_register_modal.borrow_mut() = true;
        *self.show_login_modal.borrow_mut() = false;
        self.notify_change();
    }

    pub fn close_modals(&self) {
        *self.show_login_modal.borrow_mut() = false;
        *self.show_register_modal.borrow_mut() = false;
        self.notify_change();
    }

    pub fn set_query_outcome(&self, outcome: Option<QueryOutcome>) {
        *self.query_outcome.borrow_mut() = outcome;
    }

    pub fn query_outcome(&self) -> Option<QueryOutcome> {
        self.query_outcome.borrow().clone()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
