// ============================================================================
// STATE MODULE - interior-mutable state shared via Rc<RefCell>
// ============================================================================

pub mod app_state;
pub mod session_state;

pub use app_state::{AppState, QueryOutcome};
pub use session_state::SessionState;
