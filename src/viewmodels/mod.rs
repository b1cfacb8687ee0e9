pub mod query_viewmodel;
pub mod session_viewmodel;

pub use query_viewmodel::QueryViewModel;
pub use session_viewmodel::SessionViewModel;
