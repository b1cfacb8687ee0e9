pub mod app;
pub mod auth_modals;
pub mod query;
pub mod results;
pub mod user_status;

pub use app::render_app;
pub use auth_modals::{render_login_modal, render_register_modal};
pub use query::render_query_form;
pub use results::render_results;
pub use user_status::render_user_status;
