pub mod auth;
pub mod item;
pub mod user;

pub use auth::*;
pub use item::*;
pub use user::*;
