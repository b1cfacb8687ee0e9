// Shared utils

pub mod constants;
pub mod format;
pub mod messages;
pub mod storage;
pub mod time;

pub use constants::*;
pub use format::*;
pub use storage::*;
