pub mod admin;
pub mod password;

pub(crate) mod repository;
mod root;

pub use admin::{AdminGate, Role};
pub use repository::UserRow;
pub use root::*;
