pub(crate) mod repository;
mod root;
mod types;

pub use root::*;
pub use types::*;
