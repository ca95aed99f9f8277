pub mod chat;
pub mod config;
pub mod db;
pub mod error;
pub mod observability;
pub mod routes;
pub mod server;

pub use config::Config;
pub use routes::AppState;
pub use server::{app, serve};
