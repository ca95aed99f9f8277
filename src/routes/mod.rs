use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use ecoclean_report::Predictor;
use sqlx::SqlitePool;

mod aimodel;
mod auth;
mod chat;
mod events;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub user_command: ecoclean_user::Command,
    pub event_command: ecoclean_event::Command,
    pub admin: ecoclean_user::AdminGate,
    pub predictor: Arc<dyn Predictor>,
    pub pool: SqlitePool,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/admin-login", post(auth::admin_login))
        .route("/api/events", get(events::list))
        .route("/api/events/", get(events::list))
        .route("/api/events/create", post(events::create))
        .route("/api/events/enroll/{event_id}", post(events::enroll))
        .route("/api/events/user/{username}", get(events::list_by_volunteer))
        .route(
            "/api/events/{id}",
            get(events::detail).delete(events::delete),
        )
        .route("/api/chat", post(chat::reply))
        .route("/api/chat/", post(chat::reply))
        .route(
            "/api/aimodel/generate-ml-report",
            post(aimodel::generate_ml_report),
        )
        .with_state(app_state)
}
