use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use ecoclean_user::{LoginInput, RegisterInput};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::error::AppResult;

#[derive(Deserialize)]
pub struct Credentials {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// POST /api/auth/register
#[tracing::instrument(skip_all, fields(username = %body.username))]
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<Credentials>,
) -> AppResult<impl IntoResponse> {
    state
        .user_command
        .register(RegisterInput {
            username: body.username,
            password: body.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({"msg": "User registered successfully"})),
    ))
}

/// POST /api/auth/login
#[tracing::instrument(skip_all, fields(username = %body.username))]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<Credentials>,
) -> AppResult<impl IntoResponse> {
    let username = state
        .user_command
        .login(LoginInput {
            username: body.username,
            password: body.password,
        })
        .await?;

    Ok(Json(json!({"msg": "Login successful", "username": username})))
}

/// POST /api/auth/admin-login
pub async fn admin_login(
    State(state): State<AppState>,
    Json(body): Json<Credentials>,
) -> AppResult<impl IntoResponse> {
    let role = state.admin.login(&body.username, &body.password)?;

    tracing::info!("admin logged in");

    Ok(Json(json!({
        "msg": "Admin login successful",
        "role": role.to_string(),
    })))
}
