use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use ecoclean_event::{CreateEventInput, Event};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::error::AppResult;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventBody {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    time: String,
    created_by: Option<String>,
}

#[derive(Deserialize)]
pub struct EnrollBody {
    #[serde(default)]
    username: String,
}

/// POST /api/events/create
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateEventBody>,
) -> AppResult<impl IntoResponse> {
    let id = state
        .event_command
        .create(CreateEventInput {
            title: body.title,
            description: body.description,
            location: body.location,
            date: body.date,
            time: body.time,
            created_by: body.created_by,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({"msg": "Event created successfully", "id": id})),
    ))
}

/// GET /api/events
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    Ok(Json(state.event_command.list().await?))
}

/// GET /api/events/{id}
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Event>> {
    let Some(event) = state.event_command.find(id).await? else {
        return Err(ecoclean_shared::Error::NotFound("Event not found".to_owned()).into());
    };

    Ok(Json(event))
}

/// GET /api/events/user/{username}
pub async fn list_by_volunteer(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Vec<Event>>> {
    Ok(Json(state.event_command.list_by_volunteer(username).await?))
}

/// POST /api/events/enroll/{event_id}
#[tracing::instrument(skip_all, fields(event_id = %event_id))]
pub async fn enroll(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(body): Json<EnrollBody>,
) -> AppResult<impl IntoResponse> {
    state.event_command.enroll(event_id, body.username).await?;

    Ok(Json(json!({"msg": "Enrollment successful"})))
}

/// DELETE /api/events/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.event_command.delete(id).await?;

    Ok(Json(json!({"msg": "Event deleted successfully"})))
}
