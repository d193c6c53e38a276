use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::{dto::MessageResponse, jwt::AuthUser, repo::User},
    error::ApiError,
    state::AppState,
    vault::{
        dto::{CredentialRequest, SavedPasswordsResponse},
        repo::CredentialEntry,
        services,
    },
};

async fn load_user(state: &AppState, user_id: Uuid) -> Result<User, ApiError> {
    User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("User"))
}

#[instrument(skip(state, payload))]
pub async fn save_password(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CredentialRequest>,
) -> Result<(StatusCode, Json<SavedPasswordsResponse>), ApiError> {
    let user = load_user(&state, user_id).await?;

    let mut entries = user.saved_credentials.0;
    let entry_id = services::append_entry(
        &mut entries,
        payload.website,
        payload.username,
        payload.password,
    );
    User::save_credentials(&state.db, user_id, &entries).await?;

    info!(user_id = %user_id, entry_id = %entry_id, "credential saved");
    Ok((
        StatusCode::CREATED,
        Json(SavedPasswordsResponse {
            message: "Password saved successfully",
            saved_passwords: entries,
        }),
    ))
}

#[instrument(skip(state))]
pub async fn get_passwords(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<CredentialEntry>>, ApiError> {
    let user = load_user(&state, user_id).await?;
    Ok(Json(user.saved_credentials.0))
}

#[instrument(skip(state))]
pub async fn get_password(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(entry_id): Path<Uuid>,
) -> Result<Json<CredentialEntry>, ApiError> {
    let user = load_user(&state, user_id).await?;
    let entry = services::find_entry(&user.saved_credentials.0, entry_id)
        .ok_or(ApiError::NotFound("Password"))?;
    Ok(Json(entry.clone()))
}

#[instrument(skip(state, payload))]
pub async fn update_password(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(entry_id): Path<Uuid>,
    Json(payload): Json<CredentialRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = load_user(&state, user_id).await?;

    let mut entries = user.saved_credentials.0;
    if !services::update_entry(
        &mut entries,
        entry_id,
        payload.website,
        payload.username,
        payload.password,
    ) {
        return Err(ApiError::NotFound("Password"));
    }
    User::save_credentials(&state.db, user_id, &entries).await?;

    info!(user_id = %user_id, entry_id = %entry_id, "credential updated");
    Ok(Json(MessageResponse {
        message: "Password updated",
    }))
}

/// Deleting an id that is not present still reports success; the caller's
/// desired end state holds either way.
#[instrument(skip(state))]
pub async fn delete_password(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(entry_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = load_user(&state, user_id).await?;

    let mut entries = user.saved_credentials.0;
    services::remove_entry(&mut entries, entry_id);
    User::save_credentials(&state.db, user_id, &entries).await?;

    info!(user_id = %user_id, entry_id = %entry_id, "credential deleted");
    Ok(Json(MessageResponse {
        message: "Password deleted successfully",
    }))
}
