use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, instrument};

use crate::{
    auth::jwt::AuthUser,
    profiles::{
        dto::{AssessmentRequest, ProfileView},
        repo_types::Profile,
        services::{submit_assessment, validate},
    },
    state::AppState,
};

pub const PROFILE_NOT_FOUND: &str = "Profile not found. Please complete your health assessment first.";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/assessment", post(assess))
        .route("/profile", get(get_profile))
}

/// Loads the caller's profile or answers 404 asking for an assessment.
pub(crate) async fn fetch_profile(state: &AppState, username: &str) -> Result<Profile, (StatusCode, String)> {
    state
        .profiles
        .get(username)
        .await
        .map_err(|e| {
            error!(error = %e, %username, "profile lookup failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?
        .ok_or((StatusCode::NOT_FOUND, PROFILE_NOT_FOUND.to_string()))
}

#[instrument(skip(state, payload), fields(username = %auth.username))]
pub async fn assess(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<AssessmentRequest>,
) -> Result<Json<ProfileView>, (StatusCode, String)> {
    let inputs = validate(&payload, state.config.strict_gender)?;
    let profile = submit_assessment(state.profiles.as_ref(), &auth.username, inputs)
        .await
        .map_err(|e| {
            error!(error = %e, "profile upsert failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?;
    Ok(Json(profile.into()))
}

#[instrument(skip(state), fields(username = %auth.username))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ProfileView>, (StatusCode, String)> {
    let profile = fetch_profile(&state, &auth.username).await?;
    Ok(Json(profile.into()))
}
