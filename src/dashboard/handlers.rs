use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{debug, instrument};

use crate::{
    auth::jwt::AuthUser,
    dashboard::{
        dto::{DietPlan, ExercisePlan, LimitQuery, Overview, Progress},
        services,
    },
    profiles::handlers::fetch_profile,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/overview", get(get_overview))
        .route("/dashboard/diet", get(get_diet))
        .route("/dashboard/exercise", get(get_exercise))
        .route("/dashboard/progress", get(get_progress))
}

#[instrument(skip(state), fields(username = %auth.username))]
pub async fn get_overview(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Overview>, (StatusCode, String)> {
    let profile = fetch_profile(&state, &auth.username).await?;
    Ok(Json(services::overview(&profile)))
}

#[instrument(skip(state), fields(username = %auth.username))]
pub async fn get_diet(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(q): Query<LimitQuery>,
) -> Result<Json<DietPlan>, (StatusCode, String)> {
    let profile = fetch_profile(&state, &auth.username).await?;
    let plan = services::diet_plan(&profile, state.reference.as_ref(), q.clamped());
    debug!(foods = plan.foods.len(), "diet plan built");
    Ok(Json(plan))
}

#[instrument(skip(state), fields(username = %auth.username))]
pub async fn get_exercise(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(q): Query<LimitQuery>,
) -> Result<Json<ExercisePlan>, (StatusCode, String)> {
    let profile = fetch_profile(&state, &auth.username).await?;
    let plan = services::exercise_plan(&profile, state.reference.as_ref(), q.clamped());
    debug!(groups = plan.groups.len(), "exercise plan built");
    Ok(Json(plan))
}

#[instrument(skip(state), fields(username = %auth.username))]
pub async fn get_progress(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Progress>, (StatusCode, String)> {
    let profile = fetch_profile(&state, &auth.username).await?;
    Ok(Json(services::progress(&profile, OffsetDateTime::now_utc())))
}
