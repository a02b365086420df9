use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{error, info, instrument};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, PublicUser, RefreshRequest, RegisterRequest},
        jwt::{AuthUser, JwtKeys},
        repo_types::User,
        services::{authenticate, create_account},
    },
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}

fn issue_tokens(state: &AppState, user: User) -> Result<AuthResponse, (StatusCode, String)> {
    let keys = JwtKeys::from_ref(state);
    let access_token = keys.sign_access(&user).map_err(|e| {
        error!(error = %e, "jwt sign access failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;
    let refresh_token = keys.sign_refresh(&user).map_err(|e| {
        error!(error = %e, "jwt sign refresh failed");
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;
    Ok(AuthResponse {
        access_token,
        refresh_token,
        user: user.into(),
    })
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(mut payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), (StatusCode, String)> {
    payload.username = payload.username.trim().to_string();
    payload.email = payload.email.trim().to_lowercase();

    let user = create_account(
        state.accounts.as_ref(),
        &payload.username,
        &payload.password,
        &payload.email,
    )
    .await?;

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok((StatusCode::CREATED, Json(issue_tokens(&state, user)?)))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    payload.username = payload.username.trim().to_string();

    let user = authenticate(state.accounts.as_ref(), &payload.username, &payload.password).await?;

    info!(user_id = %user.id, username = %user.username, "user logged in");
    Ok(Json(issue_tokens(&state, user)?))
}

#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, String)> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify_refresh(&payload.refresh_token)
        .map_err(|e| (StatusCode::UNAUTHORIZED, format!("{}", e)))?;

    let user = state
        .accounts
        .find_by_id(claims.sub)
        .await
        .map_err(|e| {
            error!(error = %e, "find_by_id failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?
        .ok_or((StatusCode::UNAUTHORIZED, "User not found".to_string()))?;

    Ok(Json(issue_tokens(&state, user)?))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<PublicUser>, (StatusCode, String)> {
    let user = state
        .accounts
        .find_by_id(auth.id)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %auth.id, "find_by_id failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        })?
        .ok_or((StatusCode::UNAUTHORIZED, "User not found".to_string()))?;

    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_body(username: &str, email: &str) -> Json<RegisterRequest> {
        Json(RegisterRequest {
            username: username.into(),
            email: email.into(),
            password: "secret123".into(),
        })
    }

    #[tokio::test]
    async fn register_then_login_then_refresh() {
        let state = AppState::fake();

        let (status, Json(registered)) =
            register(State(state.clone()), register_body(" jane ", " Jane@Example.COM "))
                .await
                .expect("register");
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(registered.user.username, "jane");
        assert_eq!(registered.user.email, "jane@example.com");

        let Json(logged_in) = login(
            State(state.clone()),
            Json(LoginRequest {
                username: "jane".into(),
                password: "secret123".into(),
            }),
        )
        .await
        .expect("login");
        assert_eq!(logged_in.user.id, registered.user.id);

        let Json(refreshed) = refresh(
            State(state.clone()),
            Json(RefreshRequest {
                refresh_token: logged_in.refresh_token,
            }),
        )
        .await
        .expect("refresh");
        assert_eq!(refreshed.user.id, registered.user.id);

        let Json(me) = get_me(
            State(state),
            AuthUser {
                id: registered.user.id,
                username: "jane".into(),
            },
        )
        .await
        .expect("me");
        assert_eq!(me.email, "jane@example.com");
    }

    #[tokio::test]
    async fn register_conflicts_and_validation() {
        let state = AppState::fake();
        register(State(state.clone()), register_body("jane", "jane@example.com"))
            .await
            .expect("register");

        let err = register(State(state.clone()), register_body("jane", "x@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err, (StatusCode::CONFLICT, "Username already exists".to_string()));

        let err = register(State(state), register_body("jo", "x@example.com"))
            .await
            .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert!(err.1.contains("at least 3 characters"));
    }

    #[tokio::test]
    async fn refresh_rejects_access_token() {
        let state = AppState::fake();
        let (_, Json(registered)) =
            register(State(state.clone()), register_body("jane", "jane@example.com"))
                .await
                .unwrap();
        let err = refresh(
            State(state),
            Json(RefreshRequest {
                refresh_token: registered.access_token,
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn public_user_hides_password_hash() {
        let response = PublicUser {
            id: uuid::Uuid::new_v4(),
            username: "jane".into(),
            email: "test@example.com".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("test@example.com"));
        assert!(!json.contains("password"));
    }
}
