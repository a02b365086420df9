use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use axum::http::StatusCode;
use lazy_static::lazy_static;
use rand::rngs::OsRng;
use regex::Regex;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

use crate::auth::{
    repo::{AccountStore, DuplicateAccount},
    repo_types::{NewUser, User},
};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

lazy_static! {
    static ref USERNAME_RE: Regex = Regex::new(r"^[a-zA-Z0-9_]+$").unwrap();
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("{}", .0.join("; "))]
    Invalid(Vec<&'static str>),
    #[error("Username already exists")]
    UsernameTaken,
    #[error("Email already exists")]
    EmailTaken,
    #[error("Username not found")]
    UnknownUsername,
    #[error("Incorrect password")]
    WrongPassword,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AccountError {
    pub fn status(&self) -> StatusCode {
        match self {
            AccountError::Invalid(_) => StatusCode::BAD_REQUEST,
            AccountError::UsernameTaken | AccountError::EmailTaken => StatusCode::CONFLICT,
            AccountError::UnknownUsername | AccountError::WrongPassword => StatusCode::UNAUTHORIZED,
            AccountError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AccountError> for (StatusCode, String) {
    fn from(e: AccountError) -> Self {
        (e.status(), e.to_string())
    }
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Sign-up rules. Collects every violated rule, in display order.
pub fn validate_signup(username: &str, email: &str, password: &str) -> Result<(), AccountError> {
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(AccountError::Invalid(vec!["Please fill in all fields"]));
    }

    let mut errors = Vec::new();
    if username.chars().count() < MIN_USERNAME_LEN {
        errors.push("Username must be at least 3 characters long");
    }
    if !USERNAME_RE.is_match(username) {
        errors.push("Username can only contain letters, numbers, and underscores");
    }
    if !is_valid_email(email) {
        errors.push("Please enter a valid email address");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push("Password must be at least 6 characters long");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AccountError::Invalid(errors))
    }
}

pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

pub fn verify_password(plain: &str, hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| {
        error!(error = %e, "argon2 parse hash error");
        anyhow::anyhow!(e.to_string())
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

/// Registers an account. `username` is taken as given, `email` is expected
/// trimmed and lowercased.
#[instrument(skip(store, password))]
pub async fn create_account(
    store: &dyn AccountStore,
    username: &str,
    password: &str,
    email: &str,
) -> Result<User, AccountError> {
    validate_signup(username, email, password)?;

    if store.find_by_username(username).await?.is_some() {
        warn!("username already registered");
        return Err(AccountError::UsernameTaken);
    }
    if store.find_by_email(email).await?.is_some() {
        warn!("email already registered");
        return Err(AccountError::EmailTaken);
    }

    let password_hash = hash_password(password)?;
    let user = store
        .insert(NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
        })
        .await
        .map_err(|e| {
            // lost a race with a concurrent sign-up
            match e.downcast_ref::<DuplicateAccount>().copied() {
                Some(DuplicateAccount::Username) => AccountError::UsernameTaken,
                Some(DuplicateAccount::Email) => AccountError::EmailTaken,
                None => AccountError::Internal(e),
            }
        })?;

    info!(user_id = %user.id, "account created");
    Ok(user)
}

#[instrument(skip(store, password))]
pub async fn authenticate(
    store: &dyn AccountStore,
    username: &str,
    password: &str,
) -> Result<User, AccountError> {
    if username.is_empty() || password.is_empty() {
        return Err(AccountError::Invalid(vec!["Please fill in all fields"]));
    }

    let Some(user) = store.find_by_username(username).await? else {
        warn!("login unknown username");
        return Err(AccountError::UnknownUsername);
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(user_id = %user.id, "login invalid password");
        return Err(AccountError::WrongPassword);
    }

    Ok(user)
}
