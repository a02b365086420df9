use std::ops::RangeInclusive;

use axum::http::StatusCode;
use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    health::{ActivityLevel, DietPreference, Gender, Goal},
    profiles::{
        dto::AssessmentRequest,
        repo::ProfileStore,
        repo_types::{Profile, ProfileInputs},
    },
};

pub const AGE_RANGE: RangeInclusive<i32> = 13..=120;
pub const HEIGHT_CM_RANGE: RangeInclusive<f64> = 100.0..=250.0;
pub const WEIGHT_KG_RANGE: RangeInclusive<f64> = 30.0..=300.0;

/// Assessment input rejected before any metric is computed.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Please enter a valid age between 13 and 120")]
    Age,
    #[error("Please enter a valid height between 100 and 250 cm")]
    Height,
    #[error("Please enter a valid weight between 30 and 300 kg")]
    Weight,
    #[error("Please select a gender of male or female")]
    Gender,
}

impl From<ValidationError> for (StatusCode, String) {
    fn from(e: ValidationError) -> Self {
        (StatusCode::BAD_REQUEST, e.to_string())
    }
}

/// Checks ranges and maps free-text choices onto the closed enums.
pub fn validate(req: &AssessmentRequest, strict_gender: bool) -> Result<ProfileInputs, ValidationError> {
    if !AGE_RANGE.contains(&req.age) {
        return Err(ValidationError::Age);
    }
    if !HEIGHT_CM_RANGE.contains(&req.height_cm) {
        return Err(ValidationError::Height);
    }
    if !WEIGHT_KG_RANGE.contains(&req.weight_kg) {
        return Err(ValidationError::Weight);
    }

    let gender = if strict_gender {
        req.gender.parse().map_err(|_| ValidationError::Gender)?
    } else {
        Gender::from_input(&req.gender)
    };

    Ok(ProfileInputs {
        age: req.age,
        gender,
        height_cm: req.height_cm,
        weight_kg: req.weight_kg,
        activity_level: ActivityLevel::from_input(&req.activity_level),
        goal: Goal::from_input(&req.goal),
        diet_preference: DietPreference::from_input(&req.diet_preference),
    })
}

/// Computes the derived metrics and replaces the user's stored profile.
#[instrument(skip(store, inputs))]
pub async fn submit_assessment(
    store: &dyn ProfileStore,
    username: &str,
    inputs: ProfileInputs,
) -> anyhow::Result<Profile> {
    let profile = Profile::assess(username, inputs);
    store.upsert(&profile).await?;
    info!(
        bmi = profile.metrics.bmi(),
        bmr = profile.metrics.bmr(),
        target_calories = profile.metrics.target_calories(),
        "profile saved"
    );
    Ok(profile)
}
