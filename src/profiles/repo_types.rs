use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use tracing::warn;

use crate::health::{
    metrics::{bmi_category, calculate_bmi, calculate_bmr, calculate_target_calories, macronutrient_split},
    ActivityLevel, BmiCategory, DietPreference, Gender, Goal, MacroSplit,
};

/// What the user submits in an assessment, already validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInputs {
    pub age: i32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub diet_preference: DietPreference,
}

/// Values derived from [`ProfileInputs`]. Only obtainable through
/// [`HealthMetrics::compute`], so they always agree with the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthMetrics {
    bmi: f64,
    bmr: f64,
    target_calories: f64,
}

impl HealthMetrics {
    pub fn compute(inputs: &ProfileInputs) -> Self {
        let bmi = calculate_bmi(inputs.weight_kg, inputs.height_cm);
        let bmr = calculate_bmr(inputs.weight_kg, inputs.height_cm, inputs.age, inputs.gender);
        let target_calories = calculate_target_calories(bmr, inputs.activity_level, inputs.goal);
        Self {
            bmi,
            bmr,
            target_calories,
        }
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn bmr(&self) -> f64 {
        self.bmr
    }

    pub fn target_calories(&self) -> f64 {
        self.target_calories
    }
}

/// Stored health profile, one per username.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub username: String,
    #[serde(flatten)]
    pub inputs: ProfileInputs,
    #[serde(flatten)]
    pub metrics: HealthMetrics,
    #[serde(with = "time::serde::rfc3339")]
    pub created_date: OffsetDateTime,
}

impl Profile {
    pub fn new(username: impl Into<String>, inputs: ProfileInputs, created_date: OffsetDateTime) -> Self {
        let metrics = HealthMetrics::compute(&inputs);
        Self {
            username: username.into(),
            inputs,
            metrics,
            created_date,
        }
    }

    /// Fresh profile stamped with the current time, at the microsecond
    /// precision Postgres keeps.
    pub fn assess(username: impl Into<String>, inputs: ProfileInputs) -> Self {
        let now = OffsetDateTime::now_utc();
        let now = now
            .replace_nanosecond(now.nanosecond() / 1_000 * 1_000)
            .unwrap_or(now);
        Self::new(username, inputs, now)
    }

    pub fn bmi_category(&self) -> BmiCategory {
        bmi_category(self.metrics.bmi())
    }

    pub fn macros(&self) -> MacroSplit {
        macronutrient_split(self.inputs.goal, self.metrics.target_calories())
    }
}

/// `profiles` table row.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub username: String,
    pub age: i32,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: String,
    pub goal: String,
    pub diet_preference: String,
    pub bmi: f64,
    pub bmr: f64,
    pub target_calories: f64,
    pub created_date: OffsetDateTime,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = anyhow::Error;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let inputs = ProfileInputs {
            age: row.age,
            gender: row.gender.parse()?,
            height_cm: row.height_cm,
            weight_kg: row.weight_kg,
            activity_level: row.activity_level.parse()?,
            goal: row.goal.parse()?,
            diet_preference: row.diet_preference.parse()?,
        };
        let profile = Profile::new(row.username, inputs, row.created_date);
        let m = &profile.metrics;
        if m.bmi() != row.bmi || m.bmr() != row.bmr || m.target_calories() != row.target_calories {
            warn!(username = %profile.username, "stored metrics disagree with inputs; using recomputed values");
        }
        Ok(profile)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_follow_inputs() {
        let profile = Profile::assess("jane", fixtures::inputs());
        assert_eq!(profile.metrics.bmi(), 24.2);
        assert_eq!(profile.metrics.bmr(), 1642.0);
        // 1642 * 1.2 = 1970.4, minus 500
        assert_eq!(profile.metrics.target_calories(), 1470.0);
        assert_eq!(profile.bmi_category(), BmiCategory::NormalWeight);
        assert_eq!(profile.created_date.nanosecond() % 1_000, 0);
    }

    #[test]
    fn serializes_flat() {
        let profile = Profile::assess("jane", fixtures::inputs());
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["username"], "jane");
        assert_eq!(json["gender"], "male");
        assert_eq!(json["activity_level"], "sedentary");
        assert_eq!(json["diet_preference"], "vegetarian");
        assert_eq!(json["bmi"], 24.2);
        assert_eq!(json["target_calories"], 1470.0);
        assert!(json["created_date"].is_string());
    }

    #[test]
    fn row_conversion_recomputes_metrics() {
        let row = ProfileRow {
            username: "jane".into(),
            age: 25,
            gender: "male".into(),
            height_cm: 170.0,
            weight_kg: 70.0,
            activity_level: "sedentary".into(),
            goal: "weight_loss".into(),
            diet_preference: "vegetarian".into(),
            bmi: 99.0,
            bmr: 1642.0,
            target_calories: 1470.0,
            created_date: OffsetDateTime::UNIX_EPOCH,
        };
        let profile = Profile::try_from(row).unwrap();
        assert_eq!(profile.metrics.bmi(), 24.2);
        assert_eq!(profile.inputs, fixtures::inputs());
    }

    #[test]
    fn row_with_unknown_enum_is_rejected() {
        let row = ProfileRow {
            username: "jane".into(),
            age: 25,
            gender: "robot".into(),
            height_cm: 170.0,
            weight_kg: 70.0,
            activity_level: "sedentary".into(),
            goal: "weight_loss".into(),
            diet_preference: "vegetarian".into(),
            bmi: 24.2,
            bmr: 1642.0,
            target_calories: 1470.0,
            created_date: OffsetDateTime::UNIX_EPOCH,
        };
        assert!(Profile::try_from(row).is_err());
    }
}
