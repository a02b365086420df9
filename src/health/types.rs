use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Raised when a stored or submitted value names no known variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Biological sex used by the BMR formula.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Anything other than "male" counts as female. Values that are not
    /// "female" either are logged so they can be spotted in the wild.
    pub fn from_input(raw: &str) -> Self {
        match raw.parse() {
            Ok(gender) => gender,
            Err(e) => {
                warn!(error = %e, "unrecognised gender, using female formula");
                Gender::Female
            }
        }
    }
}

impl FromStr for Gender {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(UnknownVariant::new("gender", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Maintenance-calorie multiplier applied to BMR.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn from_input(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|e: UnknownVariant| {
            warn!(error = %e, "falling back to sedentary");
            ActivityLevel::Sedentary
        })
    }
}

impl FromStr for ActivityLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            _ => Err(UnknownVariant::new("activity level", s)),
        }
    }
}

/// Fitness goal. Also used as the `goal_suitability` tag on reference rows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    WeightGain,
    MuscleBuilding,
    Maintenance,
}

impl Goal {
    pub fn as_str(self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::WeightGain => "weight_gain",
            Goal::MuscleBuilding => "muscle_building",
            Goal::Maintenance => "maintenance",
        }
    }

    /// Human readable name, e.g. "Muscle Building".
    pub fn label(self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight Loss",
            Goal::WeightGain => "Weight Gain",
            Goal::MuscleBuilding => "Muscle Building",
            Goal::Maintenance => "Maintenance",
        }
    }

    pub fn from_input(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|e: UnknownVariant| {
            warn!(error = %e, "falling back to maintenance");
            Goal::Maintenance
        })
    }
}

impl FromStr for Goal {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "weight_loss" => Ok(Goal::WeightLoss),
            "weight_gain" => Ok(Goal::WeightGain),
            "muscle_building" => Ok(Goal::MuscleBuilding),
            "maintenance" => Ok(Goal::Maintenance),
            _ => Err(UnknownVariant::new("goal", s)),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DietPreference {
    Vegetarian,
    NonVegetarian,
    Vegan,
}

impl DietPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            DietPreference::Vegetarian => "vegetarian",
            DietPreference::NonVegetarian => "non_vegetarian",
            DietPreference::Vegan => "vegan",
        }
    }

    /// Unknown preferences place no restriction on foods.
    pub fn from_input(raw: &str) -> Self {
        raw.parse().unwrap_or_else(|e: UnknownVariant| {
            warn!(error = %e, "falling back to non_vegetarian");
            DietPreference::NonVegetarian
        })
    }
}

impl FromStr for DietPreference {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "vegetarian" => Ok(DietPreference::Vegetarian),
            "non_vegetarian" => Ok(DietPreference::NonVegetarian),
            "vegan" => Ok(DietPreference::Vegan),
            _ => Err(UnknownVariant::new("diet preference", s)),
        }
    }
}

/// Presentation-neutral styling hint attached to a BMI category.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Healthy,
    Caution,
    Critical,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            BmiCategory::Underweight | BmiCategory::Overweight => Severity::Caution,
            BmiCategory::NormalWeight => Severity::Healthy,
            BmiCategory::Obese => Severity::Critical,
        }
    }
}

/// Daily macronutrient targets in grams.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MacroSplit {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_parsing_is_case_insensitive() {
        assert_eq!("Male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!(" FEMALE ".parse::<Gender>(), Ok(Gender::Female));
        assert!("other".parse::<Gender>().is_err());
    }

    #[test]
    fn lenient_parsing_uses_documented_fallbacks() {
        assert_eq!(Gender::from_input("nonbinary"), Gender::Female);
        assert_eq!(Gender::from_input("MALE"), Gender::Male);
        assert_eq!(ActivityLevel::from_input("couch"), ActivityLevel::Sedentary);
        assert_eq!(Goal::from_input("bulk"), Goal::Maintenance);
        assert_eq!(
            DietPreference::from_input("pescatarian"),
            DietPreference::NonVegetarian
        );
    }

    #[test]
    fn as_str_parses_back() {
        for level in [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ] {
            assert_eq!(level.as_str().parse::<ActivityLevel>(), Ok(level));
        }
        for goal in [
            Goal::WeightLoss,
            Goal::WeightGain,
            Goal::MuscleBuilding,
            Goal::Maintenance,
        ] {
            assert_eq!(goal.as_str().parse::<Goal>(), Ok(goal));
        }
    }

    #[test]
    fn unknown_variant_message_names_the_field() {
        let err = "yoga".parse::<Goal>().unwrap_err();
        assert_eq!(err.to_string(), "unknown goal `yoga`");
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&ActivityLevel::VeryActive).unwrap();
        assert_eq!(json, "\"very_active\"");
        let sev = serde_json::to_string(&BmiCategory::Obese.severity()).unwrap();
        assert_eq!(sev, "\"critical\"");
    }
}
