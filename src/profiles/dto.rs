use serde::{Deserialize, Serialize};

use crate::{
    health::{BmiCategory, MacroSplit, Severity},
    profiles::repo_types::Profile,
};

/// Raw assessment form. Enum fields arrive as free text and are mapped with
/// the documented fallbacks.
#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    pub age: i32,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: String,
    pub goal: String,
    pub diet_preference: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct CategoryView {
    pub label: &'static str,
    pub severity: Severity,
}

impl From<BmiCategory> for CategoryView {
    fn from(c: BmiCategory) -> Self {
        Self {
            label: c.label(),
            severity: c.severity(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: Profile,
    pub bmi_category: CategoryView,
    pub macros: MacroSplit,
}

impl From<Profile> for ProfileView {
    fn from(profile: Profile) -> Self {
        Self {
            bmi_category: profile.bmi_category().into(),
            macros: profile.macros(),
            profile,
        }
    }
}
