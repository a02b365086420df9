use serde::{Deserialize, Serialize};

use crate::{
    health::{DietPreference, Goal, MacroSplit},
    profiles::dto::CategoryView,
    reference::{ExerciseItem, FoodItem},
};

/// Items requested per list when the caller does not say otherwise.
pub const DASHBOARD_ITEM_LIMIT: usize = 12;
pub const MAX_ITEM_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DASHBOARD_ITEM_LIMIT
}

impl LimitQuery {
    pub fn clamped(&self) -> usize {
        self.limit.min(MAX_ITEM_LIMIT)
    }
}

#[derive(Debug, Serialize)]
pub struct Overview {
    pub username: String,
    pub bmi: f64,
    pub bmi_category: CategoryView,
    pub bmr: f64,
    pub target_calories: f64,
    pub goal: Goal,
    pub goal_label: &'static str,
    pub macros: MacroSplit,
    pub recommendations: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct DietPlan {
    pub target_calories: f64,
    pub macros: MacroSplit,
    pub diet_preference: DietPreference,
    pub foods: Vec<FoodItem>,
    pub meal_tips: Vec<&'static str>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ExerciseGroup {
    pub category: String,
    pub exercises: Vec<ExerciseItem>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ScheduleEntry {
    pub activity: &'static str,
    pub frequency: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ExercisePlan {
    pub goal: Goal,
    pub focus: &'static str,
    pub groups: Vec<ExerciseGroup>,
    pub weekly_schedule: Vec<ScheduleEntry>,
}

#[derive(Debug, Serialize)]
pub struct Progress {
    pub weight_kg: f64,
    pub bmi: f64,
    pub target_calories: f64,
    pub days_active: i64,
    pub achievements: Vec<&'static str>,
    pub milestones: Vec<&'static str>,
}
