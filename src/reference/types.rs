use serde::{Deserialize, Serialize};

use crate::health::{DietPreference, Goal};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DietType {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "vegan")]
    Vegan,
    #[serde(rename = "non-veg")]
    NonVeg,
}

impl DietType {
    /// Hard eligibility rule: vegans get vegan rows only, vegetarians get
    /// veg and vegan rows, everyone else gets everything.
    pub fn is_allowed_for(self, preference: DietPreference) -> bool {
        match preference {
            DietPreference::Vegan => self == DietType::Vegan,
            DietPreference::Vegetarian => matches!(self, DietType::Veg | DietType::Vegan),
            DietPreference::NonVegetarian => true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

/// Row of the food reference table. Macros are grams per 100 g.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodItem {
    pub food_name: String,
    pub category: String,
    pub diet_type: DietType,
    pub goal_suitability: Goal,
    pub calories_per_100g: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Row of the exercise reference table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseItem {
    pub exercise_name: String,
    pub category: String,
    pub target_muscle: String,
    pub intensity: Intensity,
    pub equipment_needed: String,
    pub duration_minutes: u32,
    pub calories_per_hour: f64,
    pub goal_suitability: Goal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diet_rules() {
        use DietPreference::*;
        assert!(DietType::Vegan.is_allowed_for(Vegan));
        assert!(!DietType::Veg.is_allowed_for(Vegan));
        assert!(!DietType::NonVeg.is_allowed_for(Vegan));

        assert!(DietType::Vegan.is_allowed_for(Vegetarian));
        assert!(DietType::Veg.is_allowed_for(Vegetarian));
        assert!(!DietType::NonVeg.is_allowed_for(Vegetarian));

        assert!(DietType::NonVeg.is_allowed_for(NonVegetarian));
        assert!(DietType::Veg.is_allowed_for(NonVegetarian));
    }

    #[test]
    fn diet_type_uses_table_spelling() {
        let json = serde_json::to_string(&DietType::NonVeg).unwrap();
        assert_eq!(json, "\"non-veg\"");
        let back: DietType = serde_json::from_str("\"veg\"").unwrap();
        assert_eq!(back, DietType::Veg);
    }
}
