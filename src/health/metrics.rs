//! Health metric formulas.
//!
//! Everything here is a pure function of its arguments. Inputs are expected
//! to be validated by the caller (see `profiles::services::validate`); out of
//! range values produce well-defined but meaningless numbers.

use super::types::{ActivityLevel, BmiCategory, Gender, Goal, MacroSplit};

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Number of recommendation lines shown on the overview.
pub const RECOMMENDATION_DISPLAY_LIMIT: usize = 5;

const UNDERWEIGHT_BELOW: f64 = 18.5;
const OVERWEIGHT_FROM: f64 = 25.0;
const OBESE_FROM: f64 = 30.0;

/// Rounds the exact binary value to `decimals` places, ties to even.
///
/// Scaling by a power of ten first would move values such as
/// 24.94999... onto a tie, so fractional places go through float
/// formatting, which is exact.
fn round_to(value: f64, decimals: usize) -> f64 {
    if decimals == 0 {
        return value.round_ties_even();
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Body mass index, one decimal. `height_cm` must be positive.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    round_to(weight_kg / (height_m * height_m), 1)
}

pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < OVERWEIGHT_FROM {
        BmiCategory::NormalWeight
    } else if bmi < OBESE_FROM {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Basal metabolic rate (Mifflin-St Jeor), whole kcal.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: i32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    let bmr = match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    };
    round_to(bmr, 0)
}

/// Daily calorie target. Not clamped: tiny BMRs with a deficit go negative.
pub fn calculate_target_calories(bmr: f64, activity_level: ActivityLevel, goal: Goal) -> f64 {
    let maintenance = bmr * activity_level.multiplier();
    let target = match goal {
        Goal::WeightLoss => maintenance - 500.0,
        Goal::WeightGain => maintenance + 500.0,
        Goal::MuscleBuilding => maintenance + 300.0,
        Goal::Maintenance => maintenance,
    };
    round_to(target, 0)
}

/// Protein/carbs/fat share of total calories for a goal.
fn macro_ratios(goal: Goal) -> (f64, f64, f64) {
    match goal {
        Goal::WeightLoss => (0.30, 0.40, 0.30),
        Goal::MuscleBuilding => (0.35, 0.40, 0.25),
        Goal::WeightGain | Goal::Maintenance => (0.25, 0.45, 0.30),
    }
}

pub fn macronutrient_split(goal: Goal, calories: f64) -> MacroSplit {
    let (protein, carbs, fat) = macro_ratios(goal);
    MacroSplit {
        protein_g: round_to(calories * protein / KCAL_PER_GRAM_PROTEIN, 0),
        carbs_g: round_to(calories * carbs / KCAL_PER_GRAM_CARBS, 0),
        fat_g: round_to(calories * fat / KCAL_PER_GRAM_FAT, 0),
    }
}

/// Advice lines: BMI band first, then goal. Callers may truncate but must
/// not reorder.
pub fn health_recommendations(bmi: f64, goal: Goal) -> Vec<&'static str> {
    let mut out = Vec::with_capacity(6);

    if bmi < UNDERWEIGHT_BELOW {
        out.extend([
            "Focus on gaining healthy weight through nutrient-dense foods",
            "Include calorie-dense foods like nuts, avocados, and healthy oils",
            "Consider strength training to build muscle mass",
        ]);
    } else if bmi >= OBESE_FROM {
        out.extend([
            "Focus on gradual, sustainable weight loss",
            "Prioritize whole foods and limit processed foods",
            "Increase physical activity gradually",
        ]);
    }

    match goal {
        Goal::WeightLoss => out.extend([
            "Create a moderate calorie deficit of 300-500 calories per day",
            "Focus on high-protein, high-fiber foods for satiety",
            "Include both cardio and strength training exercises",
        ]),
        Goal::MuscleBuilding => out.extend([
            "Eat adequate protein (1.6-2.2g per kg body weight)",
            "Focus on progressive resistance training",
            "Ensure adequate rest and recovery",
        ]),
        Goal::WeightGain => out.extend([
            "Eat in a moderate calorie surplus",
            "Focus on nutrient-dense, calorie-rich foods",
            "Include strength training to gain lean muscle",
        ]),
        Goal::Maintenance => {}
    }

    out
}
