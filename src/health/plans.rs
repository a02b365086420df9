//! Static per-goal guidance shown next to the computed numbers.

use super::types::Goal;

pub const ACHIEVEMENTS: [&str; 4] = [
    "Completed health assessment",
    "Set personalized goals",
    "Received custom diet plan",
    "Got exercise recommendations",
];

pub fn meal_tips(goal: Goal) -> [&'static str; 4] {
    match goal {
        Goal::WeightLoss => [
            "Focus on high-protein, low-calorie foods",
            "Include plenty of vegetables and fiber",
            "Control portion sizes",
            "Eat 4-5 smaller meals throughout the day",
        ],
        Goal::WeightGain => [
            "Add healthy fats like nuts and avocados",
            "Include calorie-dense foods",
            "Eat more frequent meals",
            "Add protein shakes between meals",
        ],
        Goal::MuscleBuilding => [
            "Consume 1.6-2.2g protein per kg body weight",
            "Time protein intake around workouts",
            "Include complex carbohydrates",
            "Stay hydrated during training",
        ],
        Goal::Maintenance => [
            "Maintain balanced macronutrient ratios",
            "Focus on whole, unprocessed foods",
            "Listen to hunger cues",
            "Practice portion control",
        ],
    }
}

pub fn exercise_focus(goal: Goal) -> &'static str {
    match goal {
        Goal::WeightLoss => "Focus on cardio and high-intensity exercises to burn calories",
        Goal::WeightGain => "Combine strength training with moderate cardio",
        Goal::MuscleBuilding => "Emphasize strength training and progressive overload",
        Goal::Maintenance => "Balance cardio and strength training for overall fitness",
    }
}

/// (activity, frequency) pairs for a training week.
pub fn weekly_schedule(goal: Goal) -> [(&'static str, &'static str); 3] {
    match goal {
        Goal::WeightLoss => [
            ("Cardio", "4-5 times per week"),
            ("Strength Training", "2-3 times per week"),
            ("Rest Days", "1-2 days"),
        ],
        Goal::MuscleBuilding => [
            ("Strength Training", "4-5 times per week"),
            ("Cardio", "2-3 times per week (light)"),
            ("Rest Days", "1-2 days"),
        ],
        Goal::WeightGain => [
            ("Strength Training", "3-4 times per week"),
            ("Cardio", "2 times per week (moderate)"),
            ("Rest Days", "2-3 days"),
        ],
        Goal::Maintenance => [
            ("Cardio", "3-4 times per week"),
            ("Strength Training", "2-3 times per week"),
            ("Rest Days", "1-2 days"),
        ],
    }
}

pub fn milestones(goal: Goal) -> [&'static str; 4] {
    match goal {
        Goal::WeightLoss => [
            "Lose 1 kg in 2 weeks",
            "Complete 10 workouts",
            "Follow diet plan for 7 days",
            "Reduce BMI by 0.5 points",
        ],
        Goal::WeightGain => [
            "Gain 0.5 kg in 2 weeks",
            "Increase strength training frequency",
            "Meet daily calorie targets",
            "Track weight consistently",
        ],
        Goal::MuscleBuilding => [
            "Increase workout intensity",
            "Meet daily protein targets",
            "Gain lean muscle mass",
            "Improve strength metrics",
        ],
        Goal::Maintenance => [
            "Maintain current weight",
            "Stay consistent with exercise",
            "Continue balanced nutrition",
            "Monitor health metrics",
        ],
    }
}
