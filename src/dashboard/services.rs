use time::OffsetDateTime;

use crate::{
    dashboard::dto::{DietPlan, ExerciseGroup, ExercisePlan, Overview, Progress, ScheduleEntry},
    health::{
        metrics::{health_recommendations, RECOMMENDATION_DISPLAY_LIMIT},
        plans::{exercise_focus, meal_tips, milestones, weekly_schedule, ACHIEVEMENTS},
    },
    profiles::repo_types::Profile,
    reference::{
        selector::{exercise_recommendations, food_recommendations},
        ExerciseItem, ReferenceData,
    },
};

pub fn overview(profile: &Profile) -> Overview {
    let goal = profile.inputs.goal;
    let bmi = profile.metrics.bmi();
    let mut recommendations = health_recommendations(bmi, goal);
    recommendations.truncate(RECOMMENDATION_DISPLAY_LIMIT);

    Overview {
        username: profile.username.clone(),
        bmi,
        bmi_category: profile.bmi_category().into(),
        bmr: profile.metrics.bmr(),
        target_calories: profile.metrics.target_calories(),
        goal,
        goal_label: goal.label(),
        macros: profile.macros(),
        recommendations,
    }
}

pub fn diet_plan(profile: &Profile, data: &dyn ReferenceData, limit: usize) -> DietPlan {
    let inputs = &profile.inputs;
    DietPlan {
        target_calories: profile.metrics.target_calories(),
        macros: profile.macros(),
        diet_preference: inputs.diet_preference,
        foods: food_recommendations(data, inputs.diet_preference, inputs.goal, limit),
        meal_tips: meal_tips(inputs.goal).to_vec(),
    }
}

pub fn exercise_plan(profile: &Profile, data: &dyn ReferenceData, limit: usize) -> ExercisePlan {
    let goal = profile.inputs.goal;
    let exercises = exercise_recommendations(data, goal, limit);
    ExercisePlan {
        goal,
        focus: exercise_focus(goal),
        groups: group_by_category(exercises),
        weekly_schedule: weekly_schedule(goal)
            .into_iter()
            .map(|(activity, frequency)| ScheduleEntry { activity, frequency })
            .collect(),
    }
}

/// Groups keep the order in which each category first appears.
pub fn group_by_category(exercises: Vec<ExerciseItem>) -> Vec<ExerciseGroup> {
    let mut groups: Vec<ExerciseGroup> = Vec::new();
    for exercise in exercises {
        match groups.iter_mut().find(|g| g.category == exercise.category) {
            Some(group) => group.exercises.push(exercise),
            None => groups.push(ExerciseGroup {
                category: exercise.category.clone(),
                exercises: vec![exercise],
            }),
        }
    }
    groups
}

/// Whole days since the profile was created. Never negative.
pub fn days_active(created: OffsetDateTime, now: OffsetDateTime) -> i64 {
    (now - created).whole_days().max(0)
}

pub fn progress(profile: &Profile, now: OffsetDateTime) -> Progress {
    Progress {
        weight_kg: profile.inputs.weight_kg,
        bmi: profile.metrics.bmi(),
        target_calories: profile.metrics.target_calories(),
        days_active: days_active(profile.created_date, now),
        achievements: ACHIEVEMENTS.to_vec(),
        milestones: milestones(profile.inputs.goal).to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use time::Duration;

    use super::*;
    use crate::{
        health::{DietPreference, Goal},
        profiles::repo_types::fixtures,
        reference::{CsvReferenceData, DietType, Intensity, StaticReferenceData},
    };

    fn exercise(name: &str, category: &str) -> ExerciseItem {
        ExerciseItem {
            exercise_name: name.into(),
            category: category.into(),
            target_muscle: "Full Body".into(),
            intensity: Intensity::Medium,
            equipment_needed: "None".into(),
            duration_minutes: 30,
            calories_per_hour: 300.0,
            goal_suitability: Goal::Maintenance,
        }
    }

    fn bundled() -> CsvReferenceData {
        CsvReferenceData::new("data/foods.csv", "data/exercises.csv")
    }

    #[test]
    fn grouping_keeps_first_appearance_order() {
        let groups = group_by_category(vec![
            exercise("run", "Cardio"),
            exercise("squat", "Strength"),
            exercise("bike", "Cardio"),
            exercise("yoga", "Flexibility"),
        ]);
        let categories: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, ["Cardio", "Strength", "Flexibility"]);
        let cardio: Vec<_> = groups[0].exercises.iter().map(|e| e.exercise_name.as_str()).collect();
        assert_eq!(cardio, ["run", "bike"]);
        assert!(group_by_category(Vec::new()).is_empty());
    }

    #[test]
    fn days_active_counts_whole_days() {
        let created = OffsetDateTime::UNIX_EPOCH;
        assert_eq!(days_active(created, created + Duration::hours(47)), 1);
        assert_eq!(days_active(created, created + Duration::days(30)), 30);
        assert_eq!(days_active(created, created - Duration::days(1)), 0);
    }

    #[test]
    fn overview_reports_metrics_and_capped_advice() {
        let profile = Profile::assess("jane", fixtures::inputs());
        let view = overview(&profile);
        assert_eq!(view.username, "jane");
        assert_eq!(view.bmr, 1642.0);
        assert_eq!(view.goal_label, "Weight Loss");
        assert_eq!(view.bmi_category.label, "Normal weight");
        assert!(!view.recommendations.is_empty());
        assert!(view.recommendations.len() <= RECOMMENDATION_DISPLAY_LIMIT);
    }

    #[test]
    fn diet_plan_respects_preference() {
        let profile = Profile::assess("jane", fixtures::inputs());
        let plan = diet_plan(&profile, &bundled(), 12);
        assert_eq!(plan.diet_preference, DietPreference::Vegetarian);
        assert!(!plan.foods.is_empty());
        assert!(plan.foods.len() <= 12);
        assert!(plan.foods.iter().all(|f| f.diet_type != DietType::NonVeg));
        assert_eq!(plan.meal_tips.len(), 4);
    }

    #[test]
    fn missing_tables_give_empty_lists() {
        let profile = Profile::assess("jane", fixtures::inputs());
        let data = CsvReferenceData::new("missing/foods.csv", "missing/exercises.csv");
        assert!(diet_plan(&profile, &data, 12).foods.is_empty());
        let plan = exercise_plan(&profile, &data, 12);
        assert!(plan.groups.is_empty());
        assert_eq!(plan.weekly_schedule.len(), 3);
    }

    #[test]
    fn exercise_plan_groups_selection() {
        let profile = Profile::assess("jane", fixtures::inputs());
        let data = StaticReferenceData {
            foods: Vec::new(),
            exercises: vec![
                exercise("run", "Cardio"),
                exercise("squat", "Strength"),
                exercise("bike", "Cardio"),
            ],
        };
        let plan = exercise_plan(&profile, &data, 2);
        assert_eq!(plan.groups.len(), 2);
        assert_eq!(plan.groups[0].exercises.len(), 1);
        assert_eq!(plan.weekly_schedule[0].activity, "Cardio");
        assert_eq!(plan.focus, exercise_focus(Goal::WeightLoss));
    }

    #[test]
    fn progress_tracks_profile() {
        let profile = Profile::assess("jane", fixtures::inputs());
        let later = profile.created_date + Duration::days(3);
        let p = progress(&profile, later);
        assert_eq!(p.days_active, 3);
        assert_eq!(p.weight_kg, 70.0);
        assert_eq!(p.achievements.len(), 4);
        assert_eq!(p.milestones, milestones(Goal::WeightLoss).to_vec());
    }
}
