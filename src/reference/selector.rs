//! Picks food and exercise suggestions for a profile.
//!
//! Rows matching the goal (or tagged `maintenance`) come first in table
//! order, then the remaining eligible rows in table order pad the result up
//! to `limit`.

use tracing::{error, instrument};

use super::{
    provider::ReferenceData,
    types::{ExerciseItem, FoodItem},
};
use crate::health::{DietPreference, Goal};

/// Reference rows carrying a `goal_suitability` tag.
pub trait GoalTagged {
    fn goal_suitability(&self) -> Goal;

    fn suits(&self, goal: Goal) -> bool {
        let tag = self.goal_suitability();
        tag == goal || tag == Goal::Maintenance
    }
}

impl GoalTagged for FoodItem {
    fn goal_suitability(&self) -> Goal {
        self.goal_suitability
    }
}

impl GoalTagged for ExerciseItem {
    fn goal_suitability(&self) -> Goal {
        self.goal_suitability
    }
}

/// Goal matches first, backfill second, both in input order.
pub fn select_for_goal<'a, T, I>(eligible: I, goal: Goal, limit: usize) -> Vec<T>
where
    T: GoalTagged + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let (primary, backfill): (Vec<&T>, Vec<&T>) =
        eligible.into_iter().partition(|row| row.suits(goal));
    primary
        .into_iter()
        .chain(backfill)
        .take(limit)
        .cloned()
        .collect()
}

pub fn recommend_foods(
    foods: &[FoodItem],
    preference: DietPreference,
    goal: Goal,
    limit: usize,
) -> Vec<FoodItem> {
    let eligible = foods
        .iter()
        .filter(|food| food.diet_type.is_allowed_for(preference));
    select_for_goal(eligible, goal, limit)
}

pub fn recommend_exercises(exercises: &[ExerciseItem], goal: Goal, limit: usize) -> Vec<ExerciseItem> {
    select_for_goal(exercises, goal, limit)
}

/// Like [`recommend_foods`], loading the table first. An unavailable table
/// yields no suggestions instead of an error.
#[instrument(skip(data))]
pub fn food_recommendations(
    data: &dyn ReferenceData,
    preference: DietPreference,
    goal: Goal,
    limit: usize,
) -> Vec<FoodItem> {
    match data.load_foods() {
        Ok(foods) => recommend_foods(&foods, preference, goal, limit),
        Err(e) => {
            error!(error = %format!("{e:#}"), "food table unavailable");
            Vec::new()
        }
    }
}

#[instrument(skip(data))]
pub fn exercise_recommendations(data: &dyn ReferenceData, goal: Goal, limit: usize) -> Vec<ExerciseItem> {
    match data.load_exercises() {
        Ok(exercises) => recommend_exercises(&exercises, goal, limit),
        Err(e) => {
            error!(error = %format!("{e:#}"), "exercise table unavailable");
            Vec::new()
        }
    }
}
