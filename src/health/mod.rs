pub mod metrics;
pub mod plans;
pub mod types;

pub use types::{ActivityLevel, BmiCategory, DietPreference, Gender, Goal, MacroSplit, Severity};
