pub mod provider;
pub mod selector;
pub mod types;

pub use provider::{CsvReferenceData, ReferenceData, StaticReferenceData};
pub use types::{DietType, ExerciseItem, FoodItem, Intensity};
