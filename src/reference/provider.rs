use std::{fs::File, io::Read, path::PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{ExerciseItem, FoodItem};

/// Source of the read-only food and exercise tables.
///
/// Row order is significant: the selector backfills in the order returned.
pub trait ReferenceData: Send + Sync {
    fn load_foods(&self) -> anyhow::Result<Vec<FoodItem>>;
    fn load_exercises(&self) -> anyhow::Result<Vec<ExerciseItem>>;
}

/// Reads both tables from CSV files on every call.
#[derive(Debug, Clone)]
pub struct CsvReferenceData {
    foods_path: PathBuf,
    exercises_path: PathBuf,
}

impl CsvReferenceData {
    pub fn new(foods_path: impl Into<PathBuf>, exercises_path: impl Into<PathBuf>) -> Self {
        Self {
            foods_path: foods_path.into(),
            exercises_path: exercises_path.into(),
        }
    }
}

impl ReferenceData for CsvReferenceData {
    fn load_foods(&self) -> anyhow::Result<Vec<FoodItem>> {
        let file = File::open(&self.foods_path)
            .with_context(|| format!("open foods table {}", self.foods_path.display()))?;
        let rows = parse_rows(file).context("parse foods table")?;
        debug!(rows = rows.len(), "foods table loaded");
        Ok(rows)
    }

    fn load_exercises(&self) -> anyhow::Result<Vec<ExerciseItem>> {
        let file = File::open(&self.exercises_path)
            .with_context(|| format!("open exercises table {}", self.exercises_path.display()))?;
        let rows = parse_rows(file).context("parse exercises table")?;
        debug!(rows = rows.len(), "exercises table loaded");
        Ok(rows)
    }
}

/// Headers must match the field names of the row type.
pub fn parse_rows<T: DeserializeOwned, R: Read>(reader: R) -> anyhow::Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut rows = Vec::new();
    for (i, record) in rdr.deserialize().enumerate() {
        // +2: header line, then 1-based numbering
        let row = record.with_context(|| format!("line {}", i + 2))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Tables held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticReferenceData {
    pub foods: Vec<FoodItem>,
    pub exercises: Vec<ExerciseItem>,
}

impl ReferenceData for StaticReferenceData {
    fn load_foods(&self) -> anyhow::Result<Vec<FoodItem>> {
        Ok(self.foods.clone())
    }

    fn load_exercises(&self) -> anyhow::Result<Vec<ExerciseItem>> {
        Ok(self.exercises.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::Goal;
    use crate::reference::types::{DietType, Intensity};

    const FOODS: &str = "\
food_name,category,diet_type,goal_suitability,calories_per_100g,protein,carbs,fat
Lentils,Legumes,vegan,weight_loss,116,9,20,0.4
Paneer, Dairy ,veg,muscle_building,265,18.3,1.2,20.8
";

    #[test]
    fn parses_food_rows_in_file_order() {
        let rows: Vec<FoodItem> = parse_rows(FOODS.as_bytes()).expect("parse");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].food_name, "Lentils");
        assert_eq!(rows[0].diet_type, DietType::Vegan);
        assert_eq!(rows[0].goal_suitability, Goal::WeightLoss);
        assert_eq!(rows[1].category, "Dairy");
        assert_eq!(rows[1].protein, 18.3);
    }

    #[test]
    fn bad_row_reports_its_line() {
        let csv = "\
exercise_name,category,target_muscle,intensity,equipment_needed,duration_minutes,calories_per_hour,goal_suitability
Plank,core,Core,Low,None,5,180,maintenance
Jog,cardio,Legs,Extreme,None,30,600,weight_loss
";
        let err = parse_rows::<ExerciseItem, _>(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("line 3"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let data = CsvReferenceData::new("does/not/exist.csv", "nope.csv");
        assert!(data.load_foods().is_err());
        assert!(data.load_exercises().is_err());
    }

    #[test]
    fn bundled_tables_load() {
        let data = CsvReferenceData::new("data/foods.csv", "data/exercises.csv");
        let foods = data.load_foods().expect("foods");
        let exercises = data.load_exercises().expect("exercises");
        assert!(foods.len() >= 12);
        assert!(exercises.len() >= 12);
        assert!(foods.iter().any(|f| f.diet_type == DietType::Vegan));
        assert!(exercises.iter().any(|e| e.intensity == Intensity::High));
    }
}
