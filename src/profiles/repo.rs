use std::collections::HashMap;

use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::profiles::repo_types::{Profile, ProfileRow};

/// Profile persistence keyed by username. `upsert` replaces any previous
/// row, and a `get` after an `upsert` observes the new value.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn upsert(&self, profile: &Profile) -> anyhow::Result<()>;
    async fn get(&self, username: &str) -> anyhow::Result<Option<Profile>>;
}

#[derive(Clone)]
pub struct PgProfileStore {
    db: PgPool,
}

impl PgProfileStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn upsert(&self, profile: &Profile) -> anyhow::Result<()> {
        let p = &profile.inputs;
        let m = &profile.metrics;
        sqlx::query(
            r#"
            INSERT INTO profiles (
                username, age, gender, height_cm, weight_kg, activity_level, goal,
                diet_preference, bmi, bmr, target_calories, created_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (username) DO UPDATE SET
                age = EXCLUDED.age,
                gender = EXCLUDED.gender,
                height_cm = EXCLUDED.height_cm,
                weight_kg = EXCLUDED.weight_kg,
                activity_level = EXCLUDED.activity_level,
                goal = EXCLUDED.goal,
                diet_preference = EXCLUDED.diet_preference,
                bmi = EXCLUDED.bmi,
                bmr = EXCLUDED.bmr,
                target_calories = EXCLUDED.target_calories,
                created_date = EXCLUDED.created_date
            "#,
        )
        .bind(&profile.username)
        .bind(p.age)
        .bind(p.gender.as_str())
        .bind(p.height_cm)
        .bind(p.weight_kg)
        .bind(p.activity_level.as_str())
        .bind(p.goal.as_str())
        .bind(p.diet_preference.as_str())
        .bind(m.bmi())
        .bind(m.bmr())
        .bind(m.target_calories())
        .bind(profile.created_date)
        .execute(&self.db)
        .await
        .context("upsert profile")?;
        Ok(())
    }

    async fn get(&self, username: &str) -> anyhow::Result<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT username, age, gender, height_cm, weight_kg, activity_level, goal,
                   diet_preference, bmi, bmr, target_calories, created_date
            FROM profiles
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await
        .context("get profile")?;

        row.map(Profile::try_from).transpose()
    }
}

#[derive(Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<String, Profile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn upsert(&self, profile: &Profile) -> anyhow::Result<()> {
        self.profiles
            .write()
            .await
            .insert(profile.username.clone(), profile.clone());
        Ok(())
    }

    async fn get(&self, username: &str) -> anyhow::Result<Option<Profile>> {
        Ok(self.profiles.read().await.get(username).cloned())
    }
}
