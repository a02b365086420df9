use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub refresh_ttl_minutes: i64,
}

/// Locations of the read-only reference tables.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceConfig {
    pub foods_csv: String,
    pub exercises_csv: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// `None` keeps accounts and profiles in memory.
    pub database_url: Option<String>,
    pub jwt: JwtConfig,
    pub reference: ReferenceConfig,
    /// Reject gender values other than male/female instead of falling back
    /// to the female formula.
    pub strict_gender: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").ok().filter(|v| !v.is_empty());
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "health-planner".into()),
            audience: std::env::var("JWT_AUDIENCE")
                .unwrap_or_else(|_| "health-planner-users".into()),
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
            refresh_ttl_minutes: std::env::var("JWT_REFRESH_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24 * 14),
        };
        let reference = ReferenceConfig {
            foods_csv: std::env::var("FOODS_CSV").unwrap_or_else(|_| "data/foods.csv".into()),
            exercises_csv: std::env::var("EXERCISES_CSV")
                .unwrap_or_else(|_| "data/exercises.csv".into()),
        };
        let strict_gender = std::env::var("STRICT_GENDER")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Ok(Self {
            database_url,
            jwt,
            reference,
            strict_gender,
        })
    }
}

fn parse_flag(v: &str) -> bool {
    matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
