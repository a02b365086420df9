use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    auth::repo::{AccountStore, MemoryAccountStore, PgAccountStore},
    config::{AppConfig, JwtConfig, ReferenceConfig},
    db,
    profiles::repo::{MemoryProfileStore, PgProfileStore, ProfileStore},
    reference::{CsvReferenceData, ReferenceData},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub accounts: Arc<dyn AccountStore>,
    pub profiles: Arc<dyn ProfileStore>,
    pub reference: Arc<dyn ReferenceData>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let (accounts, profiles): (Arc<dyn AccountStore>, Arc<dyn ProfileStore>) =
            match &config.database_url {
                Some(url) => {
                    let pool = db::connect(url).await?;
                    info!("using postgres stores");
                    (
                        Arc::new(PgAccountStore::new(pool.clone())),
                        Arc::new(PgProfileStore::new(pool)),
                    )
                }
                None => {
                    warn!("DATABASE_URL not set; accounts and profiles are kept in memory");
                    (
                        Arc::new(MemoryAccountStore::new()),
                        Arc::new(MemoryProfileStore::new()),
                    )
                }
            };

        let reference = Arc::new(CsvReferenceData::new(
            &config.reference.foods_csv,
            &config.reference.exercises_csv,
        )) as Arc<dyn ReferenceData>;

        Ok(Self::from_parts(config, accounts, profiles, reference))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        accounts: Arc<dyn AccountStore>,
        profiles: Arc<dyn ProfileStore>,
        reference: Arc<dyn ReferenceData>,
    ) -> Self {
        Self {
            config,
            accounts,
            profiles,
            reference,
        }
    }

    /// In-memory stores, bundled reference tables and a throwaway JWT secret.
    pub fn fake() -> Self {
        let config = Arc::new(AppConfig {
            database_url: None,
            jwt: JwtConfig {
                secret: "test".into(),
                issuer: "test".into(),
                audience: "test".into(),
                ttl_minutes: 5,
                refresh_ttl_minutes: 60,
            },
            reference: ReferenceConfig {
                foods_csv: "data/foods.csv".into(),
                exercises_csv: "data/exercises.csv".into(),
            },
            strict_gender: false,
        });
        let reference = Arc::new(CsvReferenceData::new(
            &config.reference.foods_csv,
            &config.reference.exercises_csv,
        ));

        Self::from_parts(
            config,
            Arc::new(MemoryAccountStore::new()),
            Arc::new(MemoryProfileStore::new()),
            reference,
        )
    }
}
