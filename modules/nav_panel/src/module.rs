//! Module declaration and lifecycle
//!
//! `migrate` prepares the schema, `init` provisions first-run data and builds
//! the services, `router` and `client` expose them.

use crate::config::Config;
use crate::contract::NavPanelApi;
use crate::domain::{self, Repositories, Services};
use crate::infra::storage::repositories::{
    SeaOrmGroupRepository, SeaOrmSearchEngineRepository, SeaOrmSettingsRepository,
    SeaOrmWebsiteRepository,
};
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Nav panel module
pub struct NavPanelModule {
    config: Arc<Config>,
    services: RwLock<Option<Arc<Services>>>,
}

impl Default for NavPanelModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl NavPanelModule {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            services: RwLock::new(None),
        }
    }

    /// Run pending schema migrations
    pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Nav panel migrations completed");
        Ok(())
    }

    /// Build the SeaORM repositories and initialize the module on top of them
    pub async fn init(&self, db: Arc<DatabaseConnection>) -> Result<()> {
        let repos = Repositories {
            websites: Arc::new(SeaOrmWebsiteRepository::new(db.clone())),
            search_engines: Arc::new(SeaOrmSearchEngineRepository::new(db.clone())),
            groups: Arc::new(SeaOrmGroupRepository::new(db.clone())),
            settings: Arc::new(SeaOrmSettingsRepository::new(db)),
        };
        self.init_with_repositories(repos).await
    }

    /// Provision first-run data and build the services
    pub async fn init_with_repositories(&self, repos: Repositories) -> Result<()> {
        let config = self.config();

        domain::provision(
            repos.settings.as_ref(),
            repos.search_engines.as_ref(),
            config.seed_search_engines,
        )
        .await?;

        let services = Arc::new(Services::new(repos, &config));
        *self.services.write() = Some(services);

        tracing::info!("Nav panel initialized");
        Ok(())
    }

    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    pub fn services(&self) -> Result<Arc<Services>> {
        self.services
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Nav panel module not initialized"))
    }

    /// In-process client over the initialized services
    pub fn client(&self) -> Result<Arc<dyn NavPanelApi>> {
        let services = self.services()?;
        Ok(Arc::new(crate::api::native::NativeClient::new(services)))
    }

    /// Mount the REST routes under `/api`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let services = self.services()?;
        tracing::info!("Registering nav panel REST routes");
        crate::api::rest::routes::register_routes(router, services, self.config())
    }
}
