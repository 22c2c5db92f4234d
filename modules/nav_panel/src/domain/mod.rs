//! Domain layer - business logic and services

pub mod codec;
pub mod defaults;
pub mod groups;
pub mod icon;
pub mod provision;
pub mod repository;
pub mod search_engines;
pub mod settings;
pub mod transfer;
pub mod validation;
pub mod websites;

pub use groups::GroupService;
pub use provision::{provision, Provisioned};
pub use repository::{
    GroupRepository, ReplaceFailure, SearchEngineRepository, SettingsRecordPatch,
    SettingsRepository, WebsiteRepository,
};
pub use search_engines::SearchEngineService;
pub use settings::SettingsService;
pub use transfer::TransferService;
pub use websites::WebsiteService;

use crate::config::Config;
use std::sync::Arc;

/// Repositories backing the services
#[derive(Clone)]
pub struct Repositories {
    pub websites: Arc<dyn WebsiteRepository>,
    pub search_engines: Arc<dyn SearchEngineRepository>,
    pub groups: Arc<dyn GroupRepository>,
    pub settings: Arc<dyn SettingsRepository>,
}

/// Every domain service, shared by the REST handlers and the native client
pub struct Services {
    pub settings: SettingsService,
    pub transfer: TransferService,
    pub websites: WebsiteService,
    pub search_engines: SearchEngineService,
    pub groups: GroupService,
}

impl Services {
    pub fn new(repos: Repositories, config: &Config) -> Self {
        Self {
            settings: SettingsService::new(repos.settings.clone(), repos.search_engines.clone()),
            transfer: TransferService::new(
                repos.websites.clone(),
                repos.search_engines.clone(),
                repos.settings.clone(),
            ),
            websites: WebsiteService::new(repos.websites.clone(), repos.groups.clone()),
            search_engines: SearchEngineService::new(
                repos.search_engines.clone(),
                config.max_icon_bytes,
            ),
            groups: GroupService::new(repos.groups, repos.websites),
        }
    }
}
