//! Shared test utilities: in-memory repositories, SQLite setup and output helpers
#![allow(dead_code)]

use nav_panel::contract::*;
use nav_panel::domain::{
    GroupRepository, ReplaceFailure, Repositories, SearchEngineRepository, SettingsRecordPatch,
    SettingsRepository, WebsiteRepository,
};
use nav_panel::NavPanelModule;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

pub fn print_json(label: &str, value: &serde_json::Value) {
    println!("   {}: {}", label, serde_json::to_string_pretty(value).unwrap());
}

/// Fresh in-memory SQLite database with migrations applied
///
/// A single connection that never expires: every new SQLite memory
/// connection would otherwise see an empty database.
pub async fn sqlite_db() -> Arc<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(std::time::Duration::from_secs(3600))
        .max_lifetime(std::time::Duration::from_secs(3600))
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory SQLite");
    NavPanelModule::migrate(&db)
        .await
        .expect("Failed to run migrations");
    Arc::new(db)
}

pub fn website(id: &str, name: &str, sort_order: i32) -> Website {
    let now = chrono::Utc::now();
    Website {
        id: id.to_string(),
        name: name.to_string(),
        url: format!("https://{id}.example.com"),
        icon: None,
        description: None,
        category: None,
        sort_order,
        group_id: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn engine(id: &str, name: &str, is_default: bool) -> SearchEngine {
    SearchEngine {
        id: id.to_string(),
        name: name.to_string(),
        url: format!("https://{id}.example.com/?q={{}}"),
        icon: None,
        placeholder: Some(format!("Search with {name}...")),
        is_default,
    }
}

pub fn new_engine(id: &str, name: &str, is_default: bool) -> NewSearchEngine {
    NewSearchEngine {
        id: id.to_string(),
        name: name.to_string(),
        url: format!("https://{id}.example.com/?q={{}}"),
        icon: None,
        placeholder: None,
        is_default,
    }
}

// Mock repository implementations for testing
pub mod mocks {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::RwLock;

    fn injected(message: &str) -> anyhow::Error {
        anyhow::anyhow!("injected failure: {message}")
    }

    // ===== Websites =====

    #[derive(Default)]
    pub struct MockWebsiteRepo {
        data: RwLock<Vec<Website>>,
        /// Fail the insert at this document index during `replace_all`
        pub fail_insert_at: RwLock<Option<usize>>,
    }

    impl MockWebsiteRepo {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn seed(&self, websites: Vec<Website>) {
            *self.data.write() = websites;
        }

        pub fn snapshot(&self) -> Vec<Website> {
            self.data.read().clone()
        }

        pub fn count(&self) -> usize {
            self.data.read().len()
        }
    }

    #[async_trait]
    impl WebsiteRepository for MockWebsiteRepo {
        async fn list_all(&self) -> anyhow::Result<Vec<Website>> {
            let mut websites = self.data.read().clone();
            websites.sort_by(|a, b| {
                a.sort_order
                    .cmp(&b.sort_order)
                    .then(a.created_at.cmp(&b.created_at))
            });
            Ok(websites)
        }

        async fn list_by_group(&self, group_id: &str) -> anyhow::Result<Vec<Website>> {
            let mut websites: Vec<_> = self
                .data
                .read()
                .iter()
                .filter(|w| w.group_id.as_deref() == Some(group_id))
                .cloned()
                .collect();
            websites.sort_by_key(|w| w.sort_order);
            Ok(websites)
        }

        async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Website>> {
            Ok(self.data.read().iter().find(|w| w.id == id).cloned())
        }

        async fn next_sort_order(&self, group_id: Option<&str>) -> anyhow::Result<i32> {
            Ok(self
                .data
                .read()
                .iter()
                .filter(|w| w.group_id.as_deref() == group_id)
                .map(|w| w.sort_order)
                .max()
                .map_or(0, |max| max + 1))
        }

        async fn create(&self, website: &Website) -> anyhow::Result<Website> {
            self.data.write().push(website.clone());
            Ok(website.clone())
        }

        async fn update(&self, id: &str, patch: &WebsitePatch) -> anyhow::Result<Option<Website>> {
            let mut data = self.data.write();
            let Some(website) = data.iter_mut().find(|w| w.id == id) else {
                return Ok(None);
            };
            if let Some(name) = &patch.name {
                website.name = name.clone();
            }
            if let Some(url) = &patch.url {
                website.url = url.clone();
            }
            if let Some(icon) = &patch.icon {
                website.icon = Some(icon.clone()).filter(|i| !i.is_empty());
            }
            if let Some(description) = &patch.description {
                website.description = Some(description.clone()).filter(|d| !d.is_empty());
            }
            if let Some(category) = &patch.category {
                website.category = Some(category.clone()).filter(|c| !c.is_empty());
            }
            website.updated_at = chrono::Utc::now();
            Ok(Some(website.clone()))
        }

        async fn delete(&self, id: &str) -> anyhow::Result<bool> {
            let mut data = self.data.write();
            let before = data.len();
            data.retain(|w| w.id != id);
            Ok(data.len() < before)
        }

        async fn reorder(&self, ids: &[String]) -> anyhow::Result<()> {
            let mut data = self.data.write();
            for (index, id) in ids.iter().enumerate() {
                if let Some(website) = data.iter_mut().find(|w| &w.id == id) {
                    website.sort_order = index as i32;
                }
            }
            Ok(())
        }

        async fn replace_all(&self, websites: &[Website]) -> Result<(), ReplaceFailure> {
            let fail_at = *self.fail_insert_at.read();
            let mut data = self.data.write();
            let mut staged = Vec::new();
            for (index, website) in websites.iter().enumerate() {
                if fail_at == Some(index) {
                    // Nothing was applied: same outcome as a rolled back transaction
                    return Err(ReplaceFailure::new(
                        ReplaceStage::Insert,
                        index,
                        injected("website insert"),
                    ));
                }
                staged.push(website.clone());
            }
            *data = staged;
            Ok(())
        }
    }

    // ===== Search engines =====

    #[derive(Default)]
    pub struct MockSearchEngineRepo {
        data: RwLock<Vec<SearchEngine>>,
        pub fail_list: RwLock<bool>,
        pub fail_insert_at: RwLock<Option<usize>>,
    }

    impl MockSearchEngineRepo {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn seed(&self, engines: Vec<SearchEngine>) {
            *self.data.write() = engines;
        }

        pub fn snapshot(&self) -> Vec<SearchEngine> {
            self.data.read().clone()
        }

        pub fn default_ids(&self) -> Vec<String> {
            self.data
                .read()
                .iter()
                .filter(|e| e.is_default)
                .map(|e| e.id.clone())
                .collect()
        }

        fn insert(data: &mut Vec<SearchEngine>, engine: &SearchEngine) {
            if engine.is_default {
                data.iter_mut().for_each(|e| e.is_default = false);
            }
            data.push(engine.clone());
        }
    }

    #[async_trait]
    impl SearchEngineRepository for MockSearchEngineRepo {
        async fn list_all(&self) -> anyhow::Result<Vec<SearchEngine>> {
            if *self.fail_list.read() {
                return Err(injected("search engine list"));
            }
            let mut engines = self.data.read().clone();
            engines.sort_by(|a, b| b.is_default.cmp(&a.is_default).then(a.name.cmp(&b.name)));
            Ok(engines)
        }

        async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<SearchEngine>> {
            Ok(self.data.read().iter().find(|e| e.id == id).cloned())
        }

        async fn create(&self, engine: &SearchEngine) -> anyhow::Result<SearchEngine> {
            Self::insert(&mut self.data.write(), engine);
            Ok(engine.clone())
        }

        async fn update(
            &self,
            id: &str,
            patch: &SearchEnginePatch,
        ) -> anyhow::Result<Option<SearchEngine>> {
            let mut data = self.data.write();
            if !data.iter().any(|e| e.id == id) {
                return Ok(None);
            }
            if patch.is_default == Some(true) {
                data.iter_mut().for_each(|e| e.is_default = false);
            }
            let Some(engine) = data.iter_mut().find(|e| e.id == id) else {
                return Ok(None);
            };
            if let Some(name) = &patch.name {
                engine.name = name.clone();
            }
            if let Some(url) = &patch.url {
                engine.url = url.clone();
            }
            if let Some(icon) = &patch.icon {
                engine.icon = Some(icon.clone()).filter(|i| !i.is_empty());
            }
            if let Some(placeholder) = &patch.placeholder {
                engine.placeholder = Some(placeholder.clone()).filter(|p| !p.is_empty());
            }
            if let Some(is_default) = patch.is_default {
                engine.is_default = is_default;
            }
            Ok(Some(engine.clone()))
        }

        async fn delete(&self, id: &str) -> anyhow::Result<bool> {
            let mut data = self.data.write();
            let Some(position) = data.iter().position(|e| e.id == id) else {
                return Ok(false);
            };
            let removed = data.remove(position);
            if removed.is_default {
                if let Some(successor) = data.iter_mut().min_by(|a, b| a.name.cmp(&b.name)) {
                    successor.is_default = true;
                }
            }
            Ok(true)
        }

        async fn replace_all(&self, engines: &[SearchEngine]) -> Result<(), ReplaceFailure> {
            let fail_at = *self.fail_insert_at.read();
            let mut data = self.data.write();
            let mut staged = Vec::new();
            for (index, engine) in engines.iter().enumerate() {
                if fail_at == Some(index) {
                    return Err(ReplaceFailure::new(
                        ReplaceStage::Insert,
                        index,
                        injected("search engine insert"),
                    ));
                }
                Self::insert(&mut staged, engine);
            }
            *data = staged;
            Ok(())
        }
    }

    // ===== Groups =====

    #[derive(Default)]
    pub struct MockGroupRepo {
        data: RwLock<Vec<Group>>,
    }

    impl MockGroupRepo {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl GroupRepository for MockGroupRepo {
        async fn list_all(&self) -> anyhow::Result<Vec<Group>> {
            let mut groups = self.data.read().clone();
            groups.sort_by_key(|g| g.sort_order);
            Ok(groups)
        }

        async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Group>> {
            Ok(self.data.read().iter().find(|g| g.id == id).cloned())
        }

        async fn next_sort_order(&self) -> anyhow::Result<i32> {
            Ok(self
                .data
                .read()
                .iter()
                .map(|g| g.sort_order)
                .max()
                .map_or(0, |max| max + 1))
        }

        async fn create(&self, group: &Group) -> anyhow::Result<Group> {
            self.data.write().push(group.clone());
            Ok(group.clone())
        }

        async fn update(&self, id: &str, patch: &GroupPatch) -> anyhow::Result<Option<Group>> {
            let mut data = self.data.write();
            let Some(group) = data.iter_mut().find(|g| g.id == id) else {
                return Ok(None);
            };
            if let Some(name) = &patch.name {
                group.name = name.clone();
            }
            if let Some(color) = &patch.color {
                group.color = Some(color.clone()).filter(|c| !c.is_empty());
            }
            if let Some(icon) = &patch.icon {
                group.icon = Some(icon.clone()).filter(|i| !i.is_empty());
            }
            if let Some(is_collapsed) = patch.is_collapsed {
                group.is_collapsed = is_collapsed;
            }
            Ok(Some(group.clone()))
        }

        async fn delete(&self, id: &str) -> anyhow::Result<bool> {
            let mut data = self.data.write();
            let before = data.len();
            data.retain(|g| g.id != id);
            Ok(data.len() < before)
        }

        async fn reorder(&self, ids: &[String]) -> anyhow::Result<()> {
            let mut data = self.data.write();
            for (index, id) in ids.iter().enumerate() {
                if let Some(group) = data.iter_mut().find(|g| &g.id == id) {
                    group.sort_order = index as i32;
                }
            }
            Ok(())
        }

        async fn move_website(&self, _placement: &WebsitePlacement) -> anyhow::Result<()> {
            Ok(())
        }
    }

    // ===== Settings =====

    #[derive(Default)]
    pub struct MockSettingsRepo {
        data: RwLock<Option<AppSettings>>,
        pub fail_replace: RwLock<bool>,
        writes: RwLock<usize>,
    }

    impl MockSettingsRepo {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn seed(&self, settings: AppSettings) {
            *self.data.write() = Some(settings);
        }

        pub fn snapshot(&self) -> Option<AppSettings> {
            self.data.read().clone()
        }

        /// Number of row writes performed so far
        pub fn writes(&self) -> usize {
            *self.writes.read()
        }

        /// Overwrite one column with an arbitrary blob, bypassing the codec
        pub fn corrupt_layout(&self, blob: &str) {
            if let Some(settings) = self.data.write().as_mut() {
                settings.layout_config = Some(blob.to_string());
            }
        }
    }

    #[async_trait]
    impl SettingsRepository for MockSettingsRepo {
        async fn get(&self) -> anyhow::Result<Option<AppSettings>> {
            Ok(self.data.read().clone())
        }

        async fn update(&self, patch: &SettingsRecordPatch) -> anyhow::Result<bool> {
            let mut data = self.data.write();
            let Some(settings) = data.as_mut() else {
                return Ok(false);
            };
            if let Some(theme) = patch.theme {
                settings.theme = theme;
            }
            if let Some(blob) = &patch.layout_config {
                settings.layout_config = Some(blob.clone());
            }
            if let Some(blob) = &patch.background_config {
                settings.background_config = Some(blob.clone());
            }
            if let Some(blob) = &patch.card_style_config {
                settings.card_style_config = Some(blob.clone());
            }
            if let Some(blob) = &patch.search_config {
                settings.search_config = Some(blob.clone());
            }
            settings.updated_at = chrono::Utc::now();
            *self.writes.write() += 1;
            Ok(true)
        }

        async fn replace(&self, settings: &AppSettings) -> anyhow::Result<()> {
            if *self.fail_replace.read() {
                return Err(injected("settings overwrite"));
            }
            *self.data.write() = Some(settings.clone());
            *self.writes.write() += 1;
            Ok(())
        }

        async fn insert_if_absent(&self, settings: &AppSettings) -> anyhow::Result<bool> {
            let mut data = self.data.write();
            if data.is_some() {
                return Ok(false);
            }
            *data = Some(settings.clone());
            Ok(true)
        }
    }
}

/// Mock repositories plus typed handles for inspection
pub struct MockStore {
    pub websites: Arc<mocks::MockWebsiteRepo>,
    pub search_engines: Arc<mocks::MockSearchEngineRepo>,
    pub groups: Arc<mocks::MockGroupRepo>,
    pub settings: Arc<mocks::MockSettingsRepo>,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            websites: Arc::new(mocks::MockWebsiteRepo::new()),
            search_engines: Arc::new(mocks::MockSearchEngineRepo::new()),
            groups: Arc::new(mocks::MockGroupRepo::new()),
            settings: Arc::new(mocks::MockSettingsRepo::new()),
        }
    }

    pub fn repositories(&self) -> Repositories {
        Repositories {
            websites: self.websites.clone(),
            search_engines: self.search_engines.clone(),
            groups: self.groups.clone(),
            settings: self.settings.clone(),
        }
    }
}

/// Mock store provisioned the way a first start provisions a real database
pub async fn provisioned_store() -> MockStore {
    let store = MockStore::new();
    nav_panel::domain::provision(store.settings.as_ref(), store.search_engines.as_ref(), true)
        .await
        .expect("Failed to provision");
    store
}
