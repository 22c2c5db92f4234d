//! SeaORM repository implementations
//!
//! Multi-statement writes (default flag changes, reorders, group deletes,
//! bulk replaces) run inside one transaction. Queries issued while a
//! transaction is open go through the transaction, never through `self.db`.

use crate::contract::{
    AppSettings, Group, GroupPatch, ReplaceStage, SearchEngine, SearchEnginePatch, Website,
    WebsitePatch, WebsitePlacement,
};
use crate::domain::repository::{
    GroupRepository, ReplaceFailure, SearchEngineRepository, SettingsRecordPatch,
    SettingsRepository, WebsiteRepository,
};
use crate::domain::settings::SETTINGS_ROW_ID;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict, SimpleExpr},
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};
use std::sync::Arc;

use super::entity::{app_settings, group, search_engine, website};

/// Empty strings clear optional text columns
fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// ===== Website Repository =====

pub struct SeaOrmWebsiteRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmWebsiteRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

async fn max_website_sort_order<C: ConnectionTrait>(
    conn: &C,
    filter: Condition,
) -> Result<Option<i32>, DbErr> {
    let max: Option<Option<i32>> = website::Entity::find()
        .select_only()
        .column_as(website::Column::SortOrder.max(), "max_sort_order")
        .filter(filter)
        .into_tuple()
        .one(conn)
        .await?;

    Ok(max.flatten())
}

fn group_filter(group_id: Option<&str>) -> SimpleExpr {
    match group_id {
        Some(group_id) => website::Column::GroupId.eq(group_id),
        None => website::Column::GroupId.is_null(),
    }
}

#[async_trait]
impl WebsiteRepository for SeaOrmWebsiteRepository {
    async fn list_all(&self) -> Result<Vec<Website>> {
        let results = website::Entity::find()
            .order_by_asc(website::Column::SortOrder)
            .order_by_asc(website::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn list_by_group(&self, group_id: &str) -> Result<Vec<Website>> {
        let results = website::Entity::find()
            .filter(website::Column::GroupId.eq(group_id))
            .order_by_asc(website::Column::SortOrder)
            .order_by_asc(website::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Website>> {
        let result = website::Entity::find_by_id(id.to_string())
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn next_sort_order(&self, group_id: Option<&str>) -> Result<i32> {
        let in_group = Condition::all().add(group_filter(group_id));
        let max = max_website_sort_order(&*self.db, in_group).await?;
        Ok(max.map_or(0, |max| max + 1))
    }

    async fn create(&self, new_website: &Website) -> Result<Website> {
        let active = website::ActiveModel::from(new_website);
        let created = active.insert(&*self.db).await?;
        Ok(created.into())
    }

    async fn update(&self, id: &str, patch: &WebsitePatch) -> Result<Option<Website>> {
        let Some(model) = website::Entity::find_by_id(id.to_string())
            .one(&*self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: website::ActiveModel = model.into();
        if let Some(name) = &patch.name {
            active.name = Set(name.clone());
        }
        if let Some(url) = &patch.url {
            active.url = Set(url.clone());
        }
        if let Some(icon) = &patch.icon {
            active.icon = Set(non_empty(icon));
        }
        if let Some(description) = &patch.description {
            active.description = Set(non_empty(description));
        }
        if let Some(category) = &patch.category {
            active.category = Set(non_empty(category));
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(&*self.db).await?;
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let result = website::Entity::delete_by_id(id.to_string())
            .exec(&*self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn reorder(&self, ids: &[String]) -> Result<()> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        for (index, id) in ids.iter().enumerate() {
            website::Entity::update_many()
                .col_expr(website::Column::SortOrder, Expr::value(i32::try_from(index)?))
                .col_expr(website::Column::UpdatedAt, Expr::value(now))
                .filter(website::Column::Id.eq(id.as_str()))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(())
    }

    async fn replace_all(&self, websites: &[Website]) -> Result<(), ReplaceFailure> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ReplaceFailure::new(ReplaceStage::Enumerate, 0, e))?;

        let existing = website::Entity::find()
            .order_by_asc(website::Column::SortOrder)
            .all(&txn)
            .await
            .map_err(|e| ReplaceFailure::new(ReplaceStage::Enumerate, 0, e))?;

        for (index, row) in existing.into_iter().enumerate() {
            website::Entity::delete_by_id(row.id)
                .exec(&txn)
                .await
                .map_err(|e| ReplaceFailure::new(ReplaceStage::Delete, index, e))?;
        }

        for (index, item) in websites.iter().enumerate() {
            website::Entity::insert(website::ActiveModel::from(item))
                .exec_without_returning(&txn)
                .await
                .map_err(|e| ReplaceFailure::new(ReplaceStage::Insert, index, e))?;
        }

        txn.commit()
            .await
            .map_err(|e| ReplaceFailure::new(ReplaceStage::Commit, websites.len(), e))
    }
}

// ===== Search Engine Repository =====

pub struct SeaOrmSearchEngineRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSearchEngineRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Drop the default flag from every engine except `keep`
async fn clear_default<C: ConnectionTrait>(conn: &C, keep: Option<&str>) -> Result<(), DbErr> {
    let mut query = search_engine::Entity::update_many()
        .col_expr(search_engine::Column::IsDefault, Expr::value(false))
        .filter(search_engine::Column::IsDefault.eq(true));

    if let Some(id) = keep {
        query = query.filter(search_engine::Column::Id.ne(id));
    }

    query.exec(conn).await?;
    Ok(())
}

/// Clear-then-insert so the newest default wins
async fn insert_engine<C: ConnectionTrait>(conn: &C, engine: &SearchEngine) -> Result<(), DbErr> {
    if engine.is_default {
        clear_default(conn, None).await?;
    }

    search_engine::Entity::insert(search_engine::ActiveModel::from(engine))
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

#[async_trait]
impl SearchEngineRepository for SeaOrmSearchEngineRepository {
    async fn list_all(&self) -> Result<Vec<SearchEngine>> {
        let results = search_engine::Entity::find()
            .order_by_desc(search_engine::Column::IsDefault)
            .order_by_asc(search_engine::Column::Name)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<SearchEngine>> {
        let result = search_engine::Entity::find_by_id(id.to_string())
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, engine: &SearchEngine) -> Result<SearchEngine> {
        let txn = self.db.begin().await?;
        insert_engine(&txn, engine).await?;
        txn.commit().await?;

        Ok(engine.clone())
    }

    async fn update(&self, id: &str, patch: &SearchEnginePatch) -> Result<Option<SearchEngine>> {
        let txn = self.db.begin().await?;

        let Some(model) = search_engine::Entity::find_by_id(id.to_string())
            .one(&txn)
            .await?
        else {
            return Ok(None);
        };

        if patch.is_default == Some(true) {
            clear_default(&txn, Some(id)).await?;
        }

        let is_default = patch.is_default.unwrap_or(model.is_default);
        let mut active: search_engine::ActiveModel = model.into();
        if let Some(name) = &patch.name {
            active.name = Set(name.clone());
        }
        if let Some(url) = &patch.url {
            active.url = Set(url.clone());
        }
        if let Some(icon) = &patch.icon {
            active.icon = Set(non_empty(icon));
            active.icon_data = Set(None);
            active.icon_type = Set(None);
        }
        if let Some(placeholder) = &patch.placeholder {
            active.placeholder = Set(non_empty(placeholder));
        }
        active.is_default = Set(is_default);

        let updated = active.update(&txn).await?;
        txn.commit().await?;

        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let txn = self.db.begin().await?;

        let Some(model) = search_engine::Entity::find_by_id(id.to_string())
            .one(&txn)
            .await?
        else {
            return Ok(false);
        };

        search_engine::Entity::delete_by_id(model.id.clone())
            .exec(&txn)
            .await?;

        if model.is_default {
            let successor = search_engine::Entity::find()
                .order_by_asc(search_engine::Column::Name)
                .one(&txn)
                .await?;

            if let Some(successor) = successor {
                let successor_id = successor.id.clone();
                let mut active: search_engine::ActiveModel = successor.into();
                active.is_default = Set(true);
                active.update(&txn).await?;
                tracing::info!(removed = %model.id, promoted = %successor_id, "default search engine reassigned");
            }
        }

        txn.commit().await?;
        Ok(true)
    }

    async fn replace_all(&self, engines: &[SearchEngine]) -> Result<(), ReplaceFailure> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ReplaceFailure::new(ReplaceStage::Enumerate, 0, e))?;

        let existing = search_engine::Entity::find()
            .order_by_desc(search_engine::Column::IsDefault)
            .order_by_asc(search_engine::Column::Name)
            .all(&txn)
            .await
            .map_err(|e| ReplaceFailure::new(ReplaceStage::Enumerate, 0, e))?;

        for (index, row) in existing.into_iter().enumerate() {
            search_engine::Entity::delete_by_id(row.id)
                .exec(&txn)
                .await
                .map_err(|e| ReplaceFailure::new(ReplaceStage::Delete, index, e))?;
        }

        for (index, engine) in engines.iter().enumerate() {
            insert_engine(&txn, engine)
                .await
                .map_err(|e| ReplaceFailure::new(ReplaceStage::Insert, index, e))?;
        }

        txn.commit()
            .await
            .map_err(|e| ReplaceFailure::new(ReplaceStage::Commit, engines.len(), e))
    }
}

// ===== Group Repository =====

pub struct SeaOrmGroupRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmGroupRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GroupRepository for SeaOrmGroupRepository {
    async fn list_all(&self) -> Result<Vec<Group>> {
        let results = group::Entity::find()
            .order_by_asc(group::Column::SortOrder)
            .order_by_asc(group::Column::CreatedAt)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Group>> {
        let result = group::Entity::find_by_id(id.to_string())
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn next_sort_order(&self) -> Result<i32> {
        let max: Option<Option<i32>> = group::Entity::find()
            .select_only()
            .column_as(group::Column::SortOrder.max(), "max_sort_order")
            .into_tuple()
            .one(&*self.db)
            .await?;

        Ok(max.flatten().map_or(0, |max| max + 1))
    }

    async fn create(&self, new_group: &Group) -> Result<Group> {
        let created = group::ActiveModel::from(new_group).insert(&*self.db).await?;
        Ok(created.into())
    }

    async fn update(&self, id: &str, patch: &GroupPatch) -> Result<Option<Group>> {
        let Some(model) = group::Entity::find_by_id(id.to_string())
            .one(&*self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: group::ActiveModel = model.into();
        if let Some(name) = &patch.name {
            active.name = Set(name.clone());
        }
        if let Some(color) = &patch.color {
            active.color = Set(non_empty(color));
        }
        if let Some(icon) = &patch.icon {
            active.icon = Set(non_empty(icon));
        }
        if let Some(is_collapsed) = patch.is_collapsed {
            active.is_collapsed = Set(is_collapsed);
        }
        active.updated_at = Set(Utc::now());

        let updated = active.update(&*self.db).await?;
        Ok(Some(updated.into()))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let txn = self.db.begin().await?;

        website::Entity::update_many()
            .col_expr(website::Column::GroupId, Expr::value(Option::<String>::None))
            .col_expr(website::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(website::Column::GroupId.eq(id))
            .exec(&txn)
            .await?;

        let result = group::Entity::delete_by_id(id.to_string())
            .exec(&txn)
            .await?;
        if result.rows_affected == 0 {
            return Ok(false);
        }

        txn.commit().await?;
        Ok(true)
    }

    async fn reorder(&self, ids: &[String]) -> Result<()> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        for (index, id) in ids.iter().enumerate() {
            group::Entity::update_many()
                .col_expr(group::Column::SortOrder, Expr::value(i32::try_from(index)?))
                .col_expr(group::Column::UpdatedAt, Expr::value(now))
                .filter(group::Column::Id.eq(id.as_str()))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(())
    }

    async fn move_website(&self, placement: &WebsitePlacement) -> Result<()> {
        let txn = self.db.begin().await?;

        let others_in_target = Condition::all()
            .add(group_filter(placement.group_id.as_deref()))
            .add(website::Column::Id.ne(placement.website_id.as_str()));

        let sort_order = match placement.position {
            Some(position) => {
                // Open a slot at `position`
                website::Entity::update_many()
                    .col_expr(
                        website::Column::SortOrder,
                        Expr::col(website::Column::SortOrder).add(1),
                    )
                    .filter(others_in_target)
                    .filter(website::Column::SortOrder.gte(position))
                    .exec(&txn)
                    .await?;
                position
            }
            None => max_website_sort_order(&txn, others_in_target)
                .await?
                .map_or(0, |max| max + 1),
        };

        website::Entity::update_many()
            .col_expr(website::Column::GroupId, Expr::value(placement.group_id.clone()))
            .col_expr(website::Column::SortOrder, Expr::value(sort_order))
            .col_expr(website::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(website::Column::Id.eq(placement.website_id.as_str()))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }
}

// ===== Settings Repository =====

pub struct SeaOrmSettingsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSettingsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepository for SeaOrmSettingsRepository {
    async fn get(&self) -> Result<Option<AppSettings>> {
        let result = app_settings::Entity::find_by_id(SETTINGS_ROW_ID)
            .one(&*self.db)
            .await?;

        Ok(result.map(Into::into))
    }

    async fn update(&self, patch: &SettingsRecordPatch) -> Result<bool> {
        let mut query = app_settings::Entity::update_many()
            .col_expr(app_settings::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(app_settings::Column::Id.eq(SETTINGS_ROW_ID));

        if let Some(theme) = patch.theme {
            query = query.col_expr(app_settings::Column::Theme, Expr::value(theme.as_str()));
        }

        let slices = [
            (app_settings::Column::LayoutConfig, &patch.layout_config),
            (app_settings::Column::BackgroundConfig, &patch.background_config),
            (app_settings::Column::CardStyleConfig, &patch.card_style_config),
            (app_settings::Column::SearchConfig, &patch.search_config),
        ];
        for (column, blob) in slices {
            if let Some(blob) = blob {
                query = query.col_expr(column, Expr::value(blob.clone()));
            }
        }

        let result = query.exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }

    async fn replace(&self, settings: &AppSettings) -> Result<()> {
        app_settings::Entity::insert(app_settings::ActiveModel::from(settings))
            .on_conflict(
                OnConflict::column(app_settings::Column::Id)
                    .update_columns([
                        app_settings::Column::Theme,
                        app_settings::Column::LayoutConfig,
                        app_settings::Column::BackgroundConfig,
                        app_settings::Column::CardStyleConfig,
                        app_settings::Column::SearchConfig,
                        app_settings::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await?;

        Ok(())
    }

    async fn insert_if_absent(&self, settings: &AppSettings) -> Result<bool> {
        let inserted = app_settings::Entity::insert(app_settings::ActiveModel::from(settings))
            .on_conflict(
                OnConflict::column(app_settings::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await?;

        Ok(inserted > 0)
    }
}
