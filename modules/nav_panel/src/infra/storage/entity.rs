//! SeaORM entities for database tables

/// Bookmarked websites
pub mod website {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "websites")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub name: String,
        pub url: String,
        #[sea_orm(column_type = "Text", nullable)]
        pub icon: Option<String>,
        pub description: Option<String>,
        pub category: Option<String>,
        pub sort_order: i32,
        /// Owning group; no FK, cleared explicitly when the group goes away
        pub group_id: Option<String>,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Search engines
pub mod search_engine {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "search_engines")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub name: String,
        /// URL template with a `{}` query placeholder
        pub url: String,
        /// Icon as a data-URL
        #[sea_orm(column_type = "Text", nullable)]
        pub icon: Option<String>,
        /// Legacy raw icon bytes, read only
        #[sea_orm(column_type = "Blob", nullable)]
        pub icon_data: Option<Vec<u8>>,
        /// Legacy MIME type of `icon_data`
        pub icon_type: Option<String>,
        pub placeholder: Option<String>,
        /// Unique among rows where true (partial index)
        pub is_default: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Website groups
pub mod group {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "groups")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub name: String,
        pub color: Option<String>,
        pub icon: Option<String>,
        pub sort_order: i32,
        pub is_collapsed: bool,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Singleton settings row; slices are stored as JSON text
pub mod app_settings {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "app_settings")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i32,
        pub theme: String,
        #[sea_orm(column_type = "Text", nullable)]
        pub layout_config: Option<String>,
        #[sea_orm(column_type = "Text", nullable)]
        pub background_config: Option<String>,
        #[sea_orm(column_type = "Text", nullable)]
        pub card_style_config: Option<String>,
        #[sea_orm(column_type = "Text", nullable)]
        pub search_config: Option<String>,
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
