//! Database migrations for the nav panel

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_groups::Migration),
            Box::new(m20250301_000002_create_websites::Migration),
            Box::new(m20250301_000003_create_search_engines::Migration),
            Box::new(m20250301_000004_create_app_settings::Migration),
        ]
    }
}

mod m20250301_000001_create_groups {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000001_create_groups"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Groups::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Groups::Id).string().not_null().primary_key())
                        .col(ColumnDef::new(Groups::Name).string().not_null())
                        .col(ColumnDef::new(Groups::Color).string())
                        .col(ColumnDef::new(Groups::Icon).string())
                        .col(
                            ColumnDef::new(Groups::SortOrder)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Groups::IsCollapsed)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Groups::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Groups::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_groups_sort_order")
                        .table(Groups::Table)
                        .col(Groups::SortOrder)
                        .if_not_exists()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Groups::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Groups {
        Table,
        Id,
        Name,
        Color,
        Icon,
        SortOrder,
        IsCollapsed,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250301_000002_create_websites {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000002_create_websites"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Websites::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Websites::Id).string().not_null().primary_key())
                        .col(ColumnDef::new(Websites::Name).string().not_null())
                        .col(ColumnDef::new(Websites::Url).string().not_null())
                        .col(ColumnDef::new(Websites::Icon).text())
                        .col(ColumnDef::new(Websites::Description).string())
                        .col(ColumnDef::new(Websites::Category).string())
                        .col(
                            ColumnDef::new(Websites::SortOrder)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Websites::GroupId).string())
                        .col(
                            ColumnDef::new(Websites::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Websites::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_websites_sort_order")
                        .table(Websites::Table)
                        .col(Websites::SortOrder)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_websites_group_id")
                        .table(Websites::Table)
                        .col(Websites::GroupId)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Websites::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Websites {
        Table,
        Id,
        Name,
        Url,
        Icon,
        Description,
        Category,
        SortOrder,
        GroupId,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250301_000003_create_search_engines {
    use super::*;
    use sea_orm_migration::sea_orm::ConnectionTrait;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000003_create_search_engines"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(SearchEngines::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(SearchEngines::Id)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(SearchEngines::Name).string().not_null())
                        .col(ColumnDef::new(SearchEngines::Url).string().not_null())
                        .col(ColumnDef::new(SearchEngines::Icon).text())
                        // Legacy icon storage, kept readable for old databases
                        .col(ColumnDef::new(SearchEngines::IconData).blob())
                        .col(ColumnDef::new(SearchEngines::IconType).string())
                        .col(ColumnDef::new(SearchEngines::Placeholder).string())
                        .col(
                            ColumnDef::new(SearchEngines::IsDefault)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .to_owned(),
                )
                .await?;

            // At most one default engine. The query builder has no partial
            // index support, so this one is raw SQL (valid on SQLite and Postgres).
            manager
                .get_connection()
                .execute_unprepared(
                    "CREATE UNIQUE INDEX IF NOT EXISTS ux_search_engines_single_default \
                     ON search_engines (is_default) WHERE is_default",
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(SearchEngines::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum SearchEngines {
        Table,
        Id,
        Name,
        Url,
        Icon,
        IconData,
        IconType,
        Placeholder,
        IsDefault,
    }
}

mod m20250301_000004_create_app_settings {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250301_000004_create_app_settings"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(AppSettings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(AppSettings::Id)
                                .integer()
                                .not_null()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(AppSettings::Theme)
                                .string()
                                .not_null()
                                .default("light"),
                        )
                        .col(ColumnDef::new(AppSettings::LayoutConfig).text())
                        .col(ColumnDef::new(AppSettings::BackgroundConfig).text())
                        .col(ColumnDef::new(AppSettings::CardStyleConfig).text())
                        .col(ColumnDef::new(AppSettings::SearchConfig).text())
                        .col(
                            ColumnDef::new(AppSettings::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(AppSettings::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum AppSettings {
        Table,
        Id,
        Theme,
        LayoutConfig,
        BackgroundConfig,
        CardStyleConfig,
        SearchConfig,
        UpdatedAt,
    }
}
