use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Contents table
        manager
            .create_table(
                Table::create()
                    .table(Content::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Content::Id)
                            .integer()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Content::Name).string().not_null())
                    .col(ColumnDef::new(Content::ContentTypeAlias).string().not_null())
                    .col(
                        ColumnDef::new(Content::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Content::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Content properties table
        manager
            .create_table(
                Table::create()
                    .table(ContentProperty::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContentProperty::Id)
                            .integer()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ContentProperty::ContentId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ContentProperty::Alias).string().not_null())
                    .col(ColumnDef::new(ContentProperty::Value).text())
                    .col(
                        ColumnDef::new(ContentProperty::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .index(
                        Index::create()
                            .name("idx_content_property_content_alias")
                            .col(ContentProperty::ContentId)
                            .col(ContentProperty::Alias)
                            .unique(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_content_property_content_id")
                            .from(ContentProperty::Table, ContentProperty::ContentId)
                            .to(Content::Table, Content::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContentProperty::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Content::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Content {
    #[sea_orm(iden = "contents")]
    Table,
    Id,
    Name,
    ContentTypeAlias,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ContentProperty {
    #[sea_orm(iden = "content_properties")]
    Table,
    Id,
    ContentId,
    Alias,
    Value,
    SortOrder,
}
