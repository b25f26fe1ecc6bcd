use crate::persistence::{
    ContentEntity, ContentModel, ContentPropertyColumn, ContentPropertyEntity,
    ContentPropertyModel,
};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub(crate) struct ContentRepository;

impl ContentRepository {
    pub(crate) async fn find_model_by_id<C>(db: &C, id: i32) -> Result<Option<ContentModel>, DbErr>
    where
        C: ConnectionTrait,
    {
        ContentEntity::find_by_id(id).one(db).await
    }

    pub(crate) async fn list_properties<C>(
        db: &C,
        content_id: i32,
    ) -> Result<Vec<ContentPropertyModel>, DbErr>
    where
        C: ConnectionTrait,
    {
        ContentPropertyEntity::find()
            .filter(ContentPropertyColumn::ContentId.eq(content_id))
            .order_by_asc(ContentPropertyColumn::SortOrder)
            .order_by_asc(ContentPropertyColumn::Id)
            .all(db)
            .await
    }
}
