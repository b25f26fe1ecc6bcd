use crate::model::{PersistedContent, PersistedProperty};
use crate::repository::content_repository::ContentRepository;
use crate::service::error::{ServiceError, map_db_error};
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Lookup of persisted content items by identifier.
#[async_trait]
pub(crate) trait ContentStore: Send + Sync {
    async fn get_by_id(&self, id: i32) -> Result<PersistedContent, ServiceError>;
}

pub(crate) fn content_not_found(id: i32) -> ServiceError {
    ServiceError::not_found(format!("content with id={id} was not found"))
}

#[derive(Clone)]
pub(crate) struct DbContentStore {
    db: Arc<DatabaseConnection>,
}

impl DbContentStore {
    pub(crate) fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentStore for DbContentStore {
    async fn get_by_id(&self, id: i32) -> Result<PersistedContent, ServiceError> {
        let content = ContentRepository::find_model_by_id(self.db.as_ref(), id)
            .await
            .map_err(map_db_error)?;

        let Some(content) = content else {
            return Err(content_not_found(id));
        };

        let properties = ContentRepository::list_properties(self.db.as_ref(), content.id)
            .await
            .map_err(map_db_error)?
            .into_iter()
            .map(|property| PersistedProperty {
                id: property.id,
                alias: property.alias,
                value: property.value,
            })
            .collect();

        Ok(PersistedContent {
            id: content.id,
            name: content.name,
            content_type_alias: content.content_type_alias,
            properties,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::collections::HashMap;

    /// Content store backed by a map, for tests that don't need sqlite.
    #[derive(Default)]
    pub(crate) struct InMemoryContentStore {
        contents: HashMap<i32, PersistedContent>,
    }

    impl InMemoryContentStore {
        pub(crate) fn with(mut self, content: PersistedContent) -> Self {
            self.contents.insert(content.id, content);
            self
        }
    }

    #[async_trait]
    impl ContentStore for InMemoryContentStore {
        async fn get_by_id(&self, id: i32) -> Result<PersistedContent, ServiceError> {
            self.contents
                .get(&id)
                .cloned()
                .ok_or_else(|| content_not_found(id))
        }
    }

    pub(crate) fn sample_content(id: i32) -> PersistedContent {
        PersistedContent {
            id,
            name: "Home".to_string(),
            content_type_alias: "homePage".to_string(),
            properties: vec![
                PersistedProperty {
                    id: 1,
                    alias: "title".to_string(),
                    value: Some("Welcome".to_string()),
                },
                PersistedProperty {
                    id: 2,
                    alias: "heroImage".to_string(),
                    value: None,
                },
            ],
        }
    }
}
