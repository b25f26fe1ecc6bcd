use crate::model::{
    ContentItemDto, ContentItemFile, ContentItemSave, ContentPropertyDto, ContentPropertyEdit,
};
use crate::service::content_mapper::ContentMapper;
use crate::service::content_store::ContentStore;
use crate::service::error::ServiceError;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

/// What to do with an edit or upload whose property id is not on the DTO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum UnmatchedPropertyPolicy {
    #[default]
    Fail,
    Skip,
}

impl FromStr for UnmatchedPropertyPolicy {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "skip" => Ok(Self::Skip),
            other => Err(format!(
                "unknown unmatched property policy `{other}`, expected `fail` or `skip`"
            )),
        }
    }
}

fn unmatched_property(content_id: i32, property_id: i32) -> ServiceError {
    ServiceError::unmatched_property(format!(
        "property with id={property_id} does not exist on content {content_id}"
    ))
}

fn find_property_mut(
    dto: &mut ContentItemDto,
    property_id: i32,
) -> Result<Option<&mut ContentPropertyDto>, ServiceError> {
    let content_id = dto.id;
    let mut matches = dto
        .properties
        .iter_mut()
        .filter(|property| property.id == property_id);

    let first = matches.next();
    if matches.next().is_some() {
        return Err(ServiceError::internal(format!(
            "content {content_id} has more than one property with id={property_id}"
        )));
    }

    Ok(first)
}

/// Overwrites DTO property values with the posted edits, in order.
pub(crate) fn apply_property_edits(
    dto: &mut ContentItemDto,
    edits: &[ContentPropertyEdit],
    policy: UnmatchedPropertyPolicy,
) -> Result<(), ServiceError> {
    let content_id = dto.id;

    for edit in edits {
        match find_property_mut(dto, edit.id)? {
            Some(property) => {
                debug!(
                    content_id,
                    property_id = edit.id,
                    alias = %property.alias,
                    "applying property edit"
                );
                property.value = edit.value.clone();
            }
            None if policy == UnmatchedPropertyPolicy::Skip => {
                warn!(
                    content_id,
                    property_id = edit.id,
                    "skipping edit for unknown property"
                );
            }
            None => return Err(unmatched_property(content_id, edit.id)),
        }
    }

    Ok(())
}

/// Checks that every upload targets a DTO property.
pub(crate) fn retain_known_uploads(
    uploads: &mut Vec<ContentItemFile>,
    dto: &ContentItemDto,
    policy: UnmatchedPropertyPolicy,
) -> Result<(), ServiceError> {
    let is_known = |upload: &ContentItemFile| {
        dto.properties
            .iter()
            .any(|property| property.id == upload.property_id)
    };

    match policy {
        UnmatchedPropertyPolicy::Fail => {
            if let Some(upload) = uploads.iter().find(|upload| !is_known(upload)) {
                return Err(unmatched_property(dto.id, upload.property_id));
            }
        }
        UnmatchedPropertyPolicy::Skip => uploads.retain(|upload| {
            let known = is_known(upload);
            if !known {
                warn!(
                    content_id = dto.id,
                    property_id = upload.property_id,
                    path = %upload.file_path.display(),
                    "dropping upload for unknown property"
                );
            }
            known
        }),
    }

    Ok(())
}

/// Loads the persisted content for a save model and overlays the posted values.
#[derive(Clone)]
pub(crate) struct ContentMerger {
    store: Arc<dyn ContentStore>,
    mapper: Arc<dyn ContentMapper>,
    policy: UnmatchedPropertyPolicy,
}

impl ContentMerger {
    pub(crate) fn new(
        store: Arc<dyn ContentStore>,
        mapper: Arc<dyn ContentMapper>,
        policy: UnmatchedPropertyPolicy,
    ) -> Self {
        Self {
            store,
            mapper,
            policy,
        }
    }

    /// The editable representation of a stored content item, without any overlay.
    pub(crate) async fn editable_content(&self, id: i32) -> Result<ContentItemDto, ServiceError> {
        let persisted = self.store.get_by_id(id).await?;
        Ok(self.mapper.to_content_item_dto(&persisted))
    }

    pub(crate) async fn merge(
        &self,
        mut model: ContentItemSave,
    ) -> Result<ContentItemSave, ServiceError> {
        let persisted = self.store.get_by_id(model.id).await?;
        let mut dto = self.mapper.to_content_item_dto(&persisted);

        apply_property_edits(&mut dto, &model.properties, self.policy)?;
        retain_known_uploads(&mut model.uploaded_files, &dto, self.policy)?;

        model.persisted_content = Some(persisted);
        model.content_dto = Some(dto);
        Ok(model)
    }
}
