use crate::binder::file_name::parse_property_id;
use crate::binder::multipart::DecodedMultipart;
use crate::model::{ContentItemFile, ContentItemSave};
use crate::service::error::ServiceError;

pub(crate) const CONTENT_ITEM_FIELD: &str = "contentItem";
pub(crate) const MISSING_CONTENT_ITEM: &str =
    "The request was not formatted correctly and is missing the 'contentItem' parameter";

/// Builds the save model from the decoded form.
///
/// A single badly named file part rejects the whole model.
pub(crate) fn assemble_save_model(
    decoded: DecodedMultipart,
) -> Result<ContentItemSave, ServiceError> {
    let Some(content_item) = decoded.form_data.get(CONTENT_ITEM_FIELD) else {
        return Err(ServiceError::bad_request(MISSING_CONTENT_ITEM));
    };

    let mut model: ContentItemSave = serde_json::from_str(content_item).map_err(|error| {
        ServiceError::deserialization(format!(
            "failed to deserialize '{CONTENT_ITEM_FIELD}': {error}"
        ))
    })?;

    for file in decoded.file_data {
        let property_id = parse_property_id(&file.disposition_name)?;
        model.uploaded_files.push(ContentItemFile {
            file_path: file.local_path,
            property_id,
        });
    }

    Ok(model)
}
