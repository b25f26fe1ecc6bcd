//! Content-editing models exchanged between the binder and its callers.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// One posted `(id, value)` pair. Values stay string-encoded at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ContentPropertyEdit {
    pub(crate) id: i32,
    #[serde(default, deserialize_with = "opaque_value")]
    pub(crate) value: Option<String>,
}

/// Accepts any JSON value. Strings pass through, `null` clears the property,
/// and numbers, booleans, arrays or objects keep their compact JSON text.
fn opaque_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

/// A file part already written to the temp upload directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ContentItemFile {
    pub(crate) file_path: PathBuf,
    pub(crate) property_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct PersistedProperty {
    pub(crate) id: i32,
    pub(crate) alias: String,
    pub(crate) value: Option<String>,
}

/// Read-only snapshot of a stored content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct PersistedContent {
    pub(crate) id: i32,
    pub(crate) name: String,
    pub(crate) content_type_alias: String,
    pub(crate) properties: Vec<PersistedProperty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ContentPropertyDto {
    pub(crate) id: i32,
    pub(crate) alias: String,
    pub(crate) value: Option<String>,
}

/// Editable, request-scoped representation of a persisted content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ContentItemDto {
    pub(crate) id: i32,
    pub(crate) name: String,
    pub(crate) content_type_alias: String,
    pub(crate) properties: Vec<ContentPropertyDto>,
}

/// The save model assembled from a multipart `contentItem` post.
///
/// `Id` and `Properties` come from the posted JSON. Everything else is filled
/// in by the binder and never read from the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ContentItemSave {
    pub(crate) id: i32,
    #[serde(default)]
    pub(crate) properties: Vec<ContentPropertyEdit>,
    #[serde(skip_deserializing, default)]
    pub(crate) uploaded_files: Vec<ContentItemFile>,
    #[serde(skip)]
    pub(crate) persisted_content: Option<PersistedContent>,
    #[serde(skip_deserializing, default)]
    pub(crate) content_dto: Option<ContentItemDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct PropertyChange {
    pub(crate) id: i32,
    pub(crate) alias: String,
    pub(crate) previous: Option<String>,
    pub(crate) current: Option<String>,
}

impl ContentItemSave {
    /// Properties whose merged value differs from the persisted one.
    ///
    /// Empty until the merge stage has attached both the persisted content and
    /// the DTO.
    pub(crate) fn changed_properties(&self) -> Vec<PropertyChange> {
        let (Some(persisted), Some(dto)) = (&self.persisted_content, &self.content_dto) else {
            return Vec::new();
        };

        dto.properties
            .iter()
            .filter_map(|property| {
                let previous = persisted
                    .properties
                    .iter()
                    .find(|candidate| candidate.id == property.id)
                    .and_then(|candidate| candidate.value.clone());

                (previous != property.value).then(|| PropertyChange {
                    id: property.id,
                    alias: property.alias.clone(),
                    previous,
                    current: property.value.clone(),
                })
            })
            .collect()
    }
}
