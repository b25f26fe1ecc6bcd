use crate::model::{ContentItemDto, ContentPropertyDto, PersistedContent};

/// Maps persisted content onto its editable representation.
pub(crate) trait ContentMapper: Send + Sync {
    fn to_content_item_dto(&self, content: &PersistedContent) -> ContentItemDto;
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DefaultContentMapper;

impl ContentMapper for DefaultContentMapper {
    fn to_content_item_dto(&self, content: &PersistedContent) -> ContentItemDto {
        ContentItemDto {
            id: content.id,
            name: content.name.clone(),
            content_type_alias: content.content_type_alias.clone(),
            properties: content
                .properties
                .iter()
                .map(|property| ContentPropertyDto {
                    id: property.id,
                    alias: property.alias.clone(),
                    value: property.value.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::content_store::test_support::sample_content;

    #[test]
    fn copies_every_property_in_order() {
        let content = sample_content(5);

        let dto = DefaultContentMapper.to_content_item_dto(&content);

        assert_eq!(dto.id, 5);
        assert_eq!(dto.content_type_alias, "homePage");
        let ids: Vec<_> = dto.properties.iter().map(|property| property.id).collect();
        assert_eq!(ids, [1, 2]);
        assert_eq!(dto.properties[0].value.as_deref(), Some("Welcome"));
    }
}
