pub(crate) mod content;
pub(crate) mod content_property;

pub(crate) use crate::persistence::content::entity::{
    Entity as ContentEntity, Model as ContentModel,
};
pub(crate) use crate::persistence::content_property::entity::{
    Column as ContentPropertyColumn, Entity as ContentPropertyEntity,
    Model as ContentPropertyModel,
};

#[cfg(test)]
pub(crate) use crate::persistence::content::entity::ActiveModel as ContentActiveModel;
#[cfg(test)]
pub(crate) use crate::persistence::content_property::entity::ActiveModel as ContentPropertyActiveModel;
