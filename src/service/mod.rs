pub(crate) mod content_mapper;
pub(crate) mod content_store;
pub(crate) mod error;
