pub(crate) mod content_repository;
