pub mod catalog_repo;
pub mod inquiry_repo;
pub mod repository_error;
