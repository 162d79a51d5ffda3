pub mod catalog_service;
pub mod inquiry_service;
