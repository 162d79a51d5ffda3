pub mod catalog_router;
pub mod inquiry_router;
