pub mod catalog_handler;
pub mod inquiry_handler;
