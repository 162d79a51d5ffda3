pub mod inquiry_dto;
