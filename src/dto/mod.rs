pub mod auth_dto;
pub mod common;
