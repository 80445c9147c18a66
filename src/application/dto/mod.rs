//! Data transfer objects for the application layer.

mod api_error_dto;

pub use api_error_dto::ApiErrorReport;
