//! Use case implementations.

mod report_api_error_use_case;

pub use report_api_error_use_case::ReportApiErrorUseCase;
