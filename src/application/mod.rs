//! Application layer with the toast host, toast instances, and use cases.

/// Data transfer objects.
pub mod dto;
/// Toast host and scheduling services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::ApiErrorReport;
pub use services::{MAX_DISMISS_DELAY, TimerHandle, TimerQueue, Toast, ToastHost};
pub use use_cases::ReportApiErrorUseCase;
