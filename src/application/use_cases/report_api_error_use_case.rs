//! Surfaces failed API responses as toasts.

use std::time::Duration;

use tracing::warn;

use crate::application::dto::ApiErrorReport;
use crate::domain::{ContainerId, ToastError, ToastOptions, ToastPort, ToastPosition};

/// Raises a toast carrying the server's error detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportApiErrorUseCase {
    duration: Duration,
    position: ToastPosition,
}

impl Default for ReportApiErrorUseCase {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION, ToastPosition::Bottom)
    }
}

impl ReportApiErrorUseCase {
    /// Display time of error toasts.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);

    /// Creates the use case with the error toast duration and position.
    #[must_use]
    pub const fn new(duration: Duration, position: ToastPosition) -> Self {
        Self { duration, position }
    }

    /// Shows the report's detail through `port`.
    ///
    /// # Errors
    /// Propagates the port's error.
    pub fn execute<P: ToastPort + ?Sized>(
        &self,
        port: &mut P,
        report: &ApiErrorReport,
    ) -> Result<ContainerId, ToastError> {
        let detail = report.detail();
        warn!(status = report.status, detail = %detail, "API request failed");

        let options = ToastOptions::new(detail)
            .with_duration_ms(self.duration.as_secs_f64() * 1000.0)
            .with_position(self.position.as_str());

        port.show_toast(&options)
    }
}
