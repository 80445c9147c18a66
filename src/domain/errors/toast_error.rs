//! Toast error types.

use thiserror::Error;

/// Soft failures of toast operations.
///
/// None of these are fatal: a failed operation leaves the display untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ToastError {
    /// Options were missing or were not an object.
    #[error("toast options must be an object")]
    InvalidOptions,

    /// The toast has nothing to display.
    #[error("toast has no content to display")]
    EmptyContent,

    /// A hide was requested while no toast occupies the slot.
    #[error("no active toast to hide")]
    NoActiveToast,
}

impl ToastError {
    /// Returns whether the error happened before anything was displayed.
    #[must_use]
    pub const fn is_construction_error(&self) -> bool {
        matches!(self, Self::InvalidOptions | Self::EmptyContent)
    }
}
