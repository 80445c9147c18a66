//! Toast port definition.

#[cfg(test)]
use mockall::automock;

use crate::domain::container::ContainerId;
use crate::domain::errors::ToastError;
use crate::domain::toast_options::ToastOptions;

/// Port through which callers raise and dismiss toasts.
#[cfg_attr(test, automock)]
pub trait ToastPort {
    /// Displays a toast, replacing any toast currently shown.
    ///
    /// # Errors
    /// Returns [`ToastError::EmptyContent`] if there is nothing to display.
    fn show_toast(&mut self, options: &ToastOptions) -> Result<ContainerId, ToastError>;

    /// Starts dismissing the toast currently shown.
    ///
    /// # Errors
    /// Returns [`ToastError::NoActiveToast`] if nothing is shown.
    fn hide_toast(&mut self) -> Result<ContainerId, ToastError>;
}
