//! A toast instance and its display cycle.

use std::time::Duration;

use serde_json::Value;

use super::timer_queue::TimerHandle;
use super::toast_host::ToastHost;
use crate::domain::{Clock, ContainerId, ToastError, ToastOptions, ToastPosition};

/// A transient notification.
///
/// The instance owns its pending dismiss handle; every [`Toast::show`] cancels
/// the previous one before arming a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    content: String,
    duration: Duration,
    position: ToastPosition,
    pending_dismiss: Option<TimerHandle>,
    container: Option<ContainerId>,
}

impl Toast {
    /// Builds an unshown toast from parsed options.
    #[must_use]
    pub fn from_options(options: &ToastOptions) -> Self {
        Self {
            content: options.content().unwrap_or_default().to_owned(),
            duration: options.resolved_duration(),
            position: options.resolved_position(),
            pending_dismiss: None,
            container: None,
        }
    }

    /// # Errors
    /// Returns [`ToastError::InvalidOptions`] if `value` is not an object.
    pub fn from_value(value: &Value) -> Result<Self, ToastError> {
        ToastOptions::from_value(value).map(|options| Self::from_options(&options))
    }

    /// Builds a toast and shows it right away.
    ///
    /// # Errors
    /// Returns [`ToastError::InvalidOptions`] for non-object options and
    /// [`ToastError::EmptyContent`] when there is nothing to display. Nothing
    /// is inserted in either case.
    pub fn spawn<C: Clock>(value: &Value, host: &mut ToastHost<C>) -> Result<Self, ToastError> {
        let mut toast = Self::from_value(value)?;
        toast.show(host)?;
        Ok(toast)
    }

    /// Text to display.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Time the toast stays visible before fading out.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Screen edge the toast is anchored to.
    #[must_use]
    pub const fn position(&self) -> ToastPosition {
        self.position
    }

    /// Dismiss timer armed by the latest show, if still held.
    #[must_use]
    pub const fn pending_dismiss(&self) -> Option<TimerHandle> {
        self.pending_dismiss
    }

    /// Container inserted by the latest successful show.
    #[must_use]
    pub const fn container(&self) -> Option<ContainerId> {
        self.container
    }

    /// Displays the toast, replacing whatever the host currently shows.
    ///
    /// # Errors
    /// Returns [`ToastError::EmptyContent`] if there is no content.
    pub fn show<C: Clock>(&mut self, host: &mut ToastHost<C>) -> Result<ContainerId, ToastError> {
        if self.content.is_empty() {
            return Err(ToastError::EmptyContent);
        }

        if let Some(handle) = self.pending_dismiss.take() {
            host.cancel(handle);
        }

        let (id, handle) = host.insert(&self.content, self.position, self.duration);
        self.pending_dismiss = Some(handle);
        self.container = Some(id);
        Ok(id)
    }

    /// Starts the exit animation of the host's active toast.
    ///
    /// # Errors
    /// Returns [`ToastError::NoActiveToast`] without touching anything if the
    /// host shows nothing.
    pub fn hide<C: Clock>(&mut self, host: &mut ToastHost<C>) -> Result<ContainerId, ToastError> {
        if host.active().is_none() {
            return Err(ToastError::NoActiveToast);
        }

        if let Some(handle) = self.pending_dismiss.take() {
            host.cancel(handle);
        }
        host.begin_fade_out()
    }
}
