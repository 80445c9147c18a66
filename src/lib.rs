//! Toastline - transient, auto-dismissing toast notifications.
//!
//! This crate provides a single-slot toast notifier with an explicit host,
//! cancellable dismiss timers, and a terminal front-end that animates toasts
//! in and out.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the toast host and use cases.
pub mod application;
/// Domain layer containing toast values, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration.
pub mod infrastructure;
/// Presentation layer containing the terminal host and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "toastline";
