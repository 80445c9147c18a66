//! Presentation layer with the terminal host and event handling.

/// Event handling.
pub mod events;
/// Colors and styles.
pub mod theme;
/// Terminal host.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
