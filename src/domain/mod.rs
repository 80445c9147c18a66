//! Domain layer with toast value types and port definitions.

/// Clock abstraction.
pub mod clock;
/// Display node definitions.
pub mod container;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Toast options and their coercion rules.
pub mod toast_options;

pub use clock::{Clock, ManualClock, SystemClock};
pub use container::{ContainerId, StyleClass, ToastContainer, ToastPhase};
pub use errors::ToastError;
pub use ports::ToastPort;
pub use toast_options::{DEFAULT_DURATION, ToastOptions, ToastPosition};
