//! Domain error types.

mod toast_error;

pub use toast_error::ToastError;
