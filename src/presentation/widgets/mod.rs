mod footer_bar;
mod toast_overlay;

pub use footer_bar::{FooterBar, FooterBarStyle};
pub use toast_overlay::{FadeTimings, ToastOverlay, ToastOverlayState};
