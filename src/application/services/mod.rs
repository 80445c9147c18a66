pub mod timer_queue;
pub mod toast;
pub mod toast_host;

pub use timer_queue::{TimerHandle, TimerQueue};
pub use toast::Toast;
pub use toast_host::{MAX_DISMISS_DELAY, ToastHost};
