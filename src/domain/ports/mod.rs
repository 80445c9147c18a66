mod toast_port;

pub use toast_port::ToastPort;
