pub mod use_toasts;

pub use use_toasts::{use_toasts, Toast, ToastNotifier};
