mod toast;

pub use toast::{use_toasts, ToastHandle, ToastProvider};
