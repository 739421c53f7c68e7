//! Blocking user notifications.

/// Something that can put a message in front of the user.
pub trait Dialog {
    fn alert(&self, message: &str);
}

/// `window.alert` in the browser, a log line elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialog;

impl Dialog for BrowserDialog {
    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if window.alert_with_message(message).is_ok() {
                    return;
                }
            }
        }
        tracing::warn!("alert: {message}");
    }
}
