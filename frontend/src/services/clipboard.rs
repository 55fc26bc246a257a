//! Clipboard access for the "Copy" buttons.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::types::{AppError, AppResult, Notification};

/// Anything text can be copied to.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> AppResult<()>;
}

/// `navigator.clipboard` of the current window.
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> AppResult<()> {
        let window = web_sys::window().ok_or_else(|| AppError::Browser("no global window".into()))?;
        let navigator = window.navigator();

        // Looked up dynamically: the API is missing on insecure origins.
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .ok()
            .filter(|v| !v.is_null() && !v.is_undefined())
            .ok_or_else(|| AppError::Clipboard("clipboard API unavailable".into()))?;

        let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(|e| AppError::Clipboard(format!("{:?}", e)))?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| AppError::Clipboard("writeText is not a function".into()))?;

        let promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(|e| AppError::Clipboard(format!("{:?}", e)))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| AppError::Clipboard("writeText did not return a promise".into()))?;

        JsFuture::from(promise)
            .await
            .map_err(|e| AppError::Clipboard(format!("write refused: {:?}", e)))?;

        Ok(())
    }
}

/// Copy `text` and return the notification to show for the outcome.
pub async fn copy_snippet<C: Clipboard>(clipboard: &C, text: &str) -> Notification {
    match clipboard.write_text(text).await {
        Ok(()) => {
            log::info!("📋 Copied {} bytes to clipboard", text.len());
            Notification::copied()
        }
        Err(e) => {
            log::warn!("Clipboard write failed: {}", e);
            Notification::copy_failed(&e)
        }
    }
}
