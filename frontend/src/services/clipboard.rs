//! Clipboard access through `navigator.clipboard`.

use wasm_bindgen_futures::JsFuture;

use crate::{AppError, AppResult};

/// Write `text` to the clipboard.
pub async fn copy_text(text: &str) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Clipboard("janela indisponível".into()))?;
    let promise = window.navigator().clipboard().write_text(text);

    JsFuture::from(promise)
        .await
        .map_err(|e| AppError::Clipboard(format!("{:?}", e)))?;

    log::info!("📋 Copied {} characters to clipboard", text.len());
    Ok(())
}
