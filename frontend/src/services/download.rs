//! Save a remote file through a temporary `<a download>` link.

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

use crate::config::OBJECT_URL_REVOKE_DELAY_MS;
use crate::{AppError, AppResult};

/// Fetch `url` and offer it to the user as `filename`.
pub async fn download_file(url: &str, filename: &str) -> AppResult<()> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| AppError::Download(format!("requisição HTTP falhou: {}", e)))?;

    if !response.ok() {
        return Err(AppError::Download(format!(
            "o servidor respondeu {} para {}",
            response.status(),
            url
        )));
    }

    let bytes = response
        .binary()
        .await
        .map_err(|e| AppError::Download(format!("resposta ilegível: {}", e)))?;

    let array = js_sys::Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::of1(&array);
    let blob = Blob::new_with_u8_array_sequence(&parts)
        .map_err(|e| AppError::Download(format!("não foi possível montar o arquivo: {:?}", e)))?;

    let object_url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| AppError::Download(format!("não foi possível criar o link do arquivo: {:?}", e)))?;

    let result = click_download_link(&object_url, filename);
    // Revoke even if the click failed, but not in the same tick as the click
    revoke_later(object_url);
    result?;

    log::info!("💾 Saved {} ({} bytes)", filename, bytes.len());
    Ok(())
}

fn revoke_later(object_url: String) {
    Timeout::new(OBJECT_URL_REVOKE_DELAY_MS, move || {
        if let Err(e) = Url::revoke_object_url(&object_url) {
            log::warn!("⚠️ Failed to revoke {}: {:?}", object_url, e);
        }
    })
    .forget();
}

fn click_download_link(href: &str, filename: &str) -> AppResult<()> {
    let anchor: HtmlAnchorElement = gloo_utils::document()
        .create_element("a")
        .map_err(|e| AppError::Download(format!("não foi possível criar o link: {:?}", e)))?
        .dyn_into()
        .map_err(|_| AppError::Download("o elemento criado não é um link".into()))?;

    anchor.set_href(href);
    anchor.set_download(filename);
    anchor.click();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::assertions_on_constants)]
    fn test_object_url_outlives_the_click_tick() {
        assert!(OBJECT_URL_REVOKE_DELAY_MS > 0);
    }
}
