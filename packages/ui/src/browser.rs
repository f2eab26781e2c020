//! Thin wrappers over browser APIs.
//!
//! Outside wasm32 these log instead of touching a window.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("no browser window")]
    NoWindow,

    #[error("browser call failed: {0}")]
    Js(String),

    #[error("file downloads need a browser")]
    Unsupported,
}

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> BrowserError {
    BrowserError::Js(format!("{err:?}"))
}

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let shown = web_sys::window().map(|window| window.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            tracing::warn!("Could not show alert: {}", message);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!("alert: {}", message);
}

/// Offer `bytes` to the user as a file download.
#[cfg(target_arch = "wasm32")]
pub fn download_file(file_name: &str, bytes: &[u8], mime: &str) -> Result<(), BrowserError> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let clicked = click_download_link(&url, file_name);
    revoke_later(url);
    clicked?;

    tracing::info!("Downloaded {} ({} bytes)", file_name, bytes.len());
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn click_download_link(url: &str, file_name: &str) -> Result<(), BrowserError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BrowserError::NoWindow)?;
    let body = document.body().ok_or(BrowserError::NoWindow)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| BrowserError::Js("created element is not an anchor".to_string()))?;
    anchor.set_href(url);
    anchor.set_download(file_name);

    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_error)?;
    Ok(())
}

/// Release an object URL once the click has been handled.
#[cfg(target_arch = "wasm32")]
fn revoke_later(url: String) {
    gloo_timers::callback::Timeout::new(0, move || {
        if let Err(err) = web_sys::Url::revoke_object_url(&url) {
            tracing::warn!("Failed to revoke {}: {:?}", url, err);
        }
    })
    .forget();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn download_file(file_name: &str, bytes: &[u8], _mime: &str) -> Result<(), BrowserError> {
    tracing::warn!("Cannot download {} ({} bytes) without a browser", file_name, bytes.len());
    Err(BrowserError::Unsupported)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_download_is_unsupported() {
        let result = download_file("resume-1.pdf", b"%PDF", "application/pdf");
        assert!(matches!(result, Err(BrowserError::Unsupported)));
    }
}
