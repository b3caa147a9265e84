//! Saving server-generated files (and client-built CSV) to disk.

use contracts::shared::api_error::ApiError;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const PDF_MIME: &str = "application/pdf";
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

fn browser_err(what: &str, e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Browser(format!("{}: {:?}", what, e))
}

pub fn blob_from_bytes(bytes: &[u8], mime: &str) -> Result<Blob, ApiError> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes).into());

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| browser_err("Failed to create blob", e))
}

pub fn blob_from_text(content: &str, mime: &str) -> Result<Blob, ApiError> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| browser_err("Failed to create blob", e))
}

/// Object URL + hidden anchor click, then cleanup.
pub fn save_blob(blob: &Blob, filename: &str) -> Result<(), ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Browser("No window object".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ApiError::Browser("No document object".into()))?;
    let body = document
        .body()
        .ok_or_else(|| ApiError::Browser("No body element".into()))?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| browser_err("Failed to create object URL", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| browser_err("Failed to create anchor", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| browser_err("Failed to cast to anchor", e.into()))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| browser_err("Failed to set style", e))?;

    body.append_child(&anchor)
        .map_err(|e| browser_err("Failed to append anchor", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| browser_err("Failed to remove anchor", e))?;

    Url::revoke_object_url(&url).map_err(|e| browser_err("Failed to revoke URL", e))?;

    log::info!("Downloaded {}", filename);
    Ok(())
}
