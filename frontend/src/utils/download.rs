use wasm_bindgen::JsCast;

use super::storage as storage_utils;

pub fn trigger_bytes_download(filename: &str, bytes: &[u8]) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));
    let blob = web_sys::Blob::new_with_u8_array_sequence(&array)
        .map_err(|_| "Failed to create blob".to_string())?;
    trigger_blob_download(filename, &blob)
}

/// Saves `blob` through a transient anchor; the node and object URL are
/// released before returning.
pub fn trigger_blob_download(filename: &str, blob: &web_sys::Blob) -> Result<(), String> {
    let url = web_sys::Url::create_object_url_with_blob(blob)
        .map_err(|_| "Failed to create object URL".to_string())?;

    let result = click_anchor(&url, filename);
    let _ = web_sys::Url::revoke_object_url(&url);
    result
}

fn click_anchor(url: &str, filename: &str) -> Result<(), String> {
    let document = storage_utils::window()?.document().ok_or("No document")?;
    let element = document
        .create_element("a")
        .map_err(|_| "Failed to create link".to_string())?;
    let a = element
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Failed to cast anchor".to_string())?;
    a.set_href(url);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or("No body")?
        .append_child(&a)
        .map_err(|_| "Append failed".to_string())?;
    a.click();
    a.remove();
    Ok(())
}

pub fn fallback_file_name(file_id: i64) -> String {
    format!("file_{}", file_id)
}
