//! Browser glue: localStorage adapter, file downloads and uploads

use freelance_core::{Error, KeyValueStore, Result};
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, File, FileReader, HtmlAnchorElement, Storage, Url, window};

/// [`KeyValueStore`] over `window.localStorage`
///
/// Holds no handle, so it stays `Send + Sync` and can live inside signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage(key: &str) -> Result<Storage> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| Error::storage(key, "localStorage is not available"))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        local_storage(key)?
            .get_item(key)
            .map_err(|e| Error::storage(key, format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        local_storage(key)?
            .set_item(key, value)
            .map_err(|e| Error::storage(key, format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        local_storage(key)?
            .remove_item(key)
            .map_err(|e| Error::storage(key, format!("{:?}", e)))
    }
}

/// Offer `content` to the user as a CSV download
pub fn download_csv(filename: &str, content: &str) -> std::result::Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    let window = window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(&blob).map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

/// Read an uploaded image as a data URL and hand it to `on_done`
pub fn read_as_data_url(file: &File, on_done: impl FnOnce(String) + 'static) -> std::result::Result<(), String> {
    let reader = FileReader::new().map_err(|e| format!("Failed to create reader: {:?}", e))?;

    let result_reader = reader.clone();
    let on_load_end = Closure::once(move || match result_reader.result().ok().and_then(|v| v.as_string()) {
        Some(data_url) => on_done(data_url),
        None => log::error!("Uploaded file could not be read"),
    });
    reader.set_onloadend(Some(on_load_end.as_ref().unchecked_ref()));

    reader
        .read_as_data_url(file)
        .map_err(|e| format!("Failed to read file: {:?}", e))?;

    // The reader owns the callback until it fires once
    on_load_end.forget();
    Ok(())
}

/// Toggle the `dark` class on the root element
pub fn apply_dark_mode(enabled: bool) {
    if let Some(root) = window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
        let _ = root.class_list().toggle_with_force("dark", enabled);
    }
}
