//! Browser-backed theme preference

use shared::{PreferenceError, PreferenceStore, Theme};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// `window.localStorage` as a [`PreferenceStore`]
pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, PreferenceError> {
        let window = web_sys::window()
            .ok_or_else(|| PreferenceError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| PreferenceError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.storage.set_item(key, value).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> PreferenceError {
    PreferenceError::Unavailable(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// Whether the operating system asks for a dark color scheme
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

/// Toggle the `dark` class on the document root
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());

    if let Some(root) = root {
        if let Err(err) = root.class_list().toggle_with_force("dark", theme == Theme::Dark) {
            warn(&format!("Failed to apply theme: {:?}", err));
        }
    }
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
