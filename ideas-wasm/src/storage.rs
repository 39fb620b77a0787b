use ideas_client::{IdeasClientError, IdeasClientResult, PreferenceStore};

/// Настройки в `localStorage` браузера.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LocalStoragePreferences;

fn local_storage() -> Result<web_sys::Storage, String> {
    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    window
        .local_storage()
        .map_err(|_| "failed to access localStorage".to_string())?
        .ok_or_else(|| "localStorage is not available".to_string())
}

impl PreferenceStore for LocalStoragePreferences {
    fn load(&self, key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) -> IdeasClientResult<()> {
        local_storage()
            .map_err(IdeasClientError::Preferences)?
            .set_item(key, value)
            .map_err(|_| IdeasClientError::Preferences(format!("failed to save {key}")))
    }
}
