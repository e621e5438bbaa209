use crate::error::{Error, Result};

/// Key/value storage that outlives the page.
pub trait PreferenceStore {
    /// `None` when the key is unset or the storage cannot be read.
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Browser local storage.
///
/// Values are stored as bare strings, not JSON, so whatever the site wrote
/// before is read back as is.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    fn raw() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::raw().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::raw()
            .ok_or(Error::StorageUnavailable)?
            .set_item(key, value)
            .map_err(|_| Error::StorageWrite {
                key: key.to_owned(),
            })
    }
}
