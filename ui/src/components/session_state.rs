use dioxus::prelude::*;

use wedding_common::session::Session;
#[cfg(not(target_family = "wasm"))]
use wedding_common::session::MemorySlot;
#[cfg(target_family = "wasm")]
use wedding_common::session::SessionSlot;

/// `window.localStorage`, the durable slot that survives page loads.
#[cfg(target_family = "wasm")]
#[derive(Clone, Debug)]
pub struct LocalStorageSlot {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_family = "wasm")]
impl LocalStorageSlot {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            tracing::warn!("localStorage unavailable; session will not persist");
        }
        Self { storage }
    }
}

#[cfg(target_family = "wasm")]
impl SessionSlot for LocalStorageSlot {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to read {key}: {:?}", e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(key, value) {
                tracing::error!("Failed to write {key}: {:?}", e);
            }
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.remove_item(key) {
                tracing::error!("Failed to remove {key}: {:?}", e);
            }
        }
    }
}

#[cfg(target_family = "wasm")]
pub type BrowserSlot = LocalStorageSlot;
/// Native builds only run under `cargo test`.
#[cfg(not(target_family = "wasm"))]
pub type BrowserSlot = MemorySlot;

pub type BrowserSession = Session<BrowserSlot>;

pub fn new_browser_session() -> BrowserSession {
    #[cfg(target_family = "wasm")]
    {
        Session::new(LocalStorageSlot::new())
    }
    #[cfg(not(target_family = "wasm"))]
    {
        Session::new(MemorySlot::default())
    }
}

/// The session provided at the top of the app.
pub fn use_session() -> Signal<BrowserSession> {
    use_context::<Signal<BrowserSession>>()
}
