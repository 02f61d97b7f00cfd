use std::collections::HashMap;

/// Storage key holding the current guest's display name.
pub const CURRENT_GUEST_KEY: &str = "currentGuest";

/// Placeholder shown when nobody is logged in.
pub const DEFAULT_GUEST: &str = "Guest";

/// A durable key/value slot (browser local storage, or memory in tests).
pub trait SessionSlot {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory slot for native builds and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    values: HashMap<String, String>,
}

impl SessionSlot for MemorySlot {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// Who is currently looking at the invitation.
///
/// Last write wins: tabs sharing the same slot do not coordinate.
#[derive(Debug, Clone, Default)]
pub struct Session<S> {
    slot: S,
}

impl<S: SessionSlot> Session<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    pub fn set_current_guest(&mut self, name: &str) {
        self.slot.set(CURRENT_GUEST_KEY, name);
    }

    /// The persisted name. An empty stored value counts as logged out.
    pub fn current_guest(&self) -> Option<String> {
        self.slot
            .get(CURRENT_GUEST_KEY)
            .filter(|name| !name.is_empty())
    }

    pub fn current_guest_or(&self, default: &str) -> String {
        self.current_guest().unwrap_or_else(|| default.to_string())
    }

    pub fn clear_current_guest(&mut self) {
        self.slot.remove(CURRENT_GUEST_KEY);
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_guest().is_some()
    }
}
