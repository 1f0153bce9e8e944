use std::sync::Mutex;

/// Bearer-token slot. In the browser this is a persisted storage key; the
/// in-memory store stands in everywhere the contract is exercised directly.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_owned())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // a poisoned slot still holds a usable token
        self.token.lock().unwrap_or_else(|poison| poison.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot().clone()
    }

    fn set(&self, token: &str) {
        *self.slot() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot() = None;
    }
}
