//! Key-value storage for the persisted session.
//!
//! The session survives reloads as two text entries: the raw token under
//! [`TOKEN_KEY`] and the JSON-encoded user under [`USER_KEY`]. Where those
//! entries live is the store's business; [`MemoryStore`] keeps them in a map.

use std::collections::HashMap;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Text key-value storage the session is persisted into.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory session store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
