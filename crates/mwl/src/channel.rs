//! Per-message channel map.
//!
//! The shared context downstream stages read from. One map belongs to one message; nothing in
//! it survives to the next invocation.

use std::collections::BTreeMap;

/// String key -> string value slots for one message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelMap {
    entries: BTreeMap<String, String>,
}

impl ChannelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, returning the value it replaced.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}
