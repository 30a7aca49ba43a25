//! Memo table of fitted sizes.
//!
//! The default key is the text length, not its content: two texts with the same
//! number of characters are assumed to need the same size. This is a heuristic
//! that trades accuracy (some glyphs are wider than others) for hit rate while a
//! value is being animated or typed. [`CacheKeyPolicy::ExactText`] turns the
//! approximation off.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// How cached sizes are keyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheKeyPolicy {
    /// Number of characters in the text.
    #[default]
    TextLength,
    /// The full text. No two different texts share an entry.
    ExactText,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CacheKey {
    Length(usize),
    Text(String),
}

impl CacheKeyPolicy {
    fn key_for(self, text: &str) -> CacheKey {
        match self {
            CacheKeyPolicy::TextLength => CacheKey::Length(text.chars().count()),
            CacheKeyPolicy::ExactText => CacheKey::Text(text.to_owned()),
        }
    }
}

#[derive(Debug, Default)]
pub struct SizeCache {
    policy: CacheKeyPolicy,
    entries: HashMap<CacheKey, u32>,
}

impl SizeCache {
    pub fn new(policy: CacheKeyPolicy) -> Self {
        Self {
            policy,
            entries: HashMap::new(),
        }
    }

    pub fn policy(&self) -> CacheKeyPolicy {
        self.policy
    }

    /// Switches the key policy. Existing entries are dropped since their keys
    /// are meaningless under the new policy.
    pub fn set_policy(&mut self, policy: CacheKeyPolicy) {
        if self.policy != policy {
            self.policy = policy;
            self.entries.clear();
        }
    }

    pub fn get(&self, text: &str) -> Option<u32> {
        self.entries.get(&self.policy.key_for(text)).copied()
    }

    pub fn insert(&mut self, text: &str, size: u32) {
        self.entries.insert(self.policy.key_for(text), size);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
