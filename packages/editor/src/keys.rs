//! # Render Keys
//!
//! Cards, badges and sections carry no id. A renderer diffing two documents
//! still needs to tell "same card, new position" from "different card", so
//! the key table hands out a synthetic key per record allocation.
//!
//! Identity is the `Arc` allocation, not the content: two equal cards at
//! different positions get different keys, and a card keeps its key when an
//! edit moves it, since the algebra moves the same `Arc`.
//!
//! Keys are `"{seed}-{n}"`. The seed combines a CRC32 of the session label
//! with a random nonce drawn per table, so two tables never hand out the
//! same key even under the same label.
//!
//! Each entry holds a `Weak` to its record, which keeps the allocation's
//! address reserved for as long as the entry exists. Entries for removed
//! records stay until [`KeyTable::prune`] or [`KeyTable::reset`].

use crc32fast::Hasher;
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Weak};
use tracing::trace;
use uuid::Uuid;

/// Seed for a table's keys: CRC32 of the label followed by `nonce`
pub fn session_seed(label: &str, nonce: u64) -> String {
    let mut hasher = Hasher::new();
    hasher.update(label.as_bytes());
    format!("{:08x}{:016x}", hasher.finalize(), nonce)
}

struct KeyEntry {
    record: Weak<dyn Any + Send + Sync>,
    key: String,
}

/// Identity-keyed side table of render keys, owned by one rendering session
pub struct KeyTable {
    seed: String,
    count: u64,
    entries: HashMap<usize, KeyEntry>,
}

impl KeyTable {
    pub fn new(label: &str) -> Self {
        Self {
            seed: session_seed(label, Uuid::new_v4().as_u128() as u64),
            count: 0,
            entries: HashMap::new(),
        }
    }

    /// Key for `record`, generated on first sight
    pub fn key_of<T: Any + Send + Sync>(&mut self, record: &Arc<T>) -> String {
        let address = Arc::as_ptr(record) as *const () as usize;

        if let Some(entry) = self.entries.get(&address) {
            return entry.key.clone();
        }

        self.count += 1;
        let key = format!("{}-{}", self.seed, self.count);
        trace!(key = %key, "assigned render key");

        let weak: Weak<T> = Arc::downgrade(record);
        self.entries.insert(
            address,
            KeyEntry {
                record: weak as Weak<dyn Any + Send + Sync>,
                key: key.clone(),
            },
        );
        key
    }

    /// Drop entries whose record no longer exists. Returns how many went.
    pub fn prune(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.record.strong_count() > 0);
        before - self.entries.len()
    }

    /// Forget every entry. Keys handed out later never repeat earlier ones.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl std::fmt::Debug for KeyTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyTable")
            .field("seed", &self.seed)
            .field("count", &self.count)
            .field("entries", &self.entries.len())
            .finish()
    }
}
