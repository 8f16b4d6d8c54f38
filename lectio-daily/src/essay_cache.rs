//! Process-lifetime essay cache
//!
//! Keyed by external document id. Entries are never evicted; the cache lives
//! as long as the process (or the outer revalidation window that owns it).

use async_trait::async_trait;
use lectio_common::Reading;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Injectable cache abstraction used by the essay fetcher
#[async_trait]
pub trait EssayCache: Send + Sync {
    async fn get(&self, document_id: &str) -> Option<Reading>;

    /// Store `reading` unless the key is already present.
    ///
    /// Returns the value held by the cache afterwards: the existing entry if
    /// one was there, otherwise `reading`.
    async fn insert_if_absent(&self, document_id: &str, reading: Reading) -> Reading;
}

/// In-memory cache backed by a `RwLock<HashMap>`
#[derive(Default)]
pub struct InMemoryEssayCache {
    entries: RwLock<HashMap<String, Reading>>,
}

impl InMemoryEssayCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl EssayCache for InMemoryEssayCache {
    async fn get(&self, document_id: &str) -> Option<Reading> {
        self.entries.read().await.get(document_id).cloned()
    }

    async fn insert_if_absent(&self, document_id: &str, reading: Reading) -> Reading {
        let mut entries = self.entries.write().await;
        entries
            .entry(document_id.to_string())
            .or_insert(reading)
            .clone()
    }
}
