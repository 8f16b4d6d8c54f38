//! Static content tables: essay catalog and poet roster

pub mod essays;
pub mod poets;

pub use poets::{poet_roster, POET_ROSTER};

use lectio_common::{EssayMetadata, Error, Result};
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Validated, non-empty essay catalog with unique document identifiers.
///
/// Emptiness is rejected here, at startup, so selection never has to handle
/// a zero-sized essay pool.
#[derive(Debug, Clone)]
pub struct EssayCatalog {
    entries: Vec<EssayMetadata>,
}

impl EssayCatalog {
    pub fn new(entries: Vec<EssayMetadata>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::Catalog("essay catalog is empty".to_string()));
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.external_document_id.trim().is_empty() {
                return Err(Error::Catalog(format!(
                    "essay '{}' has an empty document id",
                    entry.title
                )));
            }
            if !seen.insert(entry.external_document_id.as_str()) {
                return Err(Error::Catalog(format!(
                    "duplicate document id '{}'",
                    entry.external_document_id
                )));
            }
        }

        Ok(Self { entries })
    }

    /// The curated catalog shipped with the service
    pub fn standard() -> Result<Self> {
        Self::new(essays::essay_entries())
    }

    pub fn len(&self) -> NonZeroUsize {
        // Non-empty by construction
        NonZeroUsize::new(self.entries.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// Entry at `index`, wrapped into range
    pub fn entry_at(&self, index: usize) -> &EssayMetadata {
        &self.entries[index % self.entries.len()]
    }

    pub fn entries(&self) -> &[EssayMetadata] {
        &self.entries
    }
}
