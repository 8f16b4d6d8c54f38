//! lectio-daily library interface
//!
//! Exposes the fetchers, selection and assembly for the binary and for
//! integration testing.

pub mod assembler;
pub mod catalog;
pub mod essay_cache;
pub mod essay_fetcher;
pub mod poem_fetcher;
pub mod selector;
pub mod services;
pub mod types;

pub use assembler::ReadingAssembler;
pub use catalog::EssayCatalog;
pub use essay_cache::{EssayCache, InMemoryEssayCache};
pub use essay_fetcher::EssayFetcher;
pub use poem_fetcher::{PoemFetcher, PoemPool};
pub use selector::{DailySelector, Selection};
pub use types::{FetchError, PoetrySource, TextSource};

use lectio_common::config::TomlConfig;
use lectio_common::Result;
use services::{PoetryDbClient, WikisourceClient};
use std::sync::Arc;
use tracing::info;

/// Wire the production assembler: HTTP clients, curated catalog and roster,
/// and a process-lifetime in-memory essay cache.
pub fn build_assembler(config: &TomlConfig) -> Result<ReadingAssembler> {
    let catalog = EssayCatalog::standard()?;
    let poetry: Arc<dyn PoetrySource> = Arc::new(PoetryDbClient::new(&config.services)?);
    let text: Arc<dyn TextSource> = Arc::new(WikisourceClient::new(&config.services)?);

    info!(
        poetry_source = poetry.name(),
        text_source = text.name(),
        essays = catalog.len().get(),
        poets = config.poems.roster_prefix,
        "Reading sources configured"
    );

    let poems = PoemFetcher::new(poetry, catalog::poet_roster(), config.poems);
    let essays = EssayFetcher::new(text, Arc::new(InMemoryEssayCache::new()), config.essays.clone());

    Ok(ReadingAssembler::new(
        poems,
        essays,
        catalog,
        DailySelector::new(config.selection),
    ))
}
