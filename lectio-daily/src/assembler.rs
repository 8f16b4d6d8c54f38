//! Daily reading assembly
//!
//! Seed from the UTC calendar day → poem pool and essay text fetched
//! concurrently → indices selected → both readings normalized. Every path
//! returns fully populated readings; degraded sources show up as fallbacks
//! and log lines only.

use crate::catalog::EssayCatalog;
use crate::essay_fetcher::EssayFetcher;
use crate::poem_fetcher::PoemFetcher;
use crate::selector::{DailySelector, Selection};
use chrono::{DateTime, NaiveDate, Utc};
use lectio_common::time::{self, calendar_day};
use lectio_common::{DailyReadings, DailySeed, PoemCandidate, Reading, ReadingKind};
use tracing::{info, warn};

pub const POEM_CITATION_TEXT: &str = "PoetryDB";
pub const POEM_CITATION_URL: &str = "https://poetrydb.org";

pub const FALLBACK_POEM_TITLE: &str = "Hope is the thing with feathers";
pub const FALLBACK_POEM_AUTHOR: &str = "Emily Dickinson";
pub const FALLBACK_POEM_LINES: [&str; 4] = [
    "Hope is the thing with feathers",
    "That perches in the soul,",
    "And sings the tune without the words,",
    "And never stops at all,",
];
pub const FALLBACK_POEM_CITATION: &str = "Poems by Emily Dickinson, Second Series (1891)";

/// Poem served when the remote pool is empty
pub fn fallback_poem() -> Reading {
    Reading {
        kind: ReadingKind::Poem,
        title: FALLBACK_POEM_TITLE.to_string(),
        author: FALLBACK_POEM_AUTHOR.to_string(),
        content: FALLBACK_POEM_LINES.iter().map(|l| l.to_string()).collect(),
        citation_text: Some(FALLBACK_POEM_CITATION.to_string()),
        citation_url: None,
    }
}

/// Normalize a fetched poem into a reading
pub fn poem_reading(poem: &PoemCandidate) -> Reading {
    Reading {
        kind: ReadingKind::Poem,
        title: poem.title.clone(),
        author: poem.author.clone(),
        content: poem.lines.clone(),
        citation_text: Some(POEM_CITATION_TEXT.to_string()),
        citation_url: Some(POEM_CITATION_URL.to_string()),
    }
}

pub struct ReadingAssembler {
    poems: PoemFetcher,
    essays: EssayFetcher,
    catalog: EssayCatalog,
    selector: DailySelector,
}

impl ReadingAssembler {
    pub fn new(
        poems: PoemFetcher,
        essays: EssayFetcher,
        catalog: EssayCatalog,
        selector: DailySelector,
    ) -> Self {
        Self {
            poems,
            essays,
            catalog,
            selector,
        }
    }

    pub fn catalog(&self) -> &EssayCatalog {
        &self.catalog
    }

    /// Pure selection step for a day and a given poem pool size
    pub fn select_for_day(&self, day: NaiveDate, poem_pool_size: usize) -> Selection {
        self.selector
            .select(DailySeed::from_date(day), poem_pool_size, self.catalog.len())
    }

    /// Poem and essay for the current UTC day
    pub async fn daily_readings(&self) -> DailyReadings {
        self.daily_readings_at(time::now()).await
    }

    /// Poem and essay for the UTC calendar day containing `instant`
    pub async fn daily_readings_at(&self, instant: DateTime<Utc>) -> DailyReadings {
        self.readings_for_day(calendar_day(instant)).await
    }

    pub async fn readings_for_day(&self, day: NaiveDate) -> DailyReadings {
        // The essay index depends only on the seed and the catalog size, so the
        // essay fetch does not wait for the poem pool
        let essay_index = self.select_for_day(day, 0).essay_index;
        let essay_metadata = self.catalog.entry_at(essay_index);

        let (pool, essay) = tokio::join!(
            self.poems.fetch_poems(),
            self.essays.get_essay(essay_metadata)
        );

        let selection = self.select_for_day(day, pool.len());
        let poem = self.pick_poem(pool.get(selection.poem_index));

        info!(
            date = %day,
            poem_index = selection.poem_index,
            pool_size = pool.len(),
            essay_index = selection.essay_index,
            poem = %poem.title,
            essay = %essay.title,
            "Daily readings selected"
        );

        DailyReadings {
            date: day,
            poem,
            essay,
        }
    }

    /// Poem-only variant for callers that predate the essay pairing
    pub async fn daily_reading(&self) -> Reading {
        self.daily_reading_at(time::now()).await
    }

    pub async fn daily_reading_at(&self, instant: DateTime<Utc>) -> Reading {
        self.daily_reading_on(calendar_day(instant)).await
    }

    pub async fn daily_reading_on(&self, day: NaiveDate) -> Reading {
        let pool = self.poems.fetch_poems().await;
        let selection = self.select_for_day(day, pool.len());
        self.pick_poem(pool.get(selection.poem_index))
    }

    fn pick_poem(&self, candidate: Option<&PoemCandidate>) -> Reading {
        match candidate.filter(|poem| !poem.lines.is_empty()) {
            Some(poem) => poem_reading(poem),
            None => {
                warn!("No poem available for today, serving fallback poem");
                fallback_poem()
            }
        }
    }
}
