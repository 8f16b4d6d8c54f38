//! End-to-end assembly with in-memory sources

use async_trait::async_trait;
use chrono::NaiveDate;
use lectio_common::config::{EssayPolicy, PoemPolicy};
use lectio_common::{PoemCandidate, ReadingKind};
use lectio_daily::assembler::{fallback_poem, POEM_CITATION_TEXT};
use lectio_daily::essay_fetcher::ESSAY_PLACEHOLDER;
use lectio_daily::{
    DailySelector, EssayCatalog, EssayFetcher, FetchError, InMemoryEssayCache, PoemFetcher,
    PoetrySource, ReadingAssembler, TextSource,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct FixedPoems {
    by_author: HashMap<String, Result<Vec<PoemCandidate>, FetchError>>,
}

impl FixedPoems {
    fn new() -> Self {
        Self {
            by_author: HashMap::new(),
        }
    }

    fn author(mut self, name: &str, result: Result<Vec<PoemCandidate>, FetchError>) -> Self {
        self.by_author.insert(name.to_string(), result);
        self
    }
}

#[async_trait]
impl PoetrySource for FixedPoems {
    fn name(&self) -> &'static str {
        "Fixed"
    }

    async fn poems_by_author(&self, author: &str) -> Result<Vec<PoemCandidate>, FetchError> {
        self.by_author
            .get(author)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::NotFound(author.to_string())))
    }
}

struct FixedText {
    result: Result<String, FetchError>,
    calls: AtomicUsize,
}

impl FixedText {
    fn new(result: Result<String, FetchError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TextSource for FixedText {
    fn name(&self) -> &'static str {
        "Fixed"
    }

    async fn document_text(&self, _document_id: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

fn candidate(author: &str, title: &str, lines: usize) -> PoemCandidate {
    PoemCandidate {
        title: title.to_string(),
        author: author.to_string(),
        lines: (0..lines).map(|i| format!("{} line {}", title, i)).collect(),
        line_count: lines,
    }
}

fn assembler(poems: FixedPoems, text: Arc<FixedText>) -> ReadingAssembler {
    let roster = vec![
        "First Poet".to_string(),
        "Second Poet".to_string(),
        "Third Poet".to_string(),
    ];
    ReadingAssembler::new(
        PoemFetcher::new(Arc::new(poems), roster, PoemPolicy::default()),
        EssayFetcher::new(text, Arc::new(InMemoryEssayCache::new()), EssayPolicy::default()),
        EssayCatalog::standard().unwrap(),
        DailySelector::default(),
    )
}

fn june_15() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

#[tokio::test]
async fn test_every_source_down_yields_fallbacks() {
    let text = Arc::new(FixedText::new(Err(FetchError::ApiError(503, String::new()))));
    let assembler = assembler(FixedPoems::new(), text.clone());

    let readings = assembler.readings_for_day(june_15()).await;

    assert_eq!(readings.poem, fallback_poem());
    assert_eq!(readings.essay.kind, ReadingKind::Essay);
    assert_eq!(readings.essay.title, "Of Studies");
    assert_eq!(readings.essay.content, vec![ESSAY_PLACEHOLDER.to_string()]);
    assert!(readings.essay.citation_text.is_some());
}

#[tokio::test]
async fn test_one_failing_poet_does_not_empty_the_pool() {
    let poems = FixedPoems::new()
        .author("First Poet", Err(FetchError::NetworkError("reset".to_string())))
        .author(
            "Second Poet",
            Ok((0..5).map(|i| candidate("Second Poet", &format!("s{}", i), 8)).collect()),
        );
    let text = Arc::new(FixedText::new(Ok("Reading maketh a full man.".to_string())));
    let assembler = assembler(poems, text);

    let readings = assembler.readings_for_day(june_15()).await;

    // 20240615 mod 5 = 0
    assert_eq!(readings.poem.title, "s0");
    assert_eq!(readings.poem.author, "Second Poet");
    assert_eq!(readings.poem.citation_text.as_deref(), Some(POEM_CITATION_TEXT));
    assert_eq!(readings.essay.content, vec!["Reading maketh a full man."]);
}

#[tokio::test]
async fn test_out_of_range_poems_filtered_before_selection() {
    let poems = FixedPoems::new().author(
        "Third Poet",
        Ok(vec![
            candidate("Third Poet", "too short", 2),
            candidate("Third Poet", "too long", 120),
        ]),
    );
    let text = Arc::new(FixedText::new(Ok("Text.".to_string())));
    let assembler = assembler(poems, text);

    let readings = assembler.readings_for_day(june_15()).await;
    assert_eq!(readings.poem, fallback_poem());
}

#[tokio::test]
async fn test_repeat_requests_are_identical_and_cached() {
    let poems = FixedPoems::new().author(
        "First Poet",
        Ok((0..9).map(|i| candidate("First Poet", &format!("f{}", i), 10)).collect()),
    );
    let text = Arc::new(FixedText::new(Ok("One.\n\nTwo.\n\n== Notes ==\n\nThree.".to_string())));
    let assembler = assembler(poems, text.clone());

    let first = assembler.readings_for_day(june_15()).await;
    let second = assembler.readings_for_day(june_15()).await;

    assert_eq!(first, second);
    assert_eq!(first.essay.content, vec!["One.", "Two.", "Three."]);
    assert_eq!(text.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_readings_serialize_with_kind_tags() {
    let text = Arc::new(FixedText::new(Ok("Text.".to_string())));
    let assembler = assembler(FixedPoems::new(), text);

    let readings = assembler.readings_for_day(june_15()).await;
    let json = serde_json::to_value(&readings).unwrap();

    assert_eq!(json["date"], "2024-06-15");
    assert_eq!(json["poem"]["kind"], "poem");
    assert_eq!(json["essay"]["kind"], "essay");
    assert!(json["poem"]["content"].as_array().unwrap().len() >= 4);
}
