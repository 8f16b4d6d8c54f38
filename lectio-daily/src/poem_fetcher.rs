//! Remote poem pool retrieval
//!
//! Queries a bounded prefix of the poet roster concurrently. Each poet is
//! isolated: a failed lookup is recorded and skipped, never propagated. The
//! pool is concatenated in roster order so index selection stays
//! deterministic regardless of completion order.

use crate::types::{FetchError, PoetrySource};
use futures::future::join_all;
use lectio_common::config::PoemPolicy;
use lectio_common::PoemCandidate;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One poet whose lookup failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoetFailure {
    pub poet: String,
    pub reason: FetchError,
}

/// Candidate poems plus the per-poet failures encountered collecting them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoemPool {
    pub poems: Vec<PoemCandidate>,
    pub failures: Vec<PoetFailure>,
}

impl PoemPool {
    pub fn len(&self) -> usize {
        self.poems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poems.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PoemCandidate> {
        self.poems.get(index)
    }
}

pub struct PoemFetcher {
    source: Arc<dyn PoetrySource>,
    roster: Vec<String>,
    policy: PoemPolicy,
}

impl PoemFetcher {
    pub fn new(source: Arc<dyn PoetrySource>, roster: Vec<String>, policy: PoemPolicy) -> Self {
        Self {
            source,
            roster,
            policy,
        }
    }

    /// Fetch, filter and cap candidates for the roster prefix. Never fails.
    pub async fn fetch_poems(&self) -> PoemPool {
        let poets = self.roster.iter().take(self.policy.roster_prefix);

        let lookups = poets.map(|poet| {
            let source = Arc::clone(&self.source);
            async move {
                let result = source.poems_by_author(poet).await;
                (poet, result)
            }
        });

        let mut pool = PoemPool::default();
        for (poet, result) in join_all(lookups).await {
            match result {
                Ok(candidates) => {
                    let accepted = self.accept(candidates);
                    debug!(poet = %poet, accepted = accepted.len(), "Poet lookup complete");
                    pool.poems.extend(accepted);
                }
                Err(e) => {
                    warn!(
                        poet = %poet,
                        source = self.source.name(),
                        error = %e,
                        "Poet lookup failed, skipping"
                    );
                    pool.failures.push(PoetFailure {
                        poet: poet.clone(),
                        reason: e,
                    });
                }
            }
        }

        if pool.is_empty() {
            warn!(
                failed_poets = pool.failures.len(),
                "Poem pool is empty, the fallback poem will be used"
            );
        } else {
            info!(
                poems = pool.len(),
                failed_poets = pool.failures.len(),
                "Poem pool assembled"
            );
        }

        pool
    }

    /// Line-count filter then per-poet cap, preserving service order
    fn accept(&self, candidates: Vec<PoemCandidate>) -> Vec<PoemCandidate> {
        candidates
            .into_iter()
            .filter(|poem| self.policy.accepts_line_count(poem.line_count))
            .take(self.policy.per_poet_cap)
            .collect()
    }
}

// ============================================================================
// Mock Source for Testing
// ============================================================================
