//! Date-seeded index selection
//!
//! Pure arithmetic over the daily seed. Both indices derive from the same
//! seed; the essay index is scaled by an odd multiplier so the two do not
//! advance in lockstep from one day to the next.

use lectio_common::config::SelectionPolicy;
use lectio_common::DailySeed;
use std::num::NonZeroUsize;

/// Indices chosen for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Index into the poem pool. 0 when the pool is empty.
    pub poem_index: usize,
    pub essay_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySelector {
    essay_multiplier: u32,
}

impl DailySelector {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            essay_multiplier: policy.essay_multiplier,
        }
    }

    /// `poem = seed mod max(poems, 1)`, `essay = (seed * k) mod essays`
    pub fn select(
        &self,
        seed: DailySeed,
        poem_pool_size: usize,
        essay_pool_size: NonZeroUsize,
    ) -> Selection {
        let seed = i128::from(seed.value());
        let poem_modulus = poem_pool_size.max(1) as i128;
        let essay_modulus = essay_pool_size.get() as i128;

        let poem_index = seed.rem_euclid(poem_modulus) as usize;
        let essay_index =
            (seed * i128::from(self.essay_multiplier)).rem_euclid(essay_modulus) as usize;

        Selection {
            poem_index,
            essay_index,
        }
    }
}

impl Default for DailySelector {
    fn default() -> Self {
        Self::new(SelectionPolicy::default())
    }
}
