//! Poet roster seeding remote poem retrieval
//!
//! Order matters: only a prefix of the roster is queried, and the pool is
//! assembled in roster order.

pub const POET_ROSTER: &[&str] = &[
    "Emily Dickinson",
    "Robert Frost",
    "William Shakespeare",
    "Walt Whitman",
    "William Blake",
    "John Keats",
    "Percy Bysshe Shelley",
    "William Wordsworth",
    "Edgar Allan Poe",
    "Langston Hughes",
    "Maya Angelou",
    "Sylvia Plath",
    "W.B. Yeats",
    "T.S. Eliot",
    "Rumi",
];

/// Owned copy of the roster
pub fn poet_roster() -> Vec<String> {
    POET_ROSTER.iter().map(|p| p.to_string()).collect()
}
