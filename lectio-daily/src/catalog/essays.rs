//! Curated essay catalog (public domain texts)
//!
//! `document_id` is the page title on the text service. Entries must keep
//! their order: the daily essay is selected by index.

use lectio_common::EssayMetadata;

struct Entry {
    title: &'static str,
    author: &'static str,
    document_id: &'static str,
    citation: &'static str,
    url: Option<&'static str>,
}

const ENTRIES: &[Entry] = &[
    Entry {
        title: "Self-Reliance",
        author: "Ralph Waldo Emerson",
        document_id: "Essays: First Series/Self-Reliance",
        citation: "Essays: First Series (1841)",
        url: Some("https://www.gutenberg.org/ebooks/16643"),
    },
    Entry {
        title: "The Over-Soul",
        author: "Ralph Waldo Emerson",
        document_id: "Essays: First Series/The Over-Soul",
        citation: "Essays: First Series (1841)",
        url: Some("https://www.gutenberg.org/ebooks/16643"),
    },
    Entry {
        title: "On the Shortness of Life",
        author: "Seneca",
        document_id: "On the Shortness of Life",
        citation: "De Brevitate Vitae (49 AD)",
        url: Some("https://www.gutenberg.org/ebooks/67617"),
    },
    Entry {
        title: "Civil Disobedience",
        author: "Henry David Thoreau",
        document_id: "Civil Disobedience (Thoreau)",
        citation: "Resistance to Civil Government (1849)",
        url: Some("https://www.gutenberg.org/ebooks/71"),
    },
    Entry {
        title: "Where I Lived, and What I Lived For",
        author: "Henry David Thoreau",
        document_id: "Walden (1854)/Where I Lived, and What I Lived For",
        citation: "Walden (1854)",
        url: Some("https://www.gutenberg.org/ebooks/205"),
    },
    Entry {
        title: "Of Studies",
        author: "Francis Bacon",
        document_id: "The Essays or Counsels, Civil and Moral/Of Studies",
        citation: "Essays (1597)",
        url: Some("https://www.gutenberg.org/ebooks/56968"),
    },
    Entry {
        title: "Of Truth",
        author: "Francis Bacon",
        document_id: "The Essays or Counsels, Civil and Moral/Of Truth",
        citation: "Essays (1597)",
        url: Some("https://www.gutenberg.org/ebooks/56968"),
    },
    Entry {
        title: "Of Solitude",
        author: "Michel de Montaigne",
        document_id: "The Essays of Montaigne/Book I/Chapter XXXVIII",
        citation: "Essays (1580)",
        url: Some("https://www.gutenberg.org/ebooks/3600"),
    },
    Entry {
        title: "The Soul of Man under Socialism",
        author: "Oscar Wilde",
        document_id: "The Soul of Man under Socialism",
        citation: "The Soul of Man under Socialism (1891)",
        url: Some("https://www.gutenberg.org/ebooks/1017"),
    },
    Entry {
        title: "The Decay of Lying",
        author: "Oscar Wilde",
        document_id: "Intentions/The Decay of Lying",
        citation: "Intentions (1891)",
        url: Some("https://www.gutenberg.org/ebooks/887"),
    },
    Entry {
        title: "On the Pleasure of Hating",
        author: "William Hazlitt",
        document_id: "The Plain Speaker/On the Pleasure of Hating",
        citation: "The Plain Speaker (1826)",
        url: Some("https://www.gutenberg.org/ebooks/6716"),
    },
    Entry {
        title: "On Going a Journey",
        author: "William Hazlitt",
        document_id: "Table-Talk/On Going a Journey",
        citation: "Table Talk (1821)",
        url: Some("https://www.gutenberg.org/ebooks/6716"),
    },
    Entry {
        title: "On Running After One's Hat",
        author: "G.K. Chesterton",
        document_id: "All Things Considered/On Running After One's Hat",
        citation: "All Things Considered (1908)",
        url: Some("https://www.gutenberg.org/ebooks/11505"),
    },
    Entry {
        title: "A Defence of Nonsense",
        author: "G.K. Chesterton",
        document_id: "The Defendant/A Defence of Nonsense",
        citation: "The Defendant (1901)",
        url: Some("https://www.gutenberg.org/ebooks/12245"),
    },
    Entry {
        title: "Advice to Youth",
        author: "Mark Twain",
        document_id: "Advice to Youth",
        citation: "Advice to Youth (1882)",
        url: Some("https://www.gutenberg.org/ebooks/5835"),
    },
    Entry {
        title: "The Way to Wealth",
        author: "Benjamin Franklin",
        document_id: "The Way to Wealth",
        citation: "The Way to Wealth (1758)",
        url: Some("https://www.gutenberg.org/ebooks/14154"),
    },
    Entry {
        title: "A Dissertation upon Roast Pig",
        author: "Charles Lamb",
        document_id: "Essays of Elia/A Dissertation upon Roast Pig",
        citation: "Essays of Elia (1823)",
        url: Some("https://www.gutenberg.org/ebooks/2307"),
    },
    Entry {
        title: "On the Sufferings of the World",
        author: "Arthur Schopenhauer",
        document_id: "Studies in Pessimism/On the Sufferings of the World",
        citation: "Studies in Pessimism (1851)",
        url: Some("https://www.gutenberg.org/ebooks/10732"),
    },
    Entry {
        title: "Of Individuality",
        author: "John Stuart Mill",
        document_id: "On Liberty/Chapter III",
        citation: "On Liberty (1859)",
        url: Some("https://www.gutenberg.org/ebooks/34901"),
    },
    Entry {
        title: "The Allegory of the Cave",
        author: "Plato",
        document_id: "The Republic (Jowett)/Book VII",
        citation: "The Republic (380 BC)",
        url: Some("https://www.gutenberg.org/ebooks/1497"),
    },
];

/// Catalog entries in selection order
pub fn essay_entries() -> Vec<EssayMetadata> {
    ENTRIES
        .iter()
        .map(|e| EssayMetadata::new(e.title, e.author, e.document_id, e.citation, e.url))
        .collect()
}
