//! In-memory history of past summaries, newest first.
//!
//! Nothing here is persisted; a `History` lives as long as its owner.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::text::count_words;

const TITLE_WORDS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub original: usize,
    pub summary: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub original_text: String,
    pub summary: String,
    pub word_count: WordCount,
    pub timestamp: DateTime<Utc>,
}

impl Note {
    #[must_use]
    pub fn new(original_text: &str, summary: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: generate_title(original_text),
            original_text: original_text.to_string(),
            summary: summary.to_string(),
            word_count: WordCount {
                original: count_words(original_text),
                summary: count_words(summary),
            },
            timestamp: Utc::now(),
        }
    }
}

/// First eight words of `text`, with `...` when there are more.
///
/// ```
/// use notesum::history::generate_title;
///
/// assert_eq!(generate_title("  Quarterly review notes "), "Quarterly review notes");
/// assert_eq!(
///     generate_title("one two three four five six seven eight nine"),
///     "one two three four five six seven eight..."
/// );
/// ```
#[must_use]
pub fn generate_title(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut title = words
        .iter()
        .take(TITLE_WORDS)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    if words.len() > TITLE_WORDS {
        title.push_str("...");
    }
    title
}

#[derive(Debug, Default, Clone)]
pub struct History {
    notes: Vec<Note>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a summary at the front of the history.
    pub fn record(&mut self, original_text: &str, summary: &str) -> &Note {
        self.notes.insert(0, Note::new(original_text, summary));
        &self.notes[0]
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Returns `true` when a note was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        self.notes.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }
}
