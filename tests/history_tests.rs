use notesum::history::{History, generate_title};
use notesum::summarizer::{LengthPreset, summarize};

#[test]
fn record_puts_newest_first() {
    let mut history = History::new();
    history.record("first note text", "first.");
    history.record("second note text", "second.");

    let titles: Vec<&str> = history.iter().map(|note| note.title.as_str()).collect();
    assert_eq!(titles, vec!["second note text", "first note text"]);
    assert_eq!(history.len(), 2);
}

#[test]
fn recorded_note_carries_word_counts() {
    let original = "The launch slipped by two weeks. Overall the team handled it well. \
Lunch was pizza again. The key result is a stable release.";
    let summary = summarize(original, LengthPreset::Medium);

    let mut history = History::new();
    let note = history.record(original, &summary).clone();

    assert_eq!(note.summary, "The key result is a stable release.");
    assert_eq!(note.word_count.original, 23);
    assert_eq!(note.word_count.summary, 7);
    assert_eq!(note.title, "The launch slipped by two weeks. Overall the...");
    assert_eq!(history.get(&note.id), Some(&note));
}

#[test]
fn remove_deletes_only_the_matching_note() {
    let mut history = History::new();
    let keep = history.record("keep me around", "keep.").id.clone();
    let drop = history.record("drop me please", "drop.").id.clone();

    assert!(history.remove(&drop));
    assert!(!history.remove(&drop));
    assert_eq!(history.len(), 1);
    assert!(history.get(&keep).is_some());

    history.clear();
    assert!(history.is_empty());
}

#[test]
fn notes_get_distinct_ids() {
    let mut history = History::new();
    let a = history.record("same text", "same.").id.clone();
    let b = history.record("same text", "same.").id.clone();
    assert_ne!(a, b);
}

#[test]
fn title_of_exactly_eight_words_has_no_ellipsis() {
    assert_eq!(
        generate_title("one two three four five six seven eight"),
        "one two three four five six seven eight"
    );
    assert_eq!(generate_title(""), "");
}

#[test]
fn note_serializes_camel_case() {
    let mut history = History::new();
    let note = history.record("serialize this note", "serialized.");
    let json = serde_json::to_value(note).unwrap();
    assert_eq!(json["originalText"], "serialize this note");
    assert_eq!(json["wordCount"]["original"], 3);
}
