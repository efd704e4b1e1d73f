//! Note annotation use-case.
//!
//! # Responsibility
//! - Decode a JSON note batch into typed `Note` records.
//! - Derive `word_count`, `is_action` and `processed` per note.
//! - Render annotated batches as pretty JSON.
//!
//! # Invariants
//! - Output length and order always match input length and order.
//! - Action detection is a lower-cased substring test, not whole-word.
//! - Any bad record aborts the whole batch.
//! - Log events carry counts and positions only, never note content.

use crate::error::{AnnotateError, AnnotateResult};
use crate::model::note::{AnnotatedNote, Note};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Lexical markers for task-like content.
pub const ACTION_KEYWORDS: &[&str] = &["todo", "task", "action", "must", "need to"];

static ACTION_KEYWORD_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = ACTION_KEYWORDS
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("valid action keyword regex")
});

/// Counts whitespace-separated tokens.
///
/// Runs of whitespace collapse; leading and trailing whitespace yields no
/// empty tokens.
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Returns whether lower-cased `content` contains any of `ACTION_KEYWORDS`.
pub fn is_action(content: &str) -> bool {
    ACTION_KEYWORD_RE.is_match(&content.to_lowercase())
}

/// Annotates one note without touching the input.
pub fn annotate_note(note: &Note) -> AnnotatedNote {
    AnnotatedNote::new(note, word_count(note.content()), is_action(note.content()))
}

/// Annotates a batch, preserving order.
pub fn annotate_notes(notes: &[Note]) -> Vec<AnnotatedNote> {
    notes.iter().map(annotate_note).collect()
}

/// Decodes a JSON array of note objects.
///
/// # Errors
/// - `MalformedInput` when `json` is not a JSON array.
/// - `NotAnObject` when an element is not an object.
/// - `MissingField`/`InvalidField` when `id` or `content` is unusable.
pub fn parse_notes(json: &str) -> AnnotateResult<Vec<Note>> {
    let items: Vec<Value> = serde_json::from_str(json).map_err(AnnotateError::MalformedInput)?;
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Note::from_fields(index, fields),
            _ => Err(AnnotateError::NotAnObject { index }),
        })
        .collect()
}

/// Decodes and annotates a JSON note batch.
pub fn process_notes(json: &str) -> AnnotateResult<Vec<AnnotatedNote>> {
    let notes = parse_notes(json)?;
    Ok(annotate_notes(&notes))
}

/// Renders any serializable value as JSON with 2-space indentation.
pub fn render_pretty<T: Serialize + ?Sized>(value: &T) -> AnnotateResult<String> {
    serde_json::to_string_pretty(value).map_err(AnnotateError::Render)
}

/// Annotation facade that emits diagnostic events around the pure functions.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnnotateService;

impl AnnotateService {
    pub fn new() -> Self {
        Self
    }

    /// Annotates already-decoded notes.
    pub fn annotate(&self, notes: &[Note]) -> Vec<AnnotatedNote> {
        let annotated = annotate_notes(notes);
        log_batch(&annotated);
        annotated
    }

    /// Decodes and annotates a JSON note batch.
    pub fn process_json(&self, json: &str) -> AnnotateResult<Vec<AnnotatedNote>> {
        match parse_notes(json) {
            Ok(notes) => Ok(self.annotate(&notes)),
            Err(err) => {
                warn!(
                    "event=notes_annotate module=annotator status=error reason={} input_bytes={}",
                    err.reason(),
                    json.len()
                );
                Err(err)
            }
        }
    }
}

fn log_batch(annotated: &[AnnotatedNote]) {
    for (index, note) in annotated.iter().enumerate() {
        debug!(
            "event=note_annotated module=annotator index={} word_count={} is_action={}",
            index,
            note.word_count(),
            note.is_action()
        );
    }
    let actions = annotated.iter().filter(|note| note.is_action()).count();
    info!(
        "event=notes_annotate module=annotator status=ok count={} actions={}",
        annotated.len(),
        actions
    );
}
