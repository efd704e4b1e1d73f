//! Note domain model.
//!
//! # Responsibility
//! - Define the typed input record over the ordered input object.
//! - Define the annotated output record with strongly-typed derived fields.
//!
//! # Invariants
//! - `id` and `content` are always strings and mirror the same keys in `fields`.
//! - Serialized notes keep every input key at its input position.
//! - A derived field shadowing an input key keeps that key's position.

use crate::error::{AnnotateError, AnnotateResult};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Field name of the opaque note identifier.
pub const FIELD_ID: &str = "id";
/// Field name of the free-form note text.
pub const FIELD_CONTENT: &str = "content";
pub const FIELD_WORD_COUNT: &str = "word_count";
pub const FIELD_IS_ACTION: &str = "is_action";
pub const FIELD_PROCESSED: &str = "processed";

/// Input note record.
///
/// Serializes as the original object, in input key order.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    id: String,
    content: String,
    fields: Map<String, Value>,
}

impl Note {
    /// Creates a note holding only `id` and `content`.
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        let id = id.into();
        let content = content.into();
        let mut fields = Map::new();
        fields.insert(FIELD_ID.to_string(), Value::String(id.clone()));
        fields.insert(FIELD_CONTENT.to_string(), Value::String(content.clone()));
        Self {
            id,
            content,
            fields,
        }
    }

    /// Builds a note from one decoded JSON object.
    ///
    /// Both `id` and `content` are required strings; a note with a numeric
    /// or absent `id` is rejected, not passed through. `index` is the batch
    /// position reported in errors.
    ///
    /// # Errors
    /// - `MissingField` when `id` or `content` is absent.
    /// - `InvalidField` when `id` or `content` is not a string.
    pub fn from_fields(index: usize, fields: Map<String, Value>) -> AnnotateResult<Self> {
        let id = string_field(&fields, index, FIELD_ID)?.to_owned();
        let content = string_field(&fields, index, FIELD_CONTENT)?.to_owned();
        Ok(Self {
            id,
            content,
            fields,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns any input field by name, `id` and `content` included.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// All input fields, in input order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

fn string_field<'a>(
    fields: &'a Map<String, Value>,
    index: usize,
    field: &'static str,
) -> AnnotateResult<&'a str> {
    match fields.get(field) {
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(AnnotateError::InvalidField { index, field }),
        None => Err(AnnotateError::MissingField { index, field }),
    }
}

/// Annotated projection of one input note.
///
/// Serializes flat: the original object with `word_count`, `is_action` and
/// `processed` overwritten in place or appended.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedNote {
    original: Note,
    word_count: usize,
    is_action: bool,
}

impl AnnotatedNote {
    /// Wraps a copy of `note` with derived values.
    pub fn new(note: &Note, word_count: usize, is_action: bool) -> Self {
        Self {
            original: note.clone(),
            word_count,
            is_action,
        }
    }

    /// The unmodified input note.
    pub fn original(&self) -> &Note {
        &self.original
    }

    pub fn id(&self) -> &str {
        self.original.id()
    }

    pub fn content(&self) -> &str {
        self.original.content()
    }

    /// Count of whitespace-separated tokens in `content`.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Whether `content` contains an action keyword.
    pub fn is_action(&self) -> bool {
        self.is_action
    }

    /// Always `true` once a note has been annotated.
    pub fn processed(&self) -> bool {
        true
    }

    /// Output object: input fields merged with the derived fields.
    pub fn to_fields(&self) -> Map<String, Value> {
        let mut fields = self.original.fields.clone();
        // IndexMap insert keeps an existing key's slot and appends new keys.
        fields.insert(FIELD_WORD_COUNT.to_string(), Value::from(self.word_count));
        fields.insert(FIELD_IS_ACTION.to_string(), Value::Bool(self.is_action));
        fields.insert(FIELD_PROCESSED.to_string(), Value::Bool(self.processed()));
        fields
    }
}

impl Serialize for AnnotatedNote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_fields().serialize(serializer)
    }
}
