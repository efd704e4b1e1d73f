//! Error taxonomy for note annotation.
//!
//! # Invariants
//! - Every error aborts the whole batch; there is no partial-result policy.
//! - `index` always refers to the zero-based position in the input array.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AnnotateResult<T> = Result<T, AnnotateError>;

/// Failure raised while decoding, annotating or rendering a note batch.
#[derive(Debug)]
pub enum AnnotateError {
    /// Input is not well-formed JSON or not a top-level array.
    MalformedInput(serde_json::Error),
    /// Array element is not a JSON object.
    NotAnObject { index: usize },
    /// Required note field is absent.
    MissingField { index: usize, field: &'static str },
    /// Required note field is present but not a string.
    InvalidField { index: usize, field: &'static str },
    /// Output serialization failed.
    Render(serde_json::Error),
}

impl AnnotateError {
    /// Stable short reason code used in log events.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "malformed_input",
            Self::NotAnObject { .. } => "not_an_object",
            Self::MissingField { .. } => "missing_field",
            Self::InvalidField { .. } => "invalid_field",
            Self::Render(_) => "render",
        }
    }
}

impl Display for AnnotateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedInput(err) => write!(f, "malformed note input: {err}"),
            Self::NotAnObject { index } => write!(f, "note #{index} is not an object"),
            Self::MissingField { index, field } => {
                write!(f, "note #{index} is missing required field `{field}`")
            }
            Self::InvalidField { index, field } => {
                write!(f, "note #{index} field `{field}` must be a string")
            }
            Self::Render(err) => write!(f, "failed to render notes: {err}"),
        }
    }
}

impl Error for AnnotateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedInput(err) | Self::Render(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AnnotateError;
    use std::error::Error;

    #[test]
    fn display_names_index_and_field() {
        let err = AnnotateError::MissingField {
            index: 2,
            field: "content",
        };
        assert_eq!(
            err.to_string(),
            "note #2 is missing required field `content`"
        );
        assert_eq!(err.reason(), "missing_field");
        assert!(err.source().is_none());
    }

    #[test]
    fn malformed_input_exposes_json_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err = AnnotateError::MalformedInput(json_err);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("malformed note input"));
    }
}
