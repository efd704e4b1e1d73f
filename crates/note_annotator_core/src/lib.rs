//! Core annotation logic for note batches.
//! This crate is the single source of truth for derived-field rules.

pub mod error;
pub mod logging;
pub mod model;
pub mod service;

pub use error::{AnnotateError, AnnotateResult};
pub use logging::{default_log_dir, default_log_level, init_logging};
pub use model::note::{AnnotatedNote, Note};
pub use service::annotate_service::{
    annotate_note, annotate_notes, is_action, parse_notes, process_notes, render_pretty,
    word_count, AnnotateService, ACTION_KEYWORDS,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
