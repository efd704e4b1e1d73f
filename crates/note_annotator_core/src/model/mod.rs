//! Domain model for note annotation.
//!
//! # Responsibility
//! - Define the typed input record (`Note`) and its annotated projection.
//!
//! # Invariants
//! - A `Note` is never mutated by annotation; a new record is produced.
//! - Pass-through fields keep their input order.

pub mod note;
