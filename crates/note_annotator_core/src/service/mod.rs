//! Core use-case services.
//!
//! # Responsibility
//! - Turn decoded note batches into annotated batches.
//! - Keep CLI layers decoupled from decoding and derivation details.

pub mod annotate_service;
