//! # jsonveil
//!
//! Core library for the jsonveil obfuscation tool: JSON document I/O, the
//! redaction policy model, and the recursive tree transform that replaces
//! values (and optionally key names) with deterministic one-way hashes while
//! preserving the document's shape.
//!
//! The transform is pure and total; every failure surface lives at the I/O
//! boundary and is reported through [`JsonveilError`].

pub mod document;
pub mod error;
pub mod policy;
pub mod transform;

pub use document::{read_document, write_document};
pub use error::{JsonveilError, Result};
pub use policy::RedactionPolicy;
pub use transform::transform;
