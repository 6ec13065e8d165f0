// src/specs/mod.rs
//! # Extraction "specs"
//!
//! Each spec knows the shape of one kind of source document and turns it into raw
//! labels. Specs only read: normalizing, counting and storing happen in higher
//! layers (`core::sanitize`, `stats`, `store`, wired together by `runner`).
//!
//! ## Conventions
//! - Missing or malformed markup produces an empty result, never an error.
//! - The only failure a spec reports is being unable to read its input.
//! - Output keeps document order and duplicates.
//!
//! ## Current specs
//! - `colors` – the weekly colors table (`<td>DAY</td>` followed by
//!   `<td>COLOR, COLOR, …</td>`).
pub mod colors;
