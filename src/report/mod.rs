//! Report writers for the license export.
//!
//! - [`csv`] — the semicolon-delimited per-variant report files; the actual
//!   deliverable, byte-stable across runs.
//! - [`terminal`] — status tables for CI logs; respects `--verbose` / `--quiet`
//!   and never affects the CSV bytes.

pub mod csv;
pub mod terminal;
