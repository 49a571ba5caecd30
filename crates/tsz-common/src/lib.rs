//! Common types and utilities for the tsz-essentials crates.
//!
//! This crate provides foundational types used across all crates:
//! - Source spans (`TextSpan`, `TextRange`, `PositionOrRange`)
//! - Trivia scanning (whitespace and comments ahead of a token)
//! - Indentation helpers for re-indenting generated code
//! - Centralized limits and thresholds

// Span - Source location tracking (character offsets)
pub mod span;
pub use span::{PositionOrRange, TextRange, TextSpan};

// Trivia scanning
pub mod trivia;
pub use trivia::{is_line_start, leading_whitespace, skip_trivia};

// Indentation helpers
pub mod indent;
pub use indent::{indentation_of, reindent};

// Centralized limits and thresholds
pub mod limits;

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod text_tests;
