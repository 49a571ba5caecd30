//! Errors raised while rewriting a refactor edit.
//!
//! Every variant describes a host edit that does not have the shape the
//! rewriter relies on. Callers treat any of them as "fall back to the host's
//! own edit"; no partially rewritten edit is ever returned alongside one.

use tsz_common::TextSpan;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefactorError {
    /// The host returned no edit (or an edit without file changes) for the
    /// action the rewrite is based on.
    MissingOriginEdit { action_name: String },
    /// The edit has fewer than the two text changes every extraction makes.
    MissingTextChanges { found: usize },
    /// A relocated insertion would land inside the call-site replacement.
    OverlappingChanges { insertion: u32, call_site: TextSpan },
    /// A change chosen for relocation replaces text instead of inserting it.
    RelocatedReplacement { span: TextSpan },
    /// A span whose end does not fit in a `u32` offset.
    InvalidSpan { span: TextSpan },
    /// The extracted function text could not be understood.
    MalformedFunctionText { reason: &'static str },
}

impl std::fmt::Display for RefactorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefactorError::MissingOriginEdit { action_name } => {
                write!(f, "host returned no edit for refactor action '{action_name}'")
            }
            RefactorError::MissingTextChanges { found } => write!(
                f,
                "extraction edit needs at least 2 text changes, found {found}"
            ),
            RefactorError::OverlappingChanges {
                insertion,
                call_site,
            } => write!(
                f,
                "insertion at {insertion} falls inside the call-site change {}..{}",
                call_site.start,
                call_site.end()
            ),
            RefactorError::RelocatedReplacement { span } => write!(
                f,
                "cannot relocate a change that replaces {} characters at {}",
                span.length, span.start
            ),
            RefactorError::InvalidSpan { span } => write!(
                f,
                "span of {} characters at {} ends past the largest offset",
                span.length, span.start
            ),
            RefactorError::MalformedFunctionText { reason } => {
                write!(f, "malformed extracted function text: {reason}")
            }
        }
    }
}

impl std::error::Error for RefactorError {}
