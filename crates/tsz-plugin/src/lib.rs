//! Completion and refactor transformations for a TypeScript language service.
//!
//! The host language service computes completions and refactors as usual and
//! hands the results here together with a tree snapshot ([`NodeAccess`]) and
//! a type oracle ([`TypeOracle`]). Each transform returns a new result or
//! `None`, meaning the host's own result stands.
//!
//! - Object literal completions: value snippets for property names, and
//!   method snippet placement (`completions`)
//! - Extraction refactors: arrow function and JSX component variants of
//!   "extract to function" (`refactors`)
//!
//! [`NodeAccess`]: tsz_parser::NodeAccess
//! [`TypeOracle`]: tsz_solver::TypeOracle

// Settings and host preferences
pub mod config;
pub use config::{
    ConfigError, FormatSettings, KeepOriginal, PluginConfig, QuotePreference, UserPreferences,
};

pub mod error;
pub use error::RefactorError;

// Completions
pub mod completions;
pub use completions::{
    CompletionEntry, CompletionEntryLabelDetails, ObjectLiteralCompletions,
    augment_object_literal_completions, is_object_literal_method_snippet, resolve_quote,
};

// Refactors
pub mod refactors;
pub use refactors::{
    ApplicableRefactorInfo, ExtractionEditScript, FileTextChanges, FunctionExtractors,
    RefactorActionInfo, RefactorEditInfo, RefactorRequest, SyntheticAction, TextChange,
    apply_text_changes, is_whole_jsx_element, process_applicable_refactors,
};

// Host services
pub mod host;
pub use host::RefactorHost;

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod config_tests;

#[cfg(test)]
#[path = "tests/completions_tests.rs"]
mod completions_tests;

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod catalog_tests;

#[cfg(test)]
#[path = "tests/edit_script_tests.rs"]
mod edit_script_tests;

#[cfg(test)]
#[path = "tests/function_extractors_tests.rs"]
mod function_extractors_tests;
