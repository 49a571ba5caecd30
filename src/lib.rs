//! tsz-essentials: object literal completions and extraction refactors for
//! a TypeScript language service.
//!
//! This crate re-exports the engine crates and adds the process-level
//! pieces a host needs: tracing setup and settings-file loading.
//!
//! - `tsz_common`: spans, trivia and indentation helpers, limits
//! - `tsz_parser`: tree snapshots, position lookups, declaration printing
//! - `tsz_solver`: the type oracle and type-shape classification
//! - `tsz_plugin`: the completion and refactor transforms

pub use tsz_common as common;
pub use tsz_parser as parser;
pub use tsz_plugin as plugin;
pub use tsz_solver as solver;

pub use tsz_plugin::{
    ApplicableRefactorInfo, CompletionEntry, FunctionExtractors, PluginConfig, RefactorEditInfo,
    RefactorError, RefactorHost, RefactorRequest, UserPreferences,
    augment_object_literal_completions, process_applicable_refactors,
};

// Settings files
pub mod config;
pub use config::{load_config, parse_config};

// Tracing - Only active when TSZ_ESSENTIALS_LOG or RUST_LOG is set
pub mod tracing_config;
pub use tracing_config::init_tracing;

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;
