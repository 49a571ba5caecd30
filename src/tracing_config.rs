//! Tracing configuration.
//!
//! Supports three output formats controlled by `TSZ_ESSENTIALS_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `tree`: Hierarchical indented output via `tracing-tree`, which shows
//!   each request span with the decisions taken inside it
//! - `json`: One JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Why did a completion list come back unchanged?
//! TSZ_ESSENTIALS_LOG=tsz_plugin=trace TSZ_ESSENTIALS_LOG_FORMAT=tree tsserver
//!
//! # Refactor rewrites only
//! TSZ_ESSENTIALS_LOG="tsz_plugin::refactors=debug" tsserver
//! ```
//!
//! The subscriber is only initialised when `TSZ_ESSENTIALS_LOG` (or
//! `RUST_LOG`) is set, so there is zero overhead in normal use.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_VAR: &str = "TSZ_ESSENTIALS_LOG";
const LOG_FORMAT_VAR: &str = "TSZ_ESSENTIALS_LOG_FORMAT";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a format name; anything unrecognised is `Text`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var(LOG_FORMAT_VAR).unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `TSZ_ESSENTIALS_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    match std::env::var(LOG_VAR) {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `TSZ_ESSENTIALS_LOG` nor `RUST_LOG` is set. A
/// subscriber installed earlier (by the host or a previous call) is kept.
///
/// All output goes to stderr; the host's protocol traffic owns stdout.
pub fn init_tracing() {
    let has_own_log = std::env::var(LOG_VAR).is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_own_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    let installed = match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree_layer).try_init()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);
            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
