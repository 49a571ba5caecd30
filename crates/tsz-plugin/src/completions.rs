//! Completion entries and helpers shared by the completion transforms.
//!
//! [`CompletionEntry`] mirrors the host's completion entry protocol. The
//! order of a completion list is its presentation order, so transforms
//! splice entries in place and never re-sort.

use serde::{Deserialize, Serialize};
use tsz_parser::{NodeAccess, SyntaxKind};

use crate::config::{QuotePreference, UserPreferences};

pub mod object_literal;
pub use object_literal::{ObjectLiteralCompletions, augment_object_literal_completions};

/// A completion entry as exchanged with the host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntry {
    pub name: String,
    /// Element kind (`property`, `method`, ...).
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind_modifiers: Option<String>,
    /// Opaque ordering key; entries with equal keys keep list order.
    pub sort_text: String,
    /// Text to insert, if different from `name`. For snippets this may
    /// contain tab stops like `$1` and the final stop `$0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_snippet: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_details: Option<CompletionEntryLabelDetails>,
}

impl CompletionEntry {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        sort_text: impl Into<String>,
    ) -> Self {
        CompletionEntry {
            name: name.into(),
            kind: kind.into(),
            sort_text: sort_text.into(),
            ..CompletionEntry::default()
        }
    }

    /// The label detail shown next to the name, if any.
    pub fn detail(&self) -> Option<&str> {
        self.label_details.as_ref()?.detail.as_deref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEntryLabelDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Whether `entry` is a host-generated method snippet (`name(args) { }`).
///
/// Those carry the parameter list as label detail: the detail starts with
/// `(` and its first line ends with `)`.
pub fn is_object_literal_method_snippet(entry: &CompletionEntry) -> bool {
    entry.detail().is_some_and(|detail| {
        detail.starts_with('(')
            && detail
                .split('\n')
                .next()
                .is_some_and(|line| line.trim_end().ends_with(')'))
    })
}

/// The quote character for generated string snippets.
///
/// An explicit preference wins. Otherwise the first string literal in the
/// file decides, and a file without string literals gets double quotes.
pub fn resolve_quote<T: NodeAccess + ?Sized>(tree: &T, preferences: &UserPreferences) -> char {
    match preferences.quote_preference {
        QuotePreference::Single => '\'',
        QuotePreference::Double => '"',
        QuotePreference::Auto => first_string_literal_quote(tree).unwrap_or('"'),
    }
}

fn first_string_literal_quote<T: NodeAccess + ?Sized>(tree: &T) -> Option<char> {
    let mut stack = vec![tree.root()];
    while let Some(idx) = stack.pop() {
        if tree.kind(idx) == SyntaxKind::StringLiteral {
            return match tree.node_text(idx).chars().next() {
                Some('\'') => Some('\''),
                _ => Some('"'),
            };
        }
        stack.extend(tree.children(idx).iter().rev().copied());
    }
    None
}
