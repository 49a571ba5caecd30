//! Refactor actions and the extract-function variants built on them.
//!
//! The host offers "extract to function" actions; this module adds arrow
//! function and JSX component variants. A variant's action name is its
//! origin action's name plus a fixed suffix, so the edit step can recover
//! the origin action and ask the host for its edit.

use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod edit_script;
pub mod function_extractors;

pub use catalog::{is_whole_jsx_element, process_applicable_refactors};
pub use edit_script::{
    ExtractionEditScript, FileTextChanges, RefactorEditInfo, TextChange, apply_text_changes,
    rename_location,
};
pub use function_extractors::{FunctionExtractors, RefactorRequest};

/// Kind reported for the JSX component extraction action.
pub const EXTRACT_JSX_KIND: &str = "refactor.extract.jsx";

/// Name prefix of the host's "extract to function in scope N" actions.
pub const FUNCTION_SCOPE_PREFIX: &str = "function_scope";

/// The host's "extract to constant in the enclosing scope" action.
pub const CONSTANT_SCOPE_ACTION: &str = "constant_scope_0";

/// Description prefix of the host's inner-scope extraction.
pub const INNER_FUNCTION_DESCRIPTION_PREFIX: &str = "Extract to inner function in";

/// Descriptions of the host's outermost-scope extraction. Which one the host
/// uses depends on whether the file is a module.
pub const GLOBAL_FUNCTION_DESCRIPTIONS: [&str; 2] = [
    "Extract to function in global scope",
    "Extract to function in module scope",
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefactorActionInfo {
    /// Key the host resolves back to an edit-producing routine.
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_applicable_reason: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicableRefactorInfo {
    pub name: String,
    pub description: String,
    pub actions: Vec<RefactorActionInfo>,
}

/// An extraction variant added on top of a host action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SyntheticAction {
    /// Arrow function at module scope.
    Arrow,
    /// Arrow function just above the enclosing statement.
    LocalArrow,
    /// JSX component at module scope.
    Jsx,
}

impl SyntheticAction {
    pub const fn suffix(self) -> &'static str {
        match self {
            SyntheticAction::Arrow => "_arrow",
            SyntheticAction::LocalArrow => "_local_arrow",
            SyntheticAction::Jsx => "_jsx",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            SyntheticAction::Arrow => "Extract to arrow function in global scope above",
            SyntheticAction::LocalArrow => "Extract to arrow function above",
            SyntheticAction::Jsx => "Extract to JSX component",
        }
    }

    /// Action name for this variant of `origin`.
    pub fn action_name(self, origin: &str) -> String {
        format!("{origin}{}", self.suffix())
    }

    /// Split a variant action name into its origin action name and variant.
    ///
    /// `_local_arrow` is tried before `_arrow`, which it also ends with.
    pub fn parse(action_name: &str) -> Option<(&str, SyntheticAction)> {
        [
            SyntheticAction::LocalArrow,
            SyntheticAction::Arrow,
            SyntheticAction::Jsx,
        ]
        .into_iter()
        .find_map(|action| {
            action_name
                .strip_suffix(action.suffix())
                .map(|origin| (origin, action))
        })
    }
}
