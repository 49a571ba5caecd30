//! Refactor edits: text changes per file, and the extraction edit layout.

use serde::{Deserialize, Serialize};
use tsz_common::TextSpan;

use crate::error::RefactorError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextChange {
    pub span: TextSpan,
    pub new_text: String,
}

impl TextChange {
    pub fn new(span: TextSpan, new_text: impl Into<String>) -> Self {
        TextChange {
            span,
            new_text: new_text.into(),
        }
    }

    /// A pure insertion at `start`.
    pub fn insertion(start: u32, new_text: impl Into<String>) -> Self {
        Self::new(TextSpan::at(start), new_text)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTextChanges {
    pub file_name: String,
    pub text_changes: Vec<TextChange>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefactorEditInfo {
    pub edits: Vec<FileTextChanges>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rename_filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rename_location: Option<u32>,
}

/// Apply `changes` to `text`.
///
/// Changes must not overlap. They are applied by position; insertions at
/// the same offset keep their list order. Returns `None` when a change is
/// out of bounds, splits a character or overlaps another change.
pub fn apply_text_changes(text: &str, changes: &[TextChange]) -> Option<String> {
    let mut ordered: Vec<&TextChange> = changes.iter().collect();
    ordered.sort_by_key(|change| change.span.start);

    let mut result = String::with_capacity(text.len());
    let mut cursor = 0usize;
    for change in ordered {
        let start = change.span.start as usize;
        let end = change.span.checked_end()? as usize;
        if start < cursor {
            return None;
        }
        if !text.is_char_boundary(end) {
            return None;
        }
        result.push_str(text.get(cursor..start)?);
        result.push_str(&change.new_text);
        cursor = end;
    }
    result.push_str(text.get(cursor..)?);
    Some(result)
}

/// Locate `name` in the edited file, in post-edit offsets.
///
/// Changes are walked in order while accumulating how much earlier changes
/// shifted the text. A change mentions `name` when its text starts with it
/// or contains it right after a space, `.` or `"`. With `prefer_last` the
/// last mention is returned, otherwise the first.
pub fn rename_location(
    edits: &[FileTextChanges],
    file_name: &str,
    name: &str,
    prefer_last: bool,
) -> Option<u32> {
    let mut delta: i64 = 0;
    let mut last = None;
    for file in edits.iter().filter(|file| file.file_name == file_name) {
        for change in &file.text_changes {
            if let Some(index) = index_in_text_change(&change.new_text, name) {
                let location = i64::from(change.span.start) + delta + index as i64;
                let location = u32::try_from(location).ok()?;
                if !prefer_last {
                    return Some(location);
                }
                last = Some(location);
            }
            delta += change.new_text.len() as i64 - i64::from(change.span.length);
        }
    }
    last
}

fn index_in_text_change(text: &str, name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    if text.starts_with(name) {
        return Some(0);
    }
    [' ', '.', '"']
        .into_iter()
        .find_map(|prefix| text.find(&format!("{prefix}{name}")))
        .map(|idx| idx + 1)
}

/// The text changes of an extract-function edit, by role.
///
/// The host emits any number of leading changes (import insertions, for
/// instance), then the change replacing the selection with a call, then the
/// insertion of the extracted function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractionEditScript {
    pub leading_changes: Vec<TextChange>,
    pub call_site_change: TextChange,
    pub body_change: TextChange,
}

impl TryFrom<Vec<TextChange>> for ExtractionEditScript {
    type Error = RefactorError;

    fn try_from(mut changes: Vec<TextChange>) -> Result<Self, Self::Error> {
        if let Some(change) = changes.iter().find(|change| change.span.checked_end().is_none()) {
            return Err(RefactorError::InvalidSpan { span: change.span });
        }
        let found = changes.len();
        let (Some(body_change), Some(call_site_change)) = (changes.pop(), changes.pop()) else {
            return Err(RefactorError::MissingTextChanges { found });
        };
        Ok(ExtractionEditScript {
            leading_changes: changes,
            call_site_change,
            body_change,
        })
    }
}

impl ExtractionEditScript {
    /// Move the function insertion to `start`.
    ///
    /// Only a pure insertion can move, and never into the middle of the text
    /// the call-site change replaces.
    pub fn relocate_body(&mut self, start: u32) -> Result<(), RefactorError> {
        if self.call_site_change.span.checked_end().is_none() {
            return Err(RefactorError::InvalidSpan {
                span: self.call_site_change.span,
            });
        }
        if !self.body_change.span.is_empty() {
            return Err(RefactorError::RelocatedReplacement {
                span: self.body_change.span,
            });
        }
        if self.call_site_change.span.strictly_contains(start) {
            return Err(RefactorError::OverlappingChanges {
                insertion: start,
                call_site: self.call_site_change.span,
            });
        }
        self.body_change.span = TextSpan::at(start);
        Ok(())
    }

    /// Changes in host order: leading, call site, function.
    pub fn into_changes(self) -> Vec<TextChange> {
        let mut changes = self.leading_changes;
        changes.push(self.call_site_change);
        changes.push(self.body_change);
        changes
    }

    /// Changes with the function emitted before the call site, for a
    /// function relocated above the selection.
    pub fn into_relocated_changes(self) -> Vec<TextChange> {
        let mut changes = self.leading_changes;
        changes.push(self.body_change);
        changes.push(self.call_site_change);
        changes
    }
}
