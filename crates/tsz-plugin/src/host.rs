//! The `RefactorHost` trait: what the edit rewriter asks of the host.

use rustc_hash::FxHashSet;
use tsz_common::PositionOrRange;
use tsz_common::limits::MAX_UNIQUE_NAME_ATTEMPTS;
use tsz_parser::{DeclarationPrinter, FunctionDeclaration, parse_function_signature};

use crate::config::{FormatSettings, UserPreferences};
use crate::refactors::{FileTextChanges, RefactorEditInfo, rename_location};

pub trait RefactorHost {
    /// The host's own edit for a refactor action.
    fn edits_for_refactor(
        &self,
        file_name: &str,
        format: &FormatSettings,
        position_or_range: PositionOrRange,
        refactor_name: &str,
        action_name: &str,
        preferences: &UserPreferences,
    ) -> Option<RefactorEditInfo>;

    /// Where the editor should start renaming `name` after applying `edits`.
    fn rename_location(
        &self,
        edits: &[FileTextChanges],
        file_name: &str,
        name: &str,
        prefer_last: bool,
    ) -> Option<u32> {
        rename_location(edits, file_name, name, prefer_last)
    }

    /// `base`, or `base_1`, `base_2`, ... if it is already used in the file.
    fn unique_name(&self, base: &str, names_in_file: &FxHashSet<&str>) -> String {
        if !names_in_file.contains(base) {
            return base.to_string();
        }
        let mut candidate = base.to_string();
        for attempt in 1..=MAX_UNIQUE_NAME_ATTEMPTS {
            candidate = format!("{base}_{attempt}");
            if !names_in_file.contains(candidate.as_str()) {
                break;
            }
        }
        candidate
    }

    /// Parse a standalone function declaration header.
    fn parse_function_declaration(&self, text: &str) -> Option<FunctionDeclaration> {
        parse_function_signature(text)
    }

    /// Print a declaration with the host's formatting.
    fn render_declaration(&self, decl: &FunctionDeclaration, format: &FormatSettings) -> String {
        DeclarationPrinter::new(format.indent_size, format.convert_tabs_to_spaces)
            .print_function_declaration(decl)
    }
}
