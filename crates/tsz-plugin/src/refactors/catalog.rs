//! Adds the synthetic extraction actions to the host's refactor list.

use tracing::debug;
use tsz_common::{PositionOrRange, TextRange};
use tsz_parser::{
    NodeAccess, SyntaxKind, find_node_at_exact_offset, find_node_at_offset, skip_identifier,
};

use crate::refactors::{
    ApplicableRefactorInfo, EXTRACT_JSX_KIND, FUNCTION_SCOPE_PREFIX,
    GLOBAL_FUNCTION_DESCRIPTIONS, INNER_FUNCTION_DESCRIPTION_PREFIX, RefactorActionInfo,
    SyntheticAction,
};

/// Extend the host's "extract function" refactor with arrow function and
/// JSX component variants.
///
/// Returns a new refactor info; `None` only when the host offered none.
/// A selection covering exactly one JSX element replaces the function
/// extractions with a single JSX component extraction. Otherwise the arrow
/// variants are appended after the host's actions.
pub fn process_applicable_refactors<T: NodeAccess + ?Sized>(
    refactor: Option<&ApplicableRefactorInfo>,
    position_or_range: PositionOrRange,
    tree: &T,
) -> Option<ApplicableRefactorInfo> {
    let refactor = refactor?;
    let mut result = refactor.clone();

    let applicable: Vec<&RefactorActionInfo> = refactor
        .actions
        .iter()
        .filter(|action| action.not_applicable_reason.is_none())
        .collect();
    let Some(first) = applicable.first() else {
        return Some(result);
    };
    let kind = first.kind.clone();

    let mut arrow_actions = Vec::new();
    if let Some(inner) = applicable
        .iter()
        .find(|action| action.description.starts_with(INNER_FUNCTION_DESCRIPTION_PREFIX))
    {
        arrow_actions.push(synthetic_action(
            &inner.name,
            SyntheticAction::LocalArrow,
            kind.clone(),
        ));
    }

    let global = applicable
        .iter()
        .find(|action| GLOBAL_FUNCTION_DESCRIPTIONS.contains(&action.description.as_str()));
    if let Some(global) = global {
        arrow_actions.push(synthetic_action(&global.name, SyntheticAction::Arrow, kind.clone()));

        let whole_jsx = position_or_range
            .as_range()
            .is_some_and(|range| is_whole_jsx_element(tree, range));
        if whole_jsx {
            debug!(origin = %global.name, "selection is a whole JSX element");
            result
                .actions
                .retain(|action| !action.name.starts_with(FUNCTION_SCOPE_PREFIX));
            result.actions.push(synthetic_action(
                &global.name,
                SyntheticAction::Jsx,
                Some(EXTRACT_JSX_KIND.to_string()),
            ));
            return Some(result);
        }
    }

    debug!(added = arrow_actions.len(), "adding arrow function extractions");
    result.actions.extend(arrow_actions);
    Some(result)
}

fn synthetic_action(
    origin: &str,
    action: SyntheticAction,
    kind: Option<String>,
) -> RefactorActionInfo {
    RefactorActionInfo {
        name: action.action_name(origin),
        description: action.description().to_string(),
        kind,
        not_applicable_reason: None,
    }
}

/// Whether `range` covers exactly one JSX element: a self-closing element,
/// or an opening tag through its own closing tag.
pub fn is_whole_jsx_element<T: NodeAccess + ?Sized>(tree: &T, range: TextRange) -> bool {
    if range.is_empty() {
        return false;
    }
    let (Some(first), Some(last)) = (
        find_node_at_offset(tree, range.pos),
        find_node_at_exact_offset(tree, range.end),
    ) else {
        return false;
    };
    let first = skip_identifier(tree, first);
    if tree.start(first) != range.pos {
        return false;
    }

    match (tree.kind(first), tree.kind(last)) {
        (SyntaxKind::JsxSelfClosingElement, _) => first == last && tree.end(first) == range.end,
        (SyntaxKind::JsxOpeningElement, SyntaxKind::JsxClosingElement) => {
            let pairs_with_first = tree.parent(last).is_some_and(|element| {
                tree.kind(element) == SyntaxKind::JsxElement
                    && tree.children(element).first() == Some(&first)
            });
            pairs_with_first && tree.end(last) == range.end
        }
        _ => false,
    }
}
