//! Edits for the synthetic extraction actions.
//!
//! Each variant starts from the host's edit for the origin action, an
//! ordinary "extract to function", and reshapes it:
//!
//! - `_arrow` / `_local_arrow`: the function declaration becomes a `const`
//!   arrow function, inserted above the top-level statement (or the
//!   enclosing statement) containing the selection, before the call site.
//! - `_jsx`: the function becomes a component taking its parameters as
//!   destructured props, and the call becomes `<Component a={a} />`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use tsz_common::{PositionOrRange, indentation_of, is_line_start, leading_whitespace, reindent};
use tsz_parser::{
    BindingElement, BindingName, FunctionDeclaration, NodeAccess, ParameterDeclaration,
    PropertySignature, TypeNode, find_matching_close, find_node_at_max_depth, identifier_names,
    split_top_level,
};

use crate::config::{FormatSettings, UserPreferences};
use crate::error::RefactorError;
use crate::host::RefactorHost;
use crate::refactors::{
    CONSTANT_SCOPE_ACTION, ExtractionEditScript, FileTextChanges, RefactorEditInfo,
    SyntheticAction,
};

/// Base name for extracted components.
pub const EXTRACTED_COMPONENT_NAME: &str = "ExtractedComponent";

/// A request for the edit of a refactor action, as the host receives it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefactorRequest {
    pub file_name: String,
    #[serde(default)]
    pub format: FormatSettings,
    pub position_or_range: PositionOrRange,
    pub refactor_name: String,
    pub action_name: String,
    #[serde(default)]
    pub preferences: UserPreferences,
}

pub struct FunctionExtractors<'a, H: RefactorHost + ?Sized, T: NodeAccess + ?Sized> {
    host: &'a H,
    tree: &'a T,
}

impl<'a, H: RefactorHost + ?Sized, T: NodeAccess + ?Sized> FunctionExtractors<'a, H, T> {
    pub fn new(host: &'a H, tree: &'a T) -> Self {
        FunctionExtractors { host, tree }
    }

    /// Produce the edit for a synthetic extraction action.
    ///
    /// `Ok(None)` means the action is not one of ours. Any error means the
    /// host's edit did not have the expected shape; nothing of it should be
    /// applied.
    #[tracing::instrument(level = "debug", skip_all, fields(action = %request.action_name))]
    pub fn handle_function_refactor_edits(
        &self,
        request: &RefactorRequest,
    ) -> Result<Option<RefactorEditInfo>, RefactorError> {
        let Some((origin, action)) = SyntheticAction::parse(&request.action_name) else {
            trace!("not a synthetic extraction action");
            return Ok(None);
        };

        self.rewrite(request, origin, action)
            .map(Some)
            .inspect_err(|err| debug!(%err, "keeping the host edit"))
    }

    fn rewrite(
        &self,
        request: &RefactorRequest,
        origin: &str,
        action: SyntheticAction,
    ) -> Result<RefactorEditInfo, RefactorError> {
        let RefactorEditInfo {
            edits,
            rename_filename,
            ..
        } = self.host_edit(request, origin)?;
        let Some(file) = edits.into_iter().next() else {
            return Err(RefactorError::MissingOriginEdit {
                action_name: origin.to_string(),
            });
        };
        let script = ExtractionEditScript::try_from(file.text_changes)?;

        debug!(?action, origin, "rewriting extraction edit");
        match action {
            SyntheticAction::Jsx => {
                self.extract_jsx_component(request, script, file.file_name, rename_filename)
            }
            SyntheticAction::Arrow | SyntheticAction::LocalArrow => self.extract_arrow_function(
                request,
                action,
                script,
                file.file_name,
                rename_filename,
            ),
        }
    }

    fn host_edit(
        &self,
        request: &RefactorRequest,
        action_name: &str,
    ) -> Result<RefactorEditInfo, RefactorError> {
        self.host
            .edits_for_refactor(
                &request.file_name,
                &request.format,
                request.position_or_range,
                &request.refactor_name,
                action_name,
                &request.preferences,
            )
            .filter(|edit| !edit.edits.is_empty())
            .ok_or_else(|| RefactorError::MissingOriginEdit {
                action_name: action_name.to_string(),
            })
    }

    fn extract_jsx_component(
        &self,
        request: &RefactorRequest,
        mut script: ExtractionEditScript,
        file_name: String,
        rename_filename: Option<String>,
    ) -> Result<RefactorEditInfo, RefactorError> {
        let function_text = script.body_change.new_text.as_str();
        let indent = leading_whitespace(function_text);
        let (signature, body) = function_text[indent.len()..]
            .split_once('\n')
            .unwrap_or((&function_text[indent.len()..], ""));

        let names = identifier_names(self.tree);
        let component_name = self.host.unique_name(EXTRACTED_COMPONENT_NAME, &names);
        let header = self.component_header(signature, &component_name, &request.format)?;
        let arguments = call_arguments(&script.call_site_change.new_text).ok_or(
            RefactorError::MalformedFunctionText {
                reason: "call site is not a call expression",
            },
        )?;

        let body_text = format!("{indent}{header}\n{body}");
        script.body_change.new_text = body_text;
        script.call_site_change.new_text = jsx_element(&component_name, &arguments);
        let call_site = script.call_site_change.span;
        let rename_location = call_site
            .start
            .checked_add(1)
            .ok_or(RefactorError::InvalidSpan { span: call_site })?;

        Ok(RefactorEditInfo {
            edits: vec![FileTextChanges {
                file_name,
                text_changes: script.into_changes(),
            }],
            rename_filename,
            rename_location: Some(rename_location),
        })
    }

    /// Rebuild `signature` as a component taking one destructured props
    /// parameter, and return its header up to the opening `{`.
    fn component_header(
        &self,
        signature: &str,
        component_name: &str,
        format: &FormatSettings,
    ) -> Result<String, RefactorError> {
        let original = self.host.parse_function_declaration(signature).ok_or(
            RefactorError::MalformedFunctionText {
                reason: "function signature does not parse",
            },
        )?;

        let mut elements = Vec::with_capacity(original.parameters.len());
        let mut members = Vec::with_capacity(original.parameters.len());
        for parameter in &original.parameters {
            let name = parameter
                .name
                .as_identifier()
                .ok_or(RefactorError::MalformedFunctionText {
                    reason: "parameter is not a plain identifier",
                })?;
            elements.push(BindingElement::shorthand(name));
            members.push(PropertySignature {
                name: name.to_string(),
                question_token: parameter.question_token,
                type_node: parameter.type_annotation.clone(),
            });
        }

        let mut component = FunctionDeclaration::new(component_name);
        component.parameters.push(ParameterDeclaration::new(
            BindingName::ObjectBindingPattern(elements),
            Some(TypeNode::TypeLiteral(members)),
        ));
        component.return_type = original.return_type;

        let printed = self.host.render_declaration(&component, format);
        let header = printed
            .trim_end()
            .strip_suffix('}')
            .map(str::trim_end)
            .filter(|header| header.ends_with('{'))
            .ok_or(RefactorError::MalformedFunctionText {
                reason: "printed component has no empty body",
            })?;
        Ok(header.to_string())
    }

    fn extract_arrow_function(
        &self,
        request: &RefactorRequest,
        action: SyntheticAction,
        mut script: ExtractionEditScript,
        file_name: String,
        rename_filename: Option<String>,
    ) -> Result<RefactorEditInfo, RefactorError> {
        let function_text = &script.body_change.new_text;
        let function_name = declared_function_name(function_text)
            .ok_or(RefactorError::MalformedFunctionText {
                reason: "no `function <name>(` header",
            })?
            .to_string();
        script.body_change.new_text =
            to_arrow_function(function_text).ok_or(RefactorError::MalformedFunctionText {
                reason: "unbalanced parameter list",
            })?;

        if action == SyntheticAction::LocalArrow {
            self.move_above_enclosing_statement(request, &mut script)?;
        } else if let Some(statement) =
            find_node_at_max_depth(self.tree, request.position_or_range.start(), 2)
        {
            let whitespace = leading_whitespace(self.tree.full_text(statement)).len() as u32;
            let start = self.tree.pos(statement) + whitespace.max(1) - 1;
            trace!(start, "moving arrow function above top-level statement");
            script.relocate_body(start)?;
        }

        let edits = vec![FileTextChanges {
            file_name: file_name.clone(),
            text_changes: script.into_relocated_changes(),
        }];
        let rename_location = self
            .host
            .rename_location(&edits, &file_name, &function_name, true);
        Ok(RefactorEditInfo {
            edits,
            rename_filename,
            rename_location,
        })
    }

    /// Insert the function where the host would extract a constant to, i.e.
    /// right above the statement enclosing the selection, indented to match.
    ///
    /// The host inserts a constant either at the start of the statement's
    /// line, with the indentation in its text, or right after the
    /// indentation already on that line.
    fn move_above_enclosing_statement(
        &self,
        request: &RefactorRequest,
        script: &mut ExtractionEditScript,
    ) -> Result<(), RefactorError> {
        let constant_edit = self.host_edit(request, CONSTANT_SCOPE_ACTION)?;
        let anchor = constant_edit
            .edits
            .into_iter()
            .next()
            .and_then(|file| file.text_changes.into_iter().next())
            .ok_or(RefactorError::MissingTextChanges { found: 0 })?;

        script.relocate_body(anchor.span.start)?;

        let source = self.tree.source_text();
        let at_line_start = is_line_start(source, anchor.span.start);
        let indent = if at_line_start {
            indentation_of(&anchor.new_text)
        } else {
            line_indentation(source, anchor.span.start)
        };
        let mut text = reindent(&script.body_change.new_text, indent, at_line_start);
        text.push('\n');
        if !at_line_start {
            text.push_str(indent);
        }
        trace!(
            start = anchor.span.start,
            at_line_start,
            "moving arrow function above enclosing statement"
        );
        script.body_change.new_text = text;
        Ok(())
    }
}

/// Indentation of the line containing `offset`.
fn line_indentation(source: &str, offset: u32) -> &str {
    let line_start = source
        .get(..offset as usize)
        .and_then(|before| before.rfind('\n'))
        .map_or(0, |newline| newline + 1);
    indentation_of(&source[line_start..])
}

/// The name in the first `function <name>(` of `text`.
pub(crate) fn declared_function_name(text: &str) -> Option<&str> {
    let start = text.find("function ")? + "function ".len();
    let rest = &text[start..];
    let end = rest.find(['(', '<'])?;
    let name = rest[..end].trim();
    (!name.is_empty()).then_some(name)
}

/// Rewrite a function declaration as a `const` arrow function:
/// `function foo(a, b) {` becomes `const foo = (a, b) => {`.
pub(crate) fn to_arrow_function(text: &str) -> Option<String> {
    let keyword = text.find("function ")?;
    let mut arrow = String::with_capacity(text.len() + 8);
    arrow.push_str(&text[..keyword]);
    arrow.push_str("const ");
    arrow.push_str(&text[keyword + "function ".len()..]);

    let open = arrow.find('(')?;
    arrow.replace_range(open..=open, " = (");
    let open = open + " = ".len();
    let close = find_matching_close(&arrow, open)?;

    let after_params = &arrow[close..];
    let brace = after_params
        .find("{\n")
        .or_else(|| after_params.find('{'))?;
    arrow.insert_str(close + brace, "=> ");
    Some(arrow)
}

/// Arguments of the call in a call-site change such as `newFunction(a, b);`
/// or `{newFunction(a, b)}`.
pub(crate) fn call_arguments(text: &str) -> Option<Vec<String>> {
    let mut call = text.trim();
    call = call.strip_suffix(';').unwrap_or(call).trim_end();
    if let Some(inner) = call.strip_prefix('{').and_then(|c| c.strip_suffix('}')) {
        call = inner.trim();
    }

    let open = call.find('(')?;
    let close = find_matching_close(call, open)?;
    if !call[close + 1..].trim().is_empty() {
        return None;
    }
    Some(
        split_top_level(&call[open + 1..close], b',')
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

/// `<Name a={a} b={b} />`
pub(crate) fn jsx_element(name: &str, arguments: &[String]) -> String {
    let mut element = format!("<{name} ");
    for argument in arguments {
        element.push_str(&format!("{argument}={{{argument}}} "));
    }
    element.push_str("/>");
    element
}
