//! Extraction rewrites against a host that replays canned edits.

use std::cell::RefCell;

use rustc_hash::FxHashMap;
use tsz_common::{PositionOrRange, TextRange, TextSpan};
use tsz_parser::{NodeArena, SyntaxKind};
use tsz_plugin::{
    FileTextChanges, FormatSettings, FunctionExtractors, RefactorEditInfo, RefactorError,
    RefactorHost, RefactorRequest, TextChange, UserPreferences, apply_text_changes,
};

const FILE: &str = "/src/app.tsx";

#[derive(Default)]
struct ReplayHost {
    edits: FxHashMap<String, RefactorEditInfo>,
    requested: RefCell<Vec<String>>,
}

impl ReplayHost {
    fn with_edit(mut self, action_name: &str, changes: Vec<TextChange>) -> Self {
        self.edits.insert(
            action_name.to_string(),
            RefactorEditInfo {
                edits: vec![FileTextChanges {
                    file_name: FILE.to_string(),
                    text_changes: changes,
                }],
                rename_filename: Some(FILE.to_string()),
                rename_location: Some(0),
            },
        );
        self
    }
}

impl RefactorHost for ReplayHost {
    fn edits_for_refactor(
        &self,
        file_name: &str,
        _format: &FormatSettings,
        _position_or_range: PositionOrRange,
        _refactor_name: &str,
        action_name: &str,
        _preferences: &UserPreferences,
    ) -> Option<RefactorEditInfo> {
        assert_eq!(file_name, FILE);
        self.requested.borrow_mut().push(action_name.to_string());
        self.edits.get(action_name).cloned()
    }
}

fn offset(source: &str, needle: &str) -> u32 {
    source
        .find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found in source")) as u32
}

fn request(action_name: &str, selection: TextRange) -> RefactorRequest {
    RefactorRequest {
        file_name: FILE.to_string(),
        format: FormatSettings::default(),
        position_or_range: selection.into(),
        refactor_name: "Extract Symbol".to_string(),
        action_name: action_name.to_string(),
        preferences: UserPreferences::default(),
    }
}

/// A tree whose statements are the source's lines, each with one
/// identifier child per name in `names`.
fn statements_tree(source: &str, names: &[&str]) -> NodeArena {
    let mut arena = NodeArena::new(source);
    let mut statements = Vec::new();
    let mut pos = 0u32;
    for line in source.split_inclusive('\n') {
        let end = pos + line.trim_end().len() as u32;
        let children: Vec<_> = names
            .iter()
            .filter_map(|name| {
                let start = pos + line.find(name)? as u32;
                Some(arena.add_token(SyntaxKind::Identifier, start, start + name.len() as u32))
            })
            .collect();
        // statements start after the previous statement's end, so every
        // line but the first carries the preceding newline as trivia
        let full_start = pos.saturating_sub(1);
        statements.push(arena.add_node(SyntaxKind::VariableStatement, full_start, end, &children));
        pos += line.len() as u32;
    }
    arena.add_source_file(&statements);
    arena
}

fn edited_text(source: &str, info: &RefactorEditInfo) -> String {
    assert_eq!(info.edits.len(), 1);
    apply_text_changes(source, &info.edits[0].text_changes).expect("non-overlapping changes")
}

#[test]
fn test_arrow_function_goes_above_top_level_statement() {
    let source = "const a = 1;\nconst b = 2;\nconst total = a + b;\n";
    let tree = statements_tree(source, &[]);
    let selection = TextRange::new(offset(source, "a + b"), offset(source, "a + b") + 5);
    assert_eq!(&source[selection.pos as usize..selection.end as usize], "a + b");

    let host = ReplayHost::default().with_edit(
        "function_scope_0",
        vec![
            TextChange::new(selection.to_span(), "newFunction()"),
            TextChange::insertion(
                source.len() as u32,
                "\nfunction newFunction() {\n    return a + b;\n}\n",
            ),
        ],
    );

    let info = FunctionExtractors::new(&host, &tree)
        .handle_function_refactor_edits(&request("function_scope_0_arrow", selection))
        .expect("rewrite succeeds")
        .expect("synthetic action");

    let edited = edited_text(source, &info);
    assert_eq!(
        edited,
        "const a = 1;\nconst b = 2;\nconst newFunction = () => {\n    return a + b;\n}\n\nconst total = newFunction();\n"
    );

    // function first, then the call site
    let changes = &info.edits[0].text_changes;
    assert_eq!(changes[0].span, TextSpan::at(offset(source, "\nconst total")));
    assert_eq!(changes[1].new_text, "newFunction()");

    let rename = info.rename_location.expect("rename location") as usize;
    assert!(edited[rename..].starts_with("newFunction()"));
    assert_eq!(info.rename_filename.as_deref(), Some(FILE));
    assert_eq!(*host.requested.borrow(), vec!["function_scope_0"]);
}

#[test]
fn test_arrow_rewrite_of_single_line_function() {
    let source = "const sum = 1 + 2;\n";
    let tree = statements_tree(source, &[]);
    let selection = TextRange::new(offset(source, "1 + 2"), offset(source, ";"));
    let host = ReplayHost::default().with_edit(
        "function_scope_0",
        vec![
            TextChange::new(selection.to_span(), "foo(1, 2)"),
            TextChange::insertion(source.len() as u32, "function foo(a, b) { return a + b }"),
        ],
    );

    let info = FunctionExtractors::new(&host, &tree)
        .handle_function_refactor_edits(&request("function_scope_0_arrow", selection))
        .expect("rewrite succeeds")
        .expect("synthetic action");
    let changes = &info.edits[0].text_changes;
    assert_eq!(changes[0].new_text, "const foo = (a, b) => { return a + b }");
    // first statement: no leading whitespace, inserted at its own start
    assert_eq!(changes[0].span, TextSpan::at(0));
}

#[test]
fn test_local_arrow_goes_above_enclosing_statement() {
    let source = "function outer(a: number, b: number) {\n    const total = a + b;\n    return total;\n}\n";
    let tree = statements_tree(source, &[]);
    let selection = TextRange::new(offset(source, "a + b"), offset(source, "a + b") + 5);
    let statement_line = offset(source, "    const total");

    let host = ReplayHost::default()
        .with_edit(
            "function_scope_0",
            vec![
                TextChange::new(selection.to_span(), "newFunction()"),
                TextChange::insertion(
                    offset(source, "}\n"),
                    "\n    function newFunction() {\n        return a + b;\n    }\n",
                ),
            ],
        )
        .with_edit(
            "constant_scope_0",
            vec![
                TextChange::insertion(statement_line, "    const newLocal = a + b;\n"),
                TextChange::new(selection.to_span(), "newLocal"),
            ],
        );

    let info = FunctionExtractors::new(&host, &tree)
        .handle_function_refactor_edits(&request("function_scope_0_local_arrow", selection))
        .expect("rewrite succeeds")
        .expect("synthetic action");

    let edited = edited_text(source, &info);
    assert_eq!(
        edited,
        "function outer(a: number, b: number) {\n    const newFunction = () => {\n        return a + b;\n    }\n\n    const total = newFunction();\n    return total;\n}\n"
    );
    let rename = info.rename_location.expect("rename location") as usize;
    assert!(edited[rename..].starts_with("newFunction()"));
    assert_eq!(
        *host.requested.borrow(),
        vec!["function_scope_0", "constant_scope_0"]
    );
}

#[test]
fn test_local_arrow_after_indentation_keeps_statement_indented() {
    let source = "if (ready) {\n    log(a * 2);\n}\n";
    let tree = statements_tree(source, &[]);
    let selection = TextRange::new(offset(source, "a * 2"), offset(source, "a * 2") + 5);
    let statement_start = offset(source, "log(");

    let host = ReplayHost::default()
        .with_edit(
            "function_scope_0",
            vec![
                TextChange::new(selection.to_span(), "newFunction()"),
                TextChange::insertion(
                    source.len() as u32,
                    "\nfunction newFunction() {\n    return a * 2;\n}\n",
                ),
            ],
        )
        .with_edit(
            "constant_scope_0",
            vec![
                TextChange::insertion(statement_start, "const newLocal = a * 2;\n    "),
                TextChange::new(selection.to_span(), "newLocal"),
            ],
        );

    let info = FunctionExtractors::new(&host, &tree)
        .handle_function_refactor_edits(&request("function_scope_0_local_arrow", selection))
        .expect("rewrite succeeds")
        .expect("synthetic action");

    assert_eq!(
        edited_text(source, &info),
        "if (ready) {\n    const newFunction = () => {\n        return a * 2;\n    }\n\n    log(newFunction());\n}\n"
    );
}

#[test]
fn test_jsx_component_extraction() {
    let source = "function App(a: number, b?: string) {\n    return <div>{a}{b}</div>;\n}\n";
    let tree = statements_tree(source, &["App"]);
    let selection = TextRange::new(offset(source, "<div>"), offset(source, ";\n}"));
    let call_start = selection.pos;

    let host = ReplayHost::default().with_edit(
        "function_scope_1",
        vec![
            TextChange::new(selection.to_span(), "newFunction(a, b)"),
            TextChange::insertion(
                source.len() as u32,
                "\nfunction newFunction(a: number, b: string | undefined) {\n    return <div>{a}{b}</div>;\n}\n",
            ),
        ],
    );

    let info = FunctionExtractors::new(&host, &tree)
        .handle_function_refactor_edits(&request("function_scope_1_jsx", selection))
        .expect("rewrite succeeds")
        .expect("synthetic action");

    let changes = &info.edits[0].text_changes;
    assert_eq!(changes[0].new_text, "<ExtractedComponent a={a} b={b} />");
    assert_eq!(
        changes[1].new_text,
        "\nfunction ExtractedComponent({ a, b }: {\n    a: number;\n    b: string | undefined;\n}) {\n    return <div>{a}{b}</div>;\n}\n"
    );
    // host order is kept for components
    assert_eq!(changes[1].span, TextSpan::at(source.len() as u32));
    assert_eq!(info.rename_location, Some(call_start + 1));
    assert_eq!(info.rename_filename.as_deref(), Some(FILE));
}

#[test]
fn test_jsx_component_name_avoids_existing_identifiers() {
    let source = "const ExtractedComponent = 1;\nconst view = <b>{x}</b>;\n";
    let tree = statements_tree(source, &["ExtractedComponent", "view"]);
    let start = offset(source, "<b>");
    let selection = TextRange::new(start, start + "<b>{x}</b>".len() as u32);

    let host = ReplayHost::default().with_edit(
        "function_scope_0",
        vec![
            TextChange::new(selection.to_span(), "{newFunction()}"),
            TextChange::insertion(
                source.len() as u32,
                "\nfunction newFunction(): JSX.Element {\n    return <b>{x}</b>;\n}\n",
            ),
        ],
    );

    let info = FunctionExtractors::new(&host, &tree)
        .handle_function_refactor_edits(&request("function_scope_0_jsx", selection))
        .expect("rewrite succeeds")
        .expect("synthetic action");
    let changes = &info.edits[0].text_changes;
    assert_eq!(changes[0].new_text, "<ExtractedComponent_1 />");
    assert_eq!(
        changes[1].new_text,
        "\nfunction ExtractedComponent_1({}: {}): JSX.Element {\n    return <b>{x}</b>;\n}\n"
    );
}

#[test]
fn test_leading_changes_are_preserved() {
    let source = "const sum = 1 + 2;\n";
    let tree = statements_tree(source, &[]);
    let selection = TextRange::new(offset(source, "1 + 2"), offset(source, ";"));
    let import = TextChange::insertion(0, "import { add } from \"./math\";\n");
    let host = ReplayHost::default().with_edit(
        "function_scope_0",
        vec![
            import.clone(),
            TextChange::new(selection.to_span(), "newFunction()"),
            TextChange::insertion(
                source.len() as u32,
                "\nfunction newFunction() {\n    return add(1, 2);\n}\n",
            ),
        ],
    );

    let info = FunctionExtractors::new(&host, &tree)
        .handle_function_refactor_edits(&request("function_scope_0_arrow", selection))
        .expect("rewrite succeeds")
        .expect("synthetic action");
    let changes = &info.edits[0].text_changes;
    assert_eq!(changes.len(), 3);
    assert_eq!(changes[0], import);
    assert!(changes[1].new_text.contains("const newFunction = () => {"));
    assert_eq!(changes[2].new_text, "newFunction()");
}

#[test]
fn test_other_actions_are_left_to_the_host() {
    let source = "const sum = 1 + 2;\n";
    let tree = statements_tree(source, &[]);
    let host = ReplayHost::default();
    let result = FunctionExtractors::new(&host, &tree).handle_function_refactor_edits(&request(
        "function_scope_0",
        TextRange::new(12, 17),
    ));
    assert_eq!(result, Ok(None));
    assert!(host.requested.borrow().is_empty());
}

#[test]
fn test_missing_or_malformed_host_edits() {
    let source = "const sum = 1 + 2;\n";
    let tree = statements_tree(source, &[]);
    let selection = TextRange::new(12, 17);

    let host = ReplayHost::default();
    assert_eq!(
        FunctionExtractors::new(&host, &tree)
            .handle_function_refactor_edits(&request("function_scope_1_arrow", selection)),
        Err(RefactorError::MissingOriginEdit {
            action_name: "function_scope_1".to_string()
        })
    );

    let host = ReplayHost::default().with_edit(
        "function_scope_0",
        vec![TextChange::new(selection.to_span(), "newFunction()")],
    );
    assert_eq!(
        FunctionExtractors::new(&host, &tree)
            .handle_function_refactor_edits(&request("function_scope_0_arrow", selection)),
        Err(RefactorError::MissingTextChanges { found: 1 })
    );

    // local arrow needs the constant extraction to find its anchor
    let host = ReplayHost::default().with_edit(
        "function_scope_0",
        vec![
            TextChange::new(selection.to_span(), "newFunction()"),
            TextChange::insertion(19, "\nfunction newFunction() {\n    return 1 + 2;\n}\n"),
        ],
    );
    assert_eq!(
        FunctionExtractors::new(&host, &tree)
            .handle_function_refactor_edits(&request("function_scope_0_local_arrow", selection)),
        Err(RefactorError::MissingOriginEdit {
            action_name: "constant_scope_0".to_string()
        })
    );

    let host = ReplayHost::default().with_edit(
        "function_scope_0",
        vec![
            TextChange::new(selection.to_span(), "newFunction()"),
            TextChange::insertion(19, "let newFunction = 3;\n"),
        ],
    );
    assert!(matches!(
        FunctionExtractors::new(&host, &tree)
            .handle_function_refactor_edits(&request("function_scope_0_arrow", selection)),
        Err(RefactorError::MalformedFunctionText { .. })
    ));
}

#[test]
fn test_host_span_past_max_offset_fails_the_request() {
    let source = "const sum = 1 + 2;\n";
    let tree = statements_tree(source, &[]);
    let selection = TextRange::new(12, 17);
    let host = ReplayHost::default().with_edit(
        "function_scope_0",
        vec![
            TextChange::new(TextSpan::new(5, u32::MAX), "newFunction()"),
            TextChange::insertion(19, "\nfunction newFunction() {\n    return 1 + 2;\n}\n"),
        ],
    );
    assert_eq!(
        FunctionExtractors::new(&host, &tree)
            .handle_function_refactor_edits(&request("function_scope_0_arrow", selection)),
        Err(RefactorError::InvalidSpan {
            span: TextSpan::new(5, u32::MAX)
        })
    );
}
