//! Object literal completions over hand-built trees and interned types.

use tsz_parser::{NodeArena, NodeIndex, SyntaxKind};
use tsz_plugin::{
    CompletionEntry, CompletionEntryLabelDetails, KeepOriginal, ObjectLiteralCompletions,
    PluginConfig, QuotePreference, UserPreferences, augment_object_literal_completions,
};
use tsz_solver::{PropertySymbol, TypeId, TypeInterner, TypeOracle};

/// Offset of `<rest>` in `configure({ usedOption, <rest> });`.
const REST_START: u32 = 24;

struct Fixture {
    arena: NodeArena,
    object: NodeIndex,
}

/// `configure({ usedOption, <rest> });` where `rest` is either empty
/// whitespace or a shorthand property still being typed.
fn call_with_object(rest: &str) -> Fixture {
    let source = format!("configure({{ usedOption, {rest} }});\n");
    let mut arena = NodeArena::new(source.as_str());

    let callee = arena.add_token(SyntaxKind::Identifier, 0, 9);
    let used = arena.add_token(SyntaxKind::Identifier, 11, 22);
    let used = arena.add_node(SyntaxKind::ShorthandPropertyAssignment, 11, 22, &[used]);
    let mut properties = vec![used];

    let typed = rest.trim();
    if rest == typed && !typed.is_empty() && typed.bytes().all(|b| b.is_ascii_alphanumeric()) {
        let start = REST_START;
        let end = start + typed.len() as u32;
        let name = arena.add_token(SyntaxKind::Identifier, start - 1, end);
        properties.push(arena.add_node(
            SyntaxKind::ShorthandPropertyAssignment,
            start - 1,
            end,
            &[name],
        ));
    }

    let close = source.rfind('}').expect("closing brace") as u32;
    let object = arena.add_node(SyntaxKind::ObjectLiteralExpression, 10, close + 1, &properties);
    let call = arena.add_node(SyntaxKind::CallExpression, 0, close + 2, &[callee, object]);
    let statement = arena.add_node(SyntaxKind::ExpressionStatement, 0, close + 3, &[call]);
    arena.add_source_file(&[statement]);
    Fixture { arena, object }
}

/// The `Options` type the object literal is checked against.
fn options_type(interner: &mut TypeInterner) -> TypeId {
    let happy = interner.literal_string("happy");
    let sad = interner.literal_string("sad");
    let mood = interner.union(vec![happy, sad]);
    let callback = interner.function(Vec::new(), TypeId::VOID);
    let additional = interner.object(vec![PropertySymbol::optional("foo", TypeId::BOOLEAN)]);
    let setup = interner.function(vec![TypeId::ANY], TypeId::VOID);
    let plugin = interner.object(vec![
        PropertySymbol::new("name", TypeId::STRING),
        PropertySymbol::new("setup", setup),
    ]);
    let plugins = interner.array(plugin);

    interner.interface(
        "Options",
        vec![
            PropertySymbol::new("usedOption", TypeId::STRING),
            PropertySymbol::optional("mood", mood),
            PropertySymbol::optional("callback", callback),
            PropertySymbol::optional("additionalOptions", additional),
            PropertySymbol::new("plugins", plugins),
            PropertySymbol::new("undefinedOption", TypeId::UNDEFINED),
        ],
    )
}

fn property(name: &str) -> CompletionEntry {
    CompletionEntry::new(name, "property", "11")
}

fn method_snippet(name: &str) -> CompletionEntry {
    CompletionEntry {
        insert_text: Some(format!("{name}() {{\n$0\n}}")),
        is_snippet: true,
        label_details: Some(CompletionEntryLabelDetails {
            detail: Some("()".to_string()),
            description: None,
        }),
        ..CompletionEntry::new(name, "method", "17")
    }
}

/// `(name, insert_text)` pairs, for compact assertions on order.
fn listing(entries: &[CompletionEntry]) -> Vec<(&str, Option<&str>)> {
    entries
        .iter()
        .map(|entry| (entry.name.as_str(), entry.insert_text.as_deref()))
        .collect()
}

fn options_fixture(rest: &str) -> (Fixture, TypeInterner) {
    let fixture = call_with_object(rest);
    let mut interner = TypeInterner::new();
    let options = options_type(&mut interner);
    interner.set_contextual_type(fixture.object, options);
    (fixture, interner)
}

fn host_entries() -> Vec<CompletionEntry> {
    vec![
        property("plugins"),
        property("undefinedOption"),
        property("additionalOptions"),
        property("callback"),
        property("mood"),
    ]
}

#[test]
fn test_options_scenario_with_defaults() {
    let (fixture, interner) = options_fixture("m");
    let position = REST_START + 1;
    let result = augment_object_literal_completions(
        &host_entries(),
        position,
        &fixture.arena,
        &interner,
        &UserPreferences::default(),
        &PluginConfig::default(),
    )
    .expect("object literal position");

    assert_eq!(
        listing(&result),
        vec![
            ("plugins", None),
            ("plugins", Some("plugins: [\n\t$1\n],$0")),
            ("undefinedOption", None),
            ("additionalOptions", None),
            ("additionalOptions", Some("additionalOptions: {\n\t$1\n},$0")),
            ("callback", None),
            ("mood", None),
            ("mood", Some("mood: \"$1\",$0")),
        ]
    );

    let mood = &result[7];
    assert!(mood.is_snippet);
    assert_eq!(mood.detail(), Some(": \"\","));
    assert_eq!(mood.kind, "property");
    assert_eq!(mood.sort_text, "11");
    assert_eq!(result[1].detail(), Some(": [],"));
    assert_eq!(result[4].detail(), Some(": {},"));
}

#[test]
fn test_cursor_in_whitespace_of_object_literal() {
    let (fixture, interner) = options_fixture("");
    let result = augment_object_literal_completions(
        &[property("mood")],
        REST_START,
        &fixture.arena,
        &interner,
        &UserPreferences::default(),
        &PluginConfig::default(),
    )
    .expect("object literal position");
    assert_eq!(
        listing(&result),
        vec![("mood", None), ("mood", Some("mood: \"$1\",$0"))]
    );
}

#[test]
fn test_used_option_is_matched_once() {
    let (fixture, interner) = options_fixture("m");
    let entries = vec![property("usedOption"), property("usedOption")];
    let result = augment_object_literal_completions(
        &entries,
        REST_START + 1,
        &fixture.arena,
        &interner,
        &UserPreferences::default(),
        &PluginConfig::default(),
    )
    .expect("object literal position");
    assert_eq!(
        listing(&result),
        vec![
            ("usedOption", None),
            ("usedOption", Some("usedOption: \"$1\",$0")),
            ("usedOption", None),
        ]
    );
}

#[test]
fn test_keep_original_above_and_remove() {
    let (fixture, interner) = options_fixture("m");
    let entries = vec![property("plugins"), property("mood")];

    let above = PluginConfig {
        keep_original: KeepOriginal::Above,
        insert_new_line: false,
        ..PluginConfig::default()
    };
    let result = ObjectLiteralCompletions::new(
        &fixture.arena,
        &interner,
        &UserPreferences::default(),
        &above,
    )
    .augment(&entries, REST_START + 1)
    .expect("object literal position");
    assert_eq!(
        listing(&result),
        vec![
            ("plugins", Some("plugins: [$1],$0")),
            ("plugins", None),
            ("mood", Some("mood: \"$1\",$0")),
            ("mood", None),
        ]
    );

    let remove = PluginConfig {
        keep_original: KeepOriginal::Remove,
        ..PluginConfig::default()
    };
    let result = ObjectLiteralCompletions::new(
        &fixture.arena,
        &interner,
        &UserPreferences::default(),
        &remove,
    )
    .augment(&entries, REST_START + 1)
    .expect("object literal position");
    assert_eq!(
        listing(&result),
        vec![
            ("plugins", Some("plugins: [\n\t$1\n],$0")),
            ("mood", Some("mood: \"$1\",$0")),
        ]
    );
}

#[test]
fn test_method_snippet_is_moved_next_to_property() {
    let (fixture, interner) = options_fixture("m");
    let entries = vec![
        property("callback"),
        property("mood"),
        method_snippet("callback"),
    ];
    let preferences = UserPreferences {
        include_completions_with_object_literal_method_snippets: true,
        ..UserPreferences::default()
    };

    let result = augment_object_literal_completions(
        &entries,
        REST_START + 1,
        &fixture.arena,
        &interner,
        &preferences,
        &PluginConfig::default(),
    )
    .expect("object literal position");
    assert_eq!(
        listing(&result),
        vec![
            ("callback", None),
            ("callback", Some("callback() {\n$0\n}")),
            ("mood", None),
            ("mood", Some("mood: \"$1\",$0")),
        ]
    );
    // the snippet takes over the property's sort key
    assert_eq!(result[1].sort_text, "11");
    assert_eq!(result[1].kind, "method");

    let above = PluginConfig {
        keep_original: KeepOriginal::Above,
        more_variants: false,
        ..PluginConfig::default()
    };
    let result = augment_object_literal_completions(
        &entries,
        REST_START + 1,
        &fixture.arena,
        &interner,
        &preferences,
        &above,
    )
    .expect("object literal position");
    assert_eq!(
        listing(&result),
        vec![
            ("callback", Some("callback() {\n$0\n}")),
            ("callback", None),
            ("mood", None),
        ]
    );

    let remove = PluginConfig {
        keep_original: KeepOriginal::Remove,
        more_variants: false,
        ..PluginConfig::default()
    };
    let result = augment_object_literal_completions(
        &entries,
        REST_START + 1,
        &fixture.arena,
        &interner,
        &preferences,
        &remove,
    )
    .expect("object literal position");
    assert_eq!(
        listing(&result),
        vec![("callback", Some("callback() {\n$0\n}")), ("mood", None)]
    );
}

#[test]
fn test_method_snippet_left_alone_without_preference() {
    let (fixture, interner) = options_fixture("m");
    let entries = vec![property("callback"), property("mood"), method_snippet("callback")];
    let result = augment_object_literal_completions(
        &entries,
        REST_START + 1,
        &fixture.arena,
        &interner,
        &UserPreferences::default(),
        &PluginConfig::default(),
    )
    .expect("object literal position");
    assert_eq!(result[0], entries[0]);
    assert_eq!(result[1], entries[1]);
    assert_eq!(result[3], entries[2]);
    assert_eq!(result.len(), 4);
}

#[test]
fn test_fallback_variant_for_unrecognised_shapes() {
    let (fixture, interner) = options_fixture("m");
    let config = PluginConfig {
        fallback_variant: true,
        ..PluginConfig::default()
    };
    let result = augment_object_literal_completions(
        &[property("undefinedOption"), property("callback")],
        REST_START + 1,
        &fixture.arena,
        &interner,
        &UserPreferences::default(),
        &config,
    )
    .expect("object literal position");
    assert_eq!(
        listing(&result),
        vec![
            ("undefinedOption", None),
            ("undefinedOption", Some("undefinedOption: $0,")),
            ("callback", None),
        ]
    );
    assert_eq!(result[1].detail(), Some(": ,"));
}

#[test]
fn test_fallback_variant_for_mixed_primitive_union() {
    let fixture = call_with_object("m");
    let mut interner = TypeInterner::new();
    let mixed = interner.union(vec![TypeId::STRING, TypeId::BOOLEAN]);
    let expected = interner.object(vec![PropertySymbol::new("flagOrName", mixed)]);
    interner.set_contextual_type(fixture.object, expected);

    let entries = [property("flagOrName")];
    let augment = |config: &PluginConfig| {
        augment_object_literal_completions(
            &entries,
            REST_START + 1,
            &fixture.arena,
            &interner,
            &UserPreferences::default(),
            config,
        )
        .expect("object literal position")
    };

    // string | boolean has no snippet of its own
    assert_eq!(listing(&augment(&PluginConfig::default())), vec![("flagOrName", None)]);

    let config = PluginConfig {
        fallback_variant: true,
        ..PluginConfig::default()
    };
    let result = augment(&config);
    assert_eq!(
        listing(&result),
        vec![("flagOrName", None), ("flagOrName", Some("flagOrName: $0,"))]
    );
    assert_eq!(result[1].detail(), Some(": ,"));
}

#[test]
fn test_union_of_object_types_drops_shared_names() {
    let fixture = call_with_object("m");
    let mut interner = TypeInterner::new();
    let first = interner.object(vec![PropertySymbol::new("a", TypeId::STRING)]);
    let any_array = interner.array(TypeId::ANY);
    let second = interner.object(vec![
        PropertySymbol::new("a", any_array),
        PropertySymbol::new("b", TypeId::STRING),
    ]);
    let expected = interner.union(vec![first, second]);
    interner.set_contextual_type(fixture.object, expected);

    let result = augment_object_literal_completions(
        &[property("a"), property("b")],
        REST_START + 1,
        &fixture.arena,
        &interner,
        &UserPreferences::default(),
        &PluginConfig::default(),
    )
    .expect("object literal position");
    assert_eq!(
        listing(&result),
        vec![("a", None), ("b", None), ("b", Some("b: \"$1\",$0"))]
    );
}

#[test]
fn test_quote_preference_applies_to_string_snippets() {
    let (fixture, interner) = options_fixture("m");
    let preferences = UserPreferences {
        quote_preference: QuotePreference::Single,
        ..UserPreferences::default()
    };
    let oracle: &dyn TypeOracle = &interner;
    let result = ObjectLiteralCompletions::new(
        &fixture.arena,
        oracle,
        &preferences,
        &PluginConfig::default(),
    )
    .augment(&[property("mood")], REST_START + 1)
    .expect("object literal position");
    assert_eq!(result[1].insert_text.as_deref(), Some("mood: '$1',$0"));
    assert_eq!(result[1].detail(), Some(": '',"));
}

#[test]
fn test_positions_that_are_not_property_names() {
    let (fixture, interner) = options_fixture("m");
    let prefs = UserPreferences::default();
    let config = PluginConfig::default();
    let entries = host_entries();

    // inside the callee name
    assert_eq!(
        augment_object_literal_completions(&entries, 4, &fixture.arena, &interner, &prefs, &config),
        None
    );
    // start of file
    assert_eq!(
        augment_object_literal_completions(&entries, 0, &fixture.arena, &interner, &prefs, &config),
        None
    );
    // nothing to augment
    assert_eq!(
        augment_object_literal_completions(
            &[],
            REST_START + 1,
            &fixture.arena,
            &interner,
            &prefs,
            &config
        ),
        None
    );
}

#[test]
fn test_key_already_followed_by_colon() {
    let (fixture, interner) = options_fixture(": 1");
    let result = augment_object_literal_completions(
        &host_entries(),
        REST_START,
        &fixture.arena,
        &interner,
        &UserPreferences::default(),
        &PluginConfig::default(),
    );
    assert_eq!(result, None);
}

#[test]
fn test_without_contextual_type_or_enabled_features() {
    let fixture = call_with_object("m");
    let interner = TypeInterner::new();
    assert_eq!(
        augment_object_literal_completions(
            &host_entries(),
            REST_START + 1,
            &fixture.arena,
            &interner,
            &UserPreferences::default(),
            &PluginConfig::default(),
        ),
        None
    );

    let (fixture, interner) = options_fixture("m");
    let disabled = PluginConfig {
        more_variants: false,
        ..PluginConfig::default()
    };
    assert_eq!(
        augment_object_literal_completions(
            &host_entries(),
            REST_START + 1,
            &fixture.arena,
            &interner,
            &UserPreferences::default(),
            &disabled,
        ),
        None
    );
}
