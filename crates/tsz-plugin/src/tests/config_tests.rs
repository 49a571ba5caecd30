use crate::config::*;

#[test]
fn test_defaults() {
    let config = PluginConfig::default();
    assert!(config.more_variants);
    assert_eq!(config.keep_original, KeepOriginal::Below);
    assert!(config.insert_new_line);
    assert!(!config.fallback_variant);

    let format = FormatSettings::default();
    assert_eq!(format.indent_size, 4);
    assert!(format.convert_tabs_to_spaces);
    assert_eq!(
        UserPreferences::default().quote_preference,
        QuotePreference::Auto
    );
}

#[test]
fn test_from_json_str_reads_dotted_keys() {
    let config = PluginConfig::from_json_str(
        r#"{
            // editor settings allow comments
            "objectLiteralCompletions.keepOriginal": "above",
            "objectLiteralCompletions.insertNewLine": false,
            "objectLiteralCompletions.fallbackVariant": true,
        }"#,
    )
    .expect("valid config");
    assert_eq!(config.keep_original, KeepOriginal::Above);
    assert!(!config.insert_new_line);
    assert!(config.fallback_variant);
    // missing key keeps its default
    assert!(config.more_variants);
}

#[test]
fn test_keep_original_accepts_before_alias() {
    let config =
        PluginConfig::from_json_str(r#"{ "objectLiteralCompletions.keepOriginal": "before" }"#)
            .expect("valid config");
    assert_eq!(config.keep_original, KeepOriginal::Above);

    let config =
        PluginConfig::from_json_str(r#"{ "objectLiteralCompletions.keepOriginal": "remove" }"#)
            .expect("valid config");
    assert_eq!(config.keep_original, KeepOriginal::Remove);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = PluginConfig::from_json_str(r#"{ "somethingElse.enable": true }"#)
        .expect("valid config");
    assert_eq!(config, PluginConfig::default());
}

#[test]
fn test_invalid_config_is_an_error() {
    let err = PluginConfig::from_json_str(
        r#"{ "objectLiteralCompletions.keepOriginal": "sideways" }"#,
    )
    .expect_err("unknown variant");
    assert!(err.to_string().starts_with("invalid plugin configuration"));
    assert!(std::error::Error::source(&err).is_some());

    assert!(PluginConfig::from_json_str("{ not json").is_err());
}

#[test]
fn test_preferences_use_host_spelling() {
    let prefs: UserPreferences = serde_json::from_str(
        r#"{ "includeCompletionsWithObjectLiteralMethodSnippets": true, "quotePreference": "single" }"#,
    )
    .expect("valid preferences");
    assert!(prefs.include_completions_with_object_literal_method_snippets);
    assert_eq!(prefs.quote_preference, QuotePreference::Single);

    let format: FormatSettings =
        serde_json::from_str(r#"{ "indentSize": 2 }"#).expect("valid format settings");
    assert_eq!(format.indent_size, 2);
    assert!(format.convert_tabs_to_spaces);
}
