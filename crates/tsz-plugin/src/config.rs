//! Plugin settings and host-provided preferences.
//!
//! [`PluginConfig`] holds the plugin's own settings, keyed the way editor
//! settings files spell them (`"objectLiteralCompletions.keepOriginal"`).
//! [`UserPreferences`] and [`FormatSettings`] mirror the subset of the host
//! language service's preference objects that the engine reads.

use serde::{Deserialize, Serialize};

/// Where a synthesized completion goes relative to the entry it derives from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeepOriginal {
    /// Insert before the original entry.
    #[serde(alias = "before")]
    Above,
    /// Insert after the original entry.
    #[default]
    Below,
    /// Replace the original entry.
    Remove,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Offer value snippets (`: "$1",$0`, `: [$1],$0`, ...) for
    /// non-function properties.
    #[serde(rename = "objectLiteralCompletions.moreVariants")]
    pub more_variants: bool,
    #[serde(rename = "objectLiteralCompletions.keepOriginal")]
    pub keep_original: KeepOriginal,
    /// Put the cursor on its own line inside `[]` and `{}` snippets.
    #[serde(rename = "objectLiteralCompletions.insertNewLine")]
    pub insert_new_line: bool,
    /// Offer `: $0,` for properties whose type has no recognised shape.
    #[serde(rename = "objectLiteralCompletions.fallbackVariant")]
    pub fallback_variant: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        PluginConfig {
            more_variants: true,
            keep_original: KeepOriginal::Below,
            insert_new_line: true,
            fallback_variant: false,
        }
    }
}

impl PluginConfig {
    /// Parse settings from JSON text. Comments and trailing commas are
    /// accepted; unknown keys are ignored and missing keys keep defaults.
    pub fn from_json_str(text: &str) -> Result<PluginConfig, ConfigError> {
        json5::from_str(text).map_err(ConfigError::Parse)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotePreference {
    /// Follow the quotes already used in the file.
    #[default]
    Auto,
    Double,
    Single,
}

/// The host's user preferences for a request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPreferences {
    pub include_completions_with_object_literal_method_snippets: bool,
    pub quote_preference: QuotePreference,
}

/// The host's formatting settings for a request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatSettings {
    pub indent_size: u32,
    pub convert_tabs_to_spaces: bool,
}

impl Default for FormatSettings {
    fn default() -> Self {
        FormatSettings {
            indent_size: 4,
            convert_tabs_to_spaces: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Parse(json5::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "invalid plugin configuration: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
        }
    }
}
