//! Loading plugin settings from disk.

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tsz_plugin::PluginConfig;

/// Key under which settings files may nest the plugin's settings.
pub const SETTINGS_SECTION: &str = "tsEssentialPlugins";

/// Parse plugin settings from JSON text (comments and trailing commas are
/// accepted).
///
/// The dotted keys may sit at the top level or inside a
/// `"tsEssentialPlugins"` object, the way editor settings files nest them.
pub fn parse_config(source: &str) -> Result<PluginConfig> {
    let value: Value = json5::from_str(source).context("failed to parse settings JSON")?;
    let section = match value {
        Value::Object(mut map) => match map.remove(SETTINGS_SECTION) {
            Some(nested @ Value::Object(_)) => nested,
            Some(_) => anyhow::bail!("`{SETTINGS_SECTION}` must be an object"),
            None => Value::Object(map),
        },
        _ => anyhow::bail!("settings must be a JSON object"),
    };
    serde_json::from_value(section).context("invalid plugin settings")
}

/// Read and parse a settings file.
pub fn load_config(path: &Path) -> Result<PluginConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings: {}", path.display()))?;
    let config = parse_config(&source)
        .with_context(|| format!("failed to load settings: {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded plugin settings");
    Ok(config)
}
