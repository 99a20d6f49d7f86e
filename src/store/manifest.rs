//! Plugin manifest records and the parser seam that produces them

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Plugin manifest as published in `manifest/<name>.json`
///
/// Only the top-level identity is typed; `contributions` follows an
/// external schema and is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginManifest {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub schema_version: Option<String>,
    #[serde(default)]
    pub contributions: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PluginManifest {
    /// Identity plus contributed command ids, for terse output
    pub fn summary(&self) -> ManifestSummary<'_> {
        ManifestSummary {
            name: &self.name,
            display_name: self.display_name.as_deref(),
            commands: self.commands(),
        }
    }

    /// Ids of the commands contributed by this plugin
    pub fn commands(&self) -> Vec<&str> {
        self.contributions
            .as_ref()
            .and_then(|c| c.get("commands"))
            .and_then(Value::as_array)
            .map(|commands| {
                commands
                    .iter()
                    .filter_map(|cmd| cmd.get("id").and_then(Value::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ManifestSummary<'a> {
    pub name: &'a str,
    pub display_name: Option<&'a str>,
    pub commands: Vec<&'a str>,
}

/// Converts raw manifest JSON into a [`PluginManifest`]
pub trait ManifestParser: Send + Sync {
    fn parse(&self, raw: &str) -> Result<PluginManifest, String>;
}

/// Default parser: plain serde deserialization
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonManifestParser;

impl ManifestParser for JsonManifestParser {
    fn parse(&self, raw: &str) -> Result<PluginManifest, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }
}
