//! Records read from the public data directory

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type PluginName = String;
pub type Version = String;

/// Plugin name to versions, in the order recorded on disk
pub type PluginVersions = IndexMap<PluginName, Vec<Version>>;

/// Active, withdrawn, and deleted plugins from `classifiers.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginRegistry {
    pub active: PluginVersions,
    pub withdrawn: PluginVersions,
    pub deleted: PluginVersions,
}

const SINGULAR_URL_FIELDS: [&str; 3] = ["home_page", "package_url", "project_url"];

/// Read-only view of the `info` object of a PyPI JSON dump
///
/// The dump itself stays untyped; fields that are missing or not strings
/// are skipped rather than rejected.
#[derive(Debug, Clone, Copy)]
pub struct PypiInfo<'a> {
    info: Option<&'a Value>,
}

impl<'a> PypiInfo<'a> {
    pub fn of(package: &'a Value) -> Self {
        Self {
            info: package.get("info"),
        }
    }

    /// URLs worth scanning for a repository link, in lookup order:
    /// `home_page`, `package_url`, `project_url`, then every
    /// `project_urls` value as stored.
    pub fn candidate_urls(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        let info = self.info;
        let singular = SINGULAR_URL_FIELDS
            .into_iter()
            .filter_map(move |field| info.and_then(|i| i.get(field)));
        let labelled = info
            .and_then(|i| i.get("project_urls"))
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|urls| urls.values());

        singular.chain(labelled).filter_map(Value::as_str)
    }
}
