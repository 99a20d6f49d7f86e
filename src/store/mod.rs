//! Reader for the locally cached plugin corpus
//!
//! ```text
//! <public>/classifiers.json
//! <public>/manifest/<name>.json
//! <public>/pypi/<name>.json
//! <public>/conda/<name>.json
//! ```
//!
//! Every call re-reads from disk. A missing file is always an error here;
//! callers that want best-effort behavior decide that for themselves.

pub mod manifest;
pub mod types;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::StoreError;
use self::manifest::{JsonManifestParser, ManifestParser, PluginManifest};
use self::types::{PluginRegistry, PluginVersions};

const REGISTRY_FILE: &str = "classifiers.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    Registry,
    Manifest,
    Pypi,
    Conda,
}

impl StoreKind {
    /// Sub-directory holding the per-plugin files, if any
    fn dir_name(self) -> Option<&'static str> {
        match self {
            StoreKind::Registry => None,
            StoreKind::Manifest => Some("manifest"),
            StoreKind::Pypi => Some("pypi"),
            StoreKind::Conda => Some("conda"),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StoreKind::Registry => "plugin registry",
            StoreKind::Manifest => "manifest",
            StoreKind::Pypi => "pypi info",
            StoreKind::Conda => "conda info",
        };
        f.write_str(label)
    }
}

pub struct LocalStore {
    public_dir: PathBuf,
    manifest_parser: Arc<dyn ManifestParser>,
}

impl LocalStore {
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self::with_manifest_parser(public_dir, Arc::new(JsonManifestParser))
    }

    pub fn with_manifest_parser(
        public_dir: impl Into<PathBuf>,
        manifest_parser: Arc<dyn ManifestParser>,
    ) -> Self {
        Self {
            public_dir: public_dir.into(),
            manifest_parser,
        }
    }

    /// Path of the file backing `name` in the given store.
    ///
    /// The registry is a single file, so `name` is ignored for it.
    pub fn path_for(&self, kind: StoreKind, name: &str) -> PathBuf {
        match kind.dir_name() {
            Some(dir) => self.public_dir.join(dir).join(format!("{}.json", name)),
            None => self.public_dir.join(REGISTRY_FILE),
        }
    }

    /// Active, withdrawn, and deleted plugins
    pub fn plugins(&self) -> Result<PluginRegistry, StoreError> {
        self.read_json(StoreKind::Registry, &self.path_for(StoreKind::Registry, ""))
    }

    /// Active plugins with their versions
    pub fn active_plugins(&self) -> Result<PluginVersions, StoreError> {
        Ok(self.plugins()?.active)
    }

    /// PyPI JSON dump, exactly as stored
    pub fn pypi_info(&self, name: &str) -> Result<Value, StoreError> {
        self.read_json(StoreKind::Pypi, &self.path_for(StoreKind::Pypi, name))
    }

    pub fn conda_info(&self, name: &str) -> Result<Value, StoreError> {
        self.read_json(StoreKind::Conda, &self.path_for(StoreKind::Conda, name))
    }

    pub fn manifest(&self, name: &str) -> Result<PluginManifest, StoreError> {
        let path = self.path_for(StoreKind::Manifest, name);
        let raw = self.read_to_string(StoreKind::Manifest, &path)?;

        self.manifest_parser
            .parse(&raw)
            .map_err(|message| StoreError::Manifest { path, message })
    }

    fn read_json<T: DeserializeOwned>(
        &self,
        kind: StoreKind,
        path: &Path,
    ) -> Result<T, StoreError> {
        let raw = self.read_to_string(kind, path)?;

        serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn read_to_string(&self, kind: StoreKind, path: &Path) -> Result<String, StoreError> {
        debug!("Reading {} from {:?}", kind, path);

        if !path.is_file() {
            return Err(StoreError::NotFound {
                kind,
                path: path.to_path_buf(),
            });
        }

        std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
