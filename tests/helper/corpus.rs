//! On-disk public corpus for tests

use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;

use plugin_meta::config::{Config, GitHubToken};

/// Temporary `public/` tree populated file by file
pub struct Corpus {
    dir: TempDir,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn with_file(self, relative: &str, contents: Value) -> Self {
        let path = self.dir.path().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, serde_json::to_string_pretty(&contents).unwrap()).unwrap();
        self
    }

    pub fn with_registry(self, registry: Value) -> Self {
        self.with_file("classifiers.json", registry)
    }

    pub fn with_pypi_info(self, name: &str, info: Value) -> Self {
        self.with_file(&format!("pypi/{}.json", name), json!({ "info": info }))
    }

    /// Config pointing both GitHub APIs at a mock server
    pub fn config(&self, server_url: &str, token: Option<&str>) -> Config {
        Config {
            public_dir: self.path().to_path_buf(),
            github_token: token.map(GitHubToken::new),
            api_base_url: server_url.to_string(),
            graphql_url: format!("{}/graphql", server_url),
        }
    }
}
