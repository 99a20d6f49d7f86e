//! Metadata resolver: one entry point over the local store and GitHub
//!
//! Local lookups are strict: a missing file is an error. Repository
//! resolution is best-effort and only becomes an error once a remote call
//! actually needs the repository.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::error::{GitHubError, StoreError};
use crate::github::{Endpoint, GitHubApi, GitHubClients, GitHubRepoRef, LinkExtractor};
use crate::store::LocalStore;
use crate::store::manifest::PluginManifest;
use crate::store::types::{PluginRegistry, PluginVersions};

pub struct MetadataResolver {
    store: LocalStore,
    links: LinkExtractor,
    github: Arc<dyn GitHubApi>,
}

impl MetadataResolver {
    pub fn new(store: LocalStore, github: Arc<dyn GitHubApi>) -> Self {
        Self {
            store,
            links: LinkExtractor::new(),
            github,
        }
    }

    /// Resolver backed by the real GitHub clients
    pub fn from_config(config: &Config) -> Self {
        info!(
            "Using public data at {:?} ({})",
            config.public_dir,
            if config.github_token.is_some() {
                "authenticated"
            } else {
                "unauthenticated"
            }
        );
        Self::new(
            LocalStore::new(&config.public_dir),
            Arc::new(GitHubClients::from_config(config)),
        )
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub fn plugins(&self) -> Result<PluginRegistry, StoreError> {
        self.store.plugins()
    }

    pub fn active_plugins(&self) -> Result<PluginVersions, StoreError> {
        self.store.active_plugins()
    }

    pub fn manifest(&self, name: &str) -> Result<PluginManifest, StoreError> {
        self.store.manifest(name)
    }

    pub fn pypi_info(&self, name: &str) -> Result<Value, StoreError> {
        self.store.pypi_info(name)
    }

    pub fn conda_info(&self, name: &str) -> Result<Value, StoreError> {
        self.store.conda_info(name)
    }

    pub fn github_org_repo(&self, name: &str) -> Option<GitHubRepoRef> {
        self.links.github_org_repo(&self.store, name)
    }

    /// REST data for the plugin's repository
    pub async fn github_info(
        &self,
        name: &str,
        endpoint: Option<Endpoint>,
    ) -> Result<Value, GitHubError> {
        let repo = self.require_repo(name)?;
        self.github.repo(&repo, endpoint).await
    }

    /// Latest commit on the default branch of the plugin's repository
    pub async fn github_graphql(&self, name: &str) -> Result<Value, GitHubError> {
        let repo = self.require_repo(name)?;
        self.github.latest_commit(&repo).await
    }

    fn require_repo(&self, name: &str) -> Result<GitHubRepoRef, GitHubError> {
        self.github_org_repo(name)
            .ok_or_else(|| GitHubError::NoGitHubRepo(name.to_string()))
    }
}
