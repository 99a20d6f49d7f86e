//! Trait seam over the GitHub clients

#[cfg(test)]
use mockall::automock;
use serde_json::Value;

use crate::config::Config;
use crate::error::GitHubError;
use crate::github::graphql::GitHubGraphqlClient;
use crate::github::link::GitHubRepoRef;
use crate::github::rest::{Endpoint, GitHubRestClient};

/// Remote calls made once a plugin's repository is known
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait GitHubApi: Send + Sync {
    /// `GET /repos/{org}/{repo}[/{endpoint}]`, body returned as-is
    async fn repo(
        &self,
        repo: &GitHubRepoRef,
        endpoint: Option<Endpoint>,
    ) -> Result<Value, GitHubError>;

    /// The `repository` object of the latest-commit GraphQL query
    async fn latest_commit(&self, repo: &GitHubRepoRef) -> Result<Value, GitHubError>;
}

/// REST and GraphQL clients sharing one configuration
pub struct GitHubClients {
    rest: GitHubRestClient,
    graphql: GitHubGraphqlClient,
}

impl GitHubClients {
    pub fn new(rest: GitHubRestClient, graphql: GitHubGraphqlClient) -> Self {
        Self { rest, graphql }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            GitHubRestClient::new(&config.api_base_url, config.github_token.clone()),
            GitHubGraphqlClient::new(&config.graphql_url, config.github_token.as_ref()),
        )
    }
}

#[async_trait::async_trait]
impl GitHubApi for GitHubClients {
    async fn repo(
        &self,
        repo: &GitHubRepoRef,
        endpoint: Option<Endpoint>,
    ) -> Result<Value, GitHubError> {
        self.rest.repo(repo, endpoint).await
    }

    async fn latest_commit(&self, repo: &GitHubRepoRef) -> Result<Value, GitHubError> {
        self.graphql.latest_commit(repo).await
    }
}
