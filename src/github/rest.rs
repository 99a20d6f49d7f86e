//! GitHub REST API client for repository resources

use std::fmt;
use std::str::FromStr;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{DEFAULT_GITHUB_API_URL, GitHubToken, USER_AGENT};
use crate::error::GitHubError;
use crate::github::link::GitHubRepoRef;

/// Sub-resources of `/repos/{org}/{repo}` that may be requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Assignees,
    Branches,
    Commits,
    CommitsHead,
    Contents,
    Contributors,
    Forks,
    Events,
    Issues,
    Languages,
    License,
    Pulls,
    Readme,
    Releases,
    Stargazers,
    Subscribers,
    Tags,
    Teams,
}

impl Endpoint {
    pub const ALL: [Endpoint; 18] = [
        Endpoint::Assignees,
        Endpoint::Branches,
        Endpoint::Commits,
        Endpoint::CommitsHead,
        Endpoint::Contents,
        Endpoint::Contributors,
        Endpoint::Forks,
        Endpoint::Events,
        Endpoint::Issues,
        Endpoint::Languages,
        Endpoint::License,
        Endpoint::Pulls,
        Endpoint::Readme,
        Endpoint::Releases,
        Endpoint::Stargazers,
        Endpoint::Subscribers,
        Endpoint::Tags,
        Endpoint::Teams,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Assignees => "assignees",
            Endpoint::Branches => "branches",
            Endpoint::Commits => "commits",
            Endpoint::CommitsHead => "commits/HEAD",
            Endpoint::Contents => "contents",
            Endpoint::Contributors => "contributors",
            Endpoint::Forks => "forks",
            Endpoint::Events => "events",
            Endpoint::Issues => "issues",
            Endpoint::Languages => "languages",
            Endpoint::License => "license",
            Endpoint::Pulls => "pulls",
            Endpoint::Readme => "readme",
            Endpoint::Releases => "releases",
            Endpoint::Stargazers => "stargazers",
            Endpoint::Subscribers => "subscribers",
            Endpoint::Tags => "tags",
            Endpoint::Teams => "teams",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown GitHub endpoint: {0}")]
pub struct UnknownEndpoint(pub String);

impl FromStr for Endpoint {
    type Err = UnknownEndpoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Endpoint::ALL
            .into_iter()
            .find(|endpoint| endpoint.as_str() == s)
            .ok_or_else(|| UnknownEndpoint(s.to_string()))
    }
}

/// Client for `GET /repos/{org}/{repo}[/{endpoint}]`
pub struct GitHubRestClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<GitHubToken>,
}

impl GitHubRestClient {
    /// Creates a client against `base_url`, authenticating only when a token is given
    pub fn new(base_url: &str, token: Option<GitHubToken>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn url_for(&self, repo: &GitHubRepoRef, endpoint: Option<Endpoint>) -> String {
        match endpoint {
            Some(endpoint) => format!(
                "{}/repos/{}/{}/{}",
                self.base_url, repo.org, repo.repo, endpoint
            ),
            None => format!("{}/repos/{}/{}", self.base_url, repo.org, repo.repo),
        }
    }

    /// Fetches the repository resource, or one of its sub-resources.
    ///
    /// The status code is not interpreted: GitHub's error payloads
    /// (`{"message": "Not Found", ...}`) are returned like any other body.
    pub async fn repo(
        &self,
        repo: &GitHubRepoRef,
        endpoint: Option<Endpoint>,
    ) -> Result<Value, GitHubError> {
        let url = self.url_for(repo, endpoint);
        debug!("Fetching GitHub REST resource: {}", url);

        let mut request = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, token.rest_header());
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("GitHub API returned status {}: {}", status, url);
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse GitHub response from {}: {}", url, e);
            GitHubError::InvalidResponse(e.to_string())
        })
    }
}

impl Default for GitHubRestClient {
    fn default() -> Self {
        Self::new(DEFAULT_GITHUB_API_URL, None)
    }
}
