//! GitHub GraphQL client for the latest commit on a repository's default branch

use chrono::{DateTime, Utc};
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use crate::config::{DEFAULT_GITHUB_GRAPHQL_URL, GitHubToken, USER_AGENT};
use crate::error::GitHubError;
use crate::github::link::GitHubRepoRef;

pub const LATEST_COMMIT_QUERY: &str = r#"
query getRepository($owner: String!, $name: String!) {
  repository(owner: $owner, name: $name) {
    defaultBranchRef {
      target {
        ... on Commit {
          history(first: 1) {
            nodes {
              message
              committedDate
              authoredDate
              author {
                name
                user {
                  login
                }
              }
            }
          }
        }
      }
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<Value>>,
}

/// Human-readable text of one entry of a GraphQL `errors` array
fn error_message(error: Value) -> String {
    match error.get("message").and_then(Value::as_str) {
        Some(message) => message.to_string(),
        None => error.to_string(),
    }
}

/// Client bound to one GraphQL endpoint
///
/// Build it once and share it; the authorization header is fixed at
/// construction. No schema introspection is ever performed.
pub struct GitHubGraphqlClient {
    client: reqwest::Client,
    url: String,
    authorization: Option<String>,
}

impl GitHubGraphqlClient {
    pub fn new(url: &str, token: Option<&GitHubToken>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            url: url.to_string(),
            authorization: token.map(GitHubToken::graphql_header),
        }
    }

    /// Runs [`LATEST_COMMIT_QUERY`] and returns the `repository` object
    pub async fn latest_commit(&self, repo: &GitHubRepoRef) -> Result<Value, GitHubError> {
        let body = json!({
            "query": LATEST_COMMIT_QUERY,
            "variables": {"owner": repo.org, "name": repo.repo},
        });
        debug!("Querying latest commit for {} at {}", repo, self.url);

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(authorization) = &self.authorization {
            request = request.header(AUTHORIZATION, authorization);
        }

        let response: GraphqlResponse = request
            .send()
            .await?
            .json()
            .await
            .map_err(|e| GitHubError::InvalidResponse(e.to_string()))?;

        if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
            return Err(GitHubError::GraphQl(
                errors.into_iter().map(error_message).collect(),
            ));
        }

        response
            .data
            .as_ref()
            .and_then(|data| data.get("repository"))
            .filter(|repository| !repository.is_null())
            .cloned()
            .ok_or(GitHubError::MissingRepository)
    }
}

impl Default for GitHubGraphqlClient {
    fn default() -> Self {
        Self::new(DEFAULT_GITHUB_GRAPHQL_URL, None)
    }
}

/// Typed view of the commit returned by [`GitHubGraphqlClient::latest_commit`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestCommit {
    pub message: String,
    pub committed_date: DateTime<Utc>,
    pub authored_date: DateTime<Utc>,
    pub author_name: Option<String>,
    pub author_login: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommitNode {
    message: String,
    committed_date: DateTime<Utc>,
    authored_date: DateTime<Utc>,
    #[serde(default)]
    author: Option<CommitAuthor>,
}

#[derive(Deserialize)]
struct CommitAuthor {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    user: Option<CommitUser>,
}

#[derive(Deserialize)]
struct CommitUser {
    login: String,
}

impl LatestCommit {
    /// Picks the single history node out of a `repository` object.
    ///
    /// Returns `None` for empty repositories or unexpected shapes.
    pub fn from_repository(repository: &Value) -> Option<Self> {
        let node = repository
            .pointer("/defaultBranchRef/target/history/nodes/0")?
            .clone();
        let node: CommitNode = serde_json::from_value(node).ok()?;
        let (author_name, author_login) = match node.author {
            Some(author) => (author.name, author.user.map(|u| u.login)),
            None => (None, None),
        };

        Some(Self {
            message: node.message,
            committed_date: node.committed_date,
            authored_date: node.authored_date,
            author_name,
            author_login,
        })
    }
}
