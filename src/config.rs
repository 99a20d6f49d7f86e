use std::fmt;
use std::path::PathBuf;

/// Environment variable holding the path to the public data directory
pub const PUBLIC_DIR_ENV: &str = "PLUGIN_META_PUBLIC";

/// Environment variable holding the GitHub API token
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_API_TOKEN";

/// Default public data directory, relative to the working directory
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Default base URL for the GitHub REST API
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

/// Default URL for the GitHub GraphQL API
pub const DEFAULT_GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// User agent sent with every GitHub request
pub const USER_AGENT: &str = "plugin-meta";

/// GitHub API token
///
/// The secret never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubToken(String);

impl GitHubToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// `Authorization` header value for the REST API
    pub fn rest_header(&self) -> String {
        format!("token {}", self.0)
    }

    /// `Authorization` header value for the GraphQL API
    pub fn graphql_header(&self) -> String {
        format!("bearer {}", self.0)
    }
}

impl fmt::Debug for GitHubToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GitHubToken(****)")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub public_dir: PathBuf,
    pub github_token: Option<GitHubToken>,
    pub api_base_url: String,
    pub graphql_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            github_token: None,
            api_base_url: DEFAULT_GITHUB_API_URL.to_string(),
            graphql_url: DEFAULT_GITHUB_GRAPHQL_URL.to_string(),
        }
    }
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// The token is read here once; clients built from this config never
    /// look at the environment again.
    pub fn from_env() -> Self {
        Self {
            public_dir: public_dir_with_env(std::env::var(PUBLIC_DIR_ENV).ok()),
            github_token: token_with_env(std::env::var(GITHUB_TOKEN_ENV).ok()),
            ..Self::default()
        }
    }

    pub fn with_public_dir(mut self, public_dir: impl Into<PathBuf>) -> Self {
        self.public_dir = public_dir.into();
        self
    }
}

fn public_dir_with_env(public_dir: Option<String>) -> PathBuf {
    public_dir
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR))
}

fn token_with_env(token: Option<String>) -> Option<GitHubToken> {
    token.filter(|t| !t.is_empty()).map(GitHubToken)
}
