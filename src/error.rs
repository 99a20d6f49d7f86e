use std::path::PathBuf;

use thiserror::Error;

use crate::store::StoreKind;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No {kind} at {}", path.display())]
    NotFound { kind: StoreKind, path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid manifest at {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },
}

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("No github repo for {0}")]
    NoGitHubRepo(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("GraphQL response has no repository")]
    MissingRepository,
}
