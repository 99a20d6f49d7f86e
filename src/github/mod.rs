//! GitHub enrichment: repository resolution plus REST and GraphQL clients

pub mod api;
pub mod graphql;
pub mod link;
pub mod rest;

pub use api::{GitHubApi, GitHubClients};
pub use graphql::{GitHubGraphqlClient, LatestCommit};
pub use link::{GitHubRepoRef, LinkExtractor};
pub use rest::{Endpoint, GitHubRestClient};
