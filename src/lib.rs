//! Convenience layer over a locally cached plugin metadata corpus
//!
//! The corpus lives under a `public/` directory produced by an external
//! pipeline. Plugins can be enriched with live data from GitHub once their
//! repository has been resolved from the PyPI metadata.
//!
//! # Layout
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Store    │────▶│    Link     │────▶│   GitHub    │
//! │ (json files)│     │ (org/repo)  │     │ (rest, gql) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        ▲                                       ▲
//!        └────────────── Resolver ───────────────┘
//! ```

pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod resolver;
pub mod store;
