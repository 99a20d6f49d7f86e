use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use plugin_meta::config::Config;
use plugin_meta::github::{Endpoint, LatestCommit};
use plugin_meta::logging::{self, LogFormat};
use plugin_meta::resolver::MetadataResolver;

#[derive(Parser)]
#[command(name = "plugin-meta")]
#[command(version, about = "Query cached plugin metadata and its GitHub repository")]
struct Cli {
    /// Public data directory (defaults to $PLUGIN_META_PUBLIC, then ./public)
    #[arg(long, global = true)]
    public_dir: Option<PathBuf>,

    /// Log output format: text or json
    #[arg(long, global = true, default_value = "text")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Active, withdrawn, and deleted plugins
    Plugins,
    /// Active plugins with their versions
    Active,
    /// GitHub organization and repository of a plugin
    Repo { name: String },
    /// GitHub REST data for a plugin's repository
    Github {
        name: String,
        /// Sub-resource such as commits, readme, or commits/HEAD
        endpoint: Option<Endpoint>,
    },
    /// Latest commit on the default branch, via GraphQL
    Graphql {
        name: String,
        /// Print a condensed commit summary instead of the raw repository object
        #[arg(long)]
        summary: bool,
    },
    /// Plugin manifest
    Manifest {
        name: String,
        /// Print name, display name, and command ids only
        #[arg(long)]
        summary: bool,
    },
    /// Cached PyPI metadata
    Pypi { name: String },
    /// Cached conda metadata
    Conda { name: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init(cli.log_format);

    let mut config = Config::from_env();
    if let Some(public_dir) = cli.public_dir {
        config = config.with_public_dir(public_dir);
    }
    let resolver = MetadataResolver::from_config(&config);

    match cli.command {
        Command::Plugins => print_json(&resolver.plugins()?),
        Command::Active => print_json(&resolver.active_plugins()?),
        Command::Repo { name } => print_json(&resolver.github_org_repo(&name)),
        Command::Manifest { name, summary } => {
            let manifest = resolver.manifest(&name)?;
            if summary {
                print_json(&manifest.summary())
            } else {
                print_json(&manifest)
            }
        }
        Command::Pypi { name } => print_json(&resolver.pypi_info(&name)?),
        Command::Conda { name } => print_json(&resolver.conda_info(&name)?),
        Command::Github { name, endpoint } => {
            let value = runtime()?.block_on(resolver.github_info(&name, endpoint))?;
            print_json(&value)
        }
        Command::Graphql { name, summary } => {
            let repository = runtime()?.block_on(resolver.github_graphql(&name))?;
            if summary {
                print_json(&LatestCommit::from_repository(&repository))
            } else {
                print_json(&repository)
            }
        }
    }
}

fn runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
