//! Semver Tool CLI
//!
//! Parses, compares and sorts tagged semantic versions.

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use serde::Serialize;
use tagged_semver::{NumericMode, PrereleaseTag, ToolConfig, Version};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "semver-tool")]
#[command(about = "Parse, compare and sort tagged semantic versions")]
struct Cli {
    /// Config file to load on top of the default locations
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Require numeric fields to be digits only
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a version and print its fields as JSON
    Parse {
        version: String,
    },

    /// Compare two versions and print higher, lower or equal
    Compare {
        version: String,
        candidate: String,
    },

    /// Print versions in ascending order
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,
        /// Newest first
        #[arg(short, long)]
        reverse: bool,
    },

    /// Print the newest of the given versions
    Latest {
        #[arg(required = true)]
        versions: Vec<String>,
    },
}

#[derive(Serialize)]
struct VersionReport {
    version: String,
    major: u64,
    minor: u64,
    patch: u64,
    prerelease_tag: PrereleaseTag,
    prerelease_build: i64,
    is_prerelease: bool,
}

impl From<Version> for VersionReport {
    fn from(v: Version) -> Self {
        Self {
            version: v.to_string(),
            major: v.major(),
            minor: v.minor(),
            patch: v.patch(),
            prerelease_tag: v.prerelease_tag(),
            prerelease_build: v.prerelease_build(),
            is_prerelease: v.is_prerelease(),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config =
        ToolConfig::load_from(cli.config.as_deref()).context("loading configuration")?;
    if cli.strict {
        config.parser.numeric = NumericMode::Strict;
    }
    debug!(?config, "configuration loaded");

    let parser = config.parser.parser();
    let parse_all = |inputs: &[String]| -> Result<Vec<Version>> {
        inputs
            .iter()
            .map(|input| parser.parse(input).map_err(anyhow::Error::from))
            .collect()
    };

    match cli.command {
        Commands::Parse { version } => {
            let version = parser.parse(&version)?;
            println!("{}", config.output.format.render(&VersionReport::from(version))?);
        }

        Commands::Compare { version, candidate } => {
            let version = parser.parse(&version)?;
            let candidate = parser.parse(&candidate)?;
            println!("{}", version.compare(&candidate));
        }

        Commands::Sort { versions, reverse } => {
            let mut versions = parse_all(&versions)?;
            versions.sort();
            if reverse {
                versions.reverse();
            }
            for v in versions {
                println!("{}", v);
            }
        }

        Commands::Latest { versions } => {
            let latest = parse_all(&versions)?
                .into_iter()
                .max()
                .context("no versions given")?;
            println!("{}", latest);
        }
    }

    Ok(())
}
