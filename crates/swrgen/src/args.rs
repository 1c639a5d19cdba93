use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use graphql_typescript_swr::RawSwrPluginConfig;

mod log;

pub(crate) use log::LogLevel;

#[derive(Debug, Parser)]
#[command(name = "swrgen", version)]
#[command(arg_required_else_help = true)]
/// Generates SWR hooks for the queries of GraphQL documents
pub(crate) struct Args {
    /// Path to the schema SDL
    #[arg(long, short, env = "SWRGEN_SCHEMA_PATH")]
    pub schema: PathBuf,
    /// Where to write the generated module. Must be a `.ts` file.
    #[arg(long, short)]
    pub output: PathBuf,
    /// Path to the plugin configuration, in TOML (`.toml`) or JSON
    #[arg(long, short, env = "SWRGEN_CONFIG_PATH")]
    pub config: Option<PathBuf>,
    /// A document whose fragments are made available to every operation
    #[arg(long)]
    pub external_fragments: Option<PathBuf>,
    /// Set the logging level. `RUST_LOG` takes precedence when set.
    #[arg(long = "log", env = "SWRGEN_LOG")]
    pub log_level: Option<LogLevel>,
    /// The operation documents
    #[arg(required = true)]
    pub documents: Vec<PathBuf>,
}

impl Args {
    pub fn log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    /// The plugin configuration. Without a config file every option has its
    /// default value.
    pub fn config(&self) -> anyhow::Result<RawSwrPluginConfig> {
        let Some(ref path) = self.config else {
            return Ok(RawSwrPluginConfig::default());
        };

        let config = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

        let config = match path.extension() {
            Some(extension) if extension == "toml" => toml::from_str(&config).map_err(anyhow::Error::from),
            _ => serde_json::from_str(&config).map_err(anyhow::Error::from),
        };

        config.with_context(|| format!("parsing {}", path.display()))
    }
}

pub(crate) fn parse() -> Args {
    Args::parse()
}
