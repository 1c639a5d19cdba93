#![cfg_attr(test, allow(unused_crate_dependencies))]

use std::fs;

use anyhow::Context;
use clap::crate_version;
use graphql_typescript_swr::{external_fragments, plugin, validate};
use tracing_subscriber::EnvFilter;

mod args;
mod load;

fn main() -> anyhow::Result<()> {
    let args = args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level().as_filter_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    tracing::debug!("swrgen {}", crate_version!());

    validate(&args.output)?;

    let config = args.config()?;
    let schema = load::schema(&args.schema)?;
    let documents = load::documents(&args.documents)?;

    let external = args
        .external_fragments
        .as_deref()
        .map(load::executable_document)
        .transpose()?;

    let fragments = external.as_ref().map(external_fragments).unwrap_or_default();

    let output = plugin(&schema, &documents, &config, &fragments);

    fs::write(&args.output, output.to_string())
        .with_context(|| format!("writing {}", args.output.display()))?;

    tracing::info!(
        "Wrote {} from {} document(s)",
        args.output.display(),
        documents.len()
    );

    Ok(())
}
