//! A GraphQL code generation plugin emitting [SWR](https://swr.vercel.app) hooks.
//!
//! The generated module wraps the `getSdk` factory produced by the
//! `typescript-graphql-request` plugin: every query operation gets a `use<Name>`
//! hook, and optionally a paginated `use<Name>Infinite` variant. Mutations and
//! subscriptions are collected but never produce hooks.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod composer;
mod config;
mod error;
mod filter;
mod fragments;
mod imports;
mod naming;
mod operation;
mod templates;
mod traversal;
mod typescript_ast;
mod visitor;

use std::{fmt, path::Path};

use cynic_parser::{ExecutableDocument, TypeSystemDocument};

pub use config::{Patterns, RawSwrPluginConfig, SwrPluginConfig};
pub use error::Error;
pub use filter::GlobPatterns;
pub use fragments::{external_fragments, local_fragments, LoadedFragment};
pub use naming::{pascal_case, NamingConvention};
pub use operation::{Operation, OperationKind};
pub use traversal::{visit_operations, OperationNames, OperationVisitor};
pub use visitor::SwrVisitor;

/// A parsed operation document, as handed over by the host.
pub struct DocumentFile {
    /// Where the document was loaded from. Only used for diagnostics.
    pub location: String,
    pub document: ExecutableDocument,
}

impl DocumentFile {
    pub fn new(location: impl Into<String>, document: ExecutableDocument) -> Self {
        Self {
            location: location.into(),
            document,
        }
    }
}

/// What the plugin hands back to the host: import lines to put at the top of
/// the file, and the module body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginOutput {
    pub prepend: Vec<String>,
    pub content: String,
}

impl fmt::Display for PluginOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.prepend {
            writeln!(f, "{line}")?;
        }

        writeln!(f, "{}", self.content)
    }
}

/// Runs the plugin over the given documents.
///
/// Fragments defined in `documents` are merged with `external_fragments`,
/// which the host may supply for documents that live elsewhere.
pub fn plugin<'a>(
    schema: &TypeSystemDocument,
    documents: &'a [DocumentFile],
    config: &RawSwrPluginConfig,
    external_fragments: &[LoadedFragment<'a>],
) -> PluginOutput {
    let config = SwrPluginConfig::resolve(config);
    let naming = config.naming();

    let mut fragments = local_fragments(documents);
    fragments.extend_from_slice(external_fragments);

    let mut visitor = SwrVisitor::new(schema, fragments, config);
    visit_operations(documents, &naming, &mut visitor);

    PluginOutput {
        prepend: visitor.imports().to_vec(),
        content: visitor.sdk_content(),
    }
}

/// Checks the output file the host is about to write.
pub fn validate(output_file: impl AsRef<Path>) -> Result<(), Error> {
    let output_file = output_file.as_ref();

    match output_file.extension() {
        Some(extension) if extension == "ts" => Ok(()),
        _ => Err(Error::InvalidOutputExtension {
            path: output_file.to_path_buf(),
        }),
    }
}
