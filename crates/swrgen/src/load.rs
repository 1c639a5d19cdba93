use std::{fs, path::Path};

use anyhow::{anyhow, Context};
use cynic_parser::{ExecutableDocument, TypeSystemDocument};
use graphql_typescript_swr::DocumentFile;

pub(crate) fn schema(path: &Path) -> anyhow::Result<TypeSystemDocument> {
    let sdl = read(path)?;

    cynic_parser::parse_type_system_document(&sdl)
        .map_err(|error| anyhow!("error parsing schema {}:\n{}", path.display(), error.to_report(&sdl)))
}

pub(crate) fn executable_document(path: &Path) -> anyhow::Result<ExecutableDocument> {
    let source = read(path)?;

    cynic_parser::parse_executable_document(&source)
        .map_err(|error| anyhow!("error parsing document {}:\n{}", path.display(), error.to_report(&source)))
}

pub(crate) fn documents(paths: &[impl AsRef<Path>]) -> anyhow::Result<Vec<DocumentFile>> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            let document = executable_document(path)?;

            Ok(DocumentFile::new(path.display().to_string(), document))
        })
        .collect()
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
