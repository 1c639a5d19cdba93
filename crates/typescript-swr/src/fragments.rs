use std::collections::HashSet;

use cynic_parser::{
    executable::FragmentDefinition,
    type_system::Definition,
    ExecutableDocument, TypeSystemDocument,
};

use crate::DocumentFile;

/// A fragment definition available to the operations being generated.
#[derive(Clone, Copy)]
pub struct LoadedFragment<'a> {
    pub name: &'a str,
    pub on_type: &'a str,
    pub node: FragmentDefinition<'a>,
    /// Set for fragments supplied by the host rather than found in the
    /// input documents.
    pub is_external: bool,
}

impl<'a> LoadedFragment<'a> {
    fn new(node: FragmentDefinition<'a>, is_external: bool) -> Self {
        Self {
            name: node.name(),
            on_type: node.type_condition(),
            node,
            is_external,
        }
    }
}

/// Fragments defined in the input documents.
pub fn local_fragments(documents: &[DocumentFile]) -> Vec<LoadedFragment<'_>> {
    documents
        .iter()
        .flat_map(|file| file.document.fragments())
        .map(|node| LoadedFragment::new(node, false))
        .collect()
}

/// Fragments from a document the host loaded separately.
pub fn external_fragments(document: &ExecutableDocument) -> Vec<LoadedFragment<'_>> {
    document
        .fragments()
        .map(|node| LoadedFragment::new(node, true))
        .collect()
}

/// Reports fragments that share a name or target a type the schema does not define.
pub(crate) fn check_fragments(schema: &TypeSystemDocument, fragments: &[LoadedFragment<'_>]) {
    let known_types = schema
        .definitions()
        .filter_map(|definition| match definition {
            Definition::Type(ty) | Definition::TypeExtension(ty) => Some(ty.name()),
            _ => None,
        })
        .collect::<HashSet<_>>();

    let mut seen = HashSet::with_capacity(fragments.len());

    for fragment in fragments {
        if !seen.insert(fragment.name) {
            tracing::warn!("Fragment `{}` is defined more than once", fragment.name);
        }

        if !known_types.is_empty() && !known_types.contains(fragment.on_type) {
            tracing::warn!(
                "Fragment `{}` targets `{}`, which is not defined in the schema",
                fragment.name,
                fragment.on_type
            );
        }
    }
}
