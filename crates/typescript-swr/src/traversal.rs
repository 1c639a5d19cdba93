use cynic_parser::executable::OperationDefinition;

use crate::{
    naming::NamingConvention,
    operation::{Operation, OperationKind},
    DocumentFile,
};

/// The operation name and the names the base naming convention derives from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationNames<'a> {
    pub name: &'a str,
    pub document_variable_name: String,
    pub operation_type: OperationKind,
    pub operation_result_type: String,
    pub operation_variables_types: String,
}

impl<'a> OperationNames<'a> {
    pub fn new(naming: &NamingConvention, name: &'a str, operation_type: OperationKind) -> Self {
        Self {
            name,
            document_variable_name: naming.document_variable_name(name),
            operation_type,
            operation_result_type: naming.operation_result_type(name, operation_type),
            operation_variables_types: naming.operation_variables_type(name, operation_type),
        }
    }

    pub fn into_operation(self, node: OperationDefinition<'a>) -> Operation<'a> {
        Operation {
            node,
            name: self.name,
            document_variable_name: self.document_variable_name,
            operation_type: self.operation_type,
            operation_result_type: self.operation_result_type,
            operation_variables_types: self.operation_variables_types,
        }
    }
}

/// Receives every named operation definition, in document order.
pub trait OperationVisitor<'a> {
    fn on_operation_visited(&mut self, node: OperationDefinition<'a>, names: OperationNames<'a>);
}

/// Walks the operations of all documents, one document after the other.
///
/// Anonymous operations are skipped: there is no name to derive hooks or
/// types from.
pub fn visit_operations<'a>(
    documents: &'a [DocumentFile],
    naming: &NamingConvention,
    visitor: &mut dyn OperationVisitor<'a>,
) {
    for file in documents {
        for node in file.document.operations() {
            let Some(name) = node.name() else {
                tracing::debug!("Skipping anonymous {} in {}", OperationKind::from(node.operation_type()), file.location);
                continue;
            };

            let names = OperationNames::new(naming, name, node.operation_type().into());
            visitor.on_operation_visited(node, names);
        }
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    #[derive(Default)]
    struct Recorder<'a> {
        seen: Vec<OperationNames<'a>>,
    }

    impl<'a> OperationVisitor<'a> for Recorder<'a> {
        fn on_operation_visited(&mut self, _: OperationDefinition<'a>, names: OperationNames<'a>) {
            self.seen.push(names);
        }
    }

    fn document(location: &str, source: &str) -> DocumentFile {
        DocumentFile::new(location, cynic_parser::parse_executable_document(source).unwrap())
    }

    #[test]
    fn visits_in_document_order() {
        let documents = [
            document(
                "a.graphql",
                indoc! {r#"
                    query feed { feed { id } }
                    mutation submitComment { submitComment { id } }
                "#},
            ),
            document(
                "b.graphql",
                indoc! {r#"
                    subscription onComment { commentAdded { id } }
                    query feed2 { feed { id } }
                "#},
            ),
        ];

        let mut recorder = Recorder::default();
        visit_operations(&documents, &NamingConvention::default(), &mut recorder);

        let names = recorder
            .seen
            .iter()
            .map(|names| (names.name, names.operation_type))
            .collect::<Vec<_>>();

        assert_eq!(
            names,
            [
                ("feed", OperationKind::Query),
                ("submitComment", OperationKind::Mutation),
                ("onComment", OperationKind::Subscription),
                ("feed2", OperationKind::Query),
            ]
        );
    }

    #[test]
    fn skips_anonymous_operations() {
        let documents = [document(
            "a.graphql",
            indoc! {r#"
                query { feed { id } }
                query feed { feed { id } }
            "#},
        )];

        let mut recorder = Recorder::default();
        visit_operations(&documents, &NamingConvention::default(), &mut recorder);

        assert_eq!(recorder.seen.len(), 1);
        assert_eq!(recorder.seen[0].name, "feed");
    }

    #[test]
    fn names_follow_convention() {
        let documents = [document("a.graphql", "query feed2($v: String!) { feed { id } }")];

        let mut recorder = Recorder::default();
        visit_operations(&documents, &NamingConvention::new("P", "S"), &mut recorder);

        assert_eq!(
            recorder.seen[0],
            OperationNames {
                name: "feed2",
                document_variable_name: "Feed2Document".to_owned(),
                operation_type: OperationKind::Query,
                operation_result_type: "PFeed2QueryS".to_owned(),
                operation_variables_types: "PFeed2QueryVariablesS".to_owned(),
            }
        );
    }
}
