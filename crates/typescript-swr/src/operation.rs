use std::fmt;

use cynic_parser::{
    common::{OperationType, WrappingType},
    executable::{OperationDefinition, VariableDefinition},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Query => "Query",
            OperationKind::Mutation => "Mutation",
            OperationKind::Subscription => "Subscription",
        }
    }
}

impl From<OperationType> for OperationKind {
    fn from(value: OperationType) -> Self {
        match value {
            OperationType::Query => OperationKind::Query,
            OperationType::Mutation => OperationKind::Mutation,
            OperationType::Subscription => OperationKind::Subscription,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named operation seen during traversal.
#[derive(Clone)]
pub struct Operation<'a> {
    pub node: OperationDefinition<'a>,
    pub name: &'a str,
    pub document_variable_name: String,
    pub operation_type: OperationKind,
    pub operation_result_type: String,
    pub operation_variables_types: String,
}

impl<'a> Operation<'a> {
    /// Whether the `variables` argument of a hook may be left out: true if
    /// no variable is both non-null and without a default value.
    pub fn has_optional_variables(&self) -> bool {
        self.node.variable_definitions().all(|variable| !is_required(variable))
    }
}

fn is_required(variable: VariableDefinition<'_>) -> bool {
    let non_null = matches!(variable.ty().wrappers().next(), Some(WrappingType::NonNull));

    non_null && variable.default_value().is_none()
}
