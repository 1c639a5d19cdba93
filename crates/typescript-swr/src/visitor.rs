use cynic_parser::{executable::OperationDefinition, TypeSystemDocument};

use crate::{
    composer::{compose_query_handler, ComposeOptions},
    config::SwrPluginConfig,
    fragments::{check_fragments, LoadedFragment},
    imports::hook_imports,
    naming::NamingConvention,
    operation::{Operation, OperationKind},
    templates,
    traversal::{OperationNames, OperationVisitor},
    typescript_ast::indent_multiline,
};

/// Collects the operations of a run and renders the hooks module from them.
///
/// Operations are recorded as they are visited. Nothing is rendered until
/// [`SwrVisitor::sdk_content`] is called, which can be called any number of
/// times.
pub struct SwrVisitor<'a> {
    config: SwrPluginConfig,
    naming: NamingConvention,
    fragments: Vec<LoadedFragment<'a>>,
    operations: Vec<Operation<'a>>,
    imports: Vec<String>,
}

impl<'a> SwrVisitor<'a> {
    pub fn new(schema: &TypeSystemDocument, fragments: Vec<LoadedFragment<'a>>, config: SwrPluginConfig) -> Self {
        check_fragments(schema, &fragments);

        let imports = hook_imports(config.use_type_imports, config.infinite_enabled());

        Self {
            naming: config.naming(),
            config,
            fragments,
            operations: Vec::new(),
            imports,
        }
    }

    /// The import lines the host prepends to the generated file.
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn fragments(&self) -> &[LoadedFragment<'a>] {
        &self.fragments
    }

    /// Every recorded operation, whatever its type, in visiting order.
    pub fn operations(&self) -> &[Operation<'a>] {
        &self.operations
    }

    pub fn sdk_content(&self) -> String {
        let infinite_enabled = self.config.infinite_enabled();
        let key_loader = templates::key_loader_name(&self.naming);

        let hooks = self
            .operations
            .iter()
            .filter(|operation| operation.operation_type == OperationKind::Query)
            .filter(|operation| !self.is_excluded(operation.name))
            .flat_map(|operation| {
                let options = ComposeOptions {
                    autogen_key: self.config.autogen_swr_key,
                    infinite: self.is_infinite(operation.name),
                    raw_request: self.config.raw_request,
                    key_loader: &key_loader,
                };

                compose_query_handler(operation, &options)
            })
            .map(|hook| indent_multiline(&hook, 2))
            .collect::<Vec<_>>();

        let mut codes = Vec::with_capacity(7);

        if self.config.raw_request {
            codes.push(templates::RAW_RESPONSE_TYPE.to_owned());
        }

        if infinite_enabled {
            codes.push(templates::key_loader_type(&self.naming));
        }

        codes.push(templates::FACTORY_HEADER.to_owned());

        if infinite_enabled {
            codes.push(templates::infinite_utils(&self.naming, self.config.autogen_swr_key));
        }

        if self.config.autogen_swr_key {
            codes.push(templates::GEN_KEY.to_owned());
        }

        codes.push(templates::factory_return(&hooks));
        codes.push(templates::sdk_with_hooks_type(&self.naming));

        codes.join("\n")
    }

    fn is_excluded(&self, name: &str) -> bool {
        let excluded = self
            .config
            .exclude_queries
            .as_ref()
            .is_some_and(|patterns| patterns.is_match(name));

        if excluded {
            tracing::debug!("Excluding query `{name}`");
        }

        excluded
    }

    fn is_infinite(&self, name: &str) -> bool {
        let infinite = self
            .config
            .use_swr_infinite
            .as_ref()
            .is_some_and(|patterns| patterns.is_match(name));

        if infinite {
            tracing::debug!("Generating an infinite hook for query `{name}`");
        }

        infinite
    }
}

impl<'a> OperationVisitor<'a> for SwrVisitor<'a> {
    fn on_operation_visited(&mut self, node: OperationDefinition<'a>, names: OperationNames<'a>) {
        tracing::debug!("Recording {} `{}`", names.operation_type, names.name);

        self.operations.push(names.into_operation(node));
    }
}
