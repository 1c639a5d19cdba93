use crate::{
    naming::pascal_case,
    operation::Operation,
    typescript_ast::{Call, Closure, Conditional, Expression, Method, Property, Quoted, StaticType},
};

const CUSTOM_KEY_OPTION: &str = "{customKey?: (generatedName:SWRKeyInterface) => SWRKeyInterface}";

/// What the hooks of a single query depend on besides the query itself.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ComposeOptions<'a> {
    pub autogen_key: bool,
    pub infinite: bool,
    pub raw_request: bool,
    /// The affixed name of the page key loader type.
    pub key_loader: &'a str,
}

/// Renders the hook methods of one query: `use<Name>`, followed by
/// `use<Name>Infinite` when enabled for it.
pub(crate) fn compose_query_handler(operation: &Operation<'_>, options: &ComposeOptions<'_>) -> Vec<String> {
    let hooks = QueryHooks::new(operation, options);

    let mut codes = vec![hooks.plain().to_string()];

    if options.infinite {
        codes.push(hooks.infinite().to_string());
    }

    codes
}

struct QueryHooks<'a> {
    name: &'a str,
    pascal_name: String,
    response_type: StaticType<'a>,
    variables_type: &'a str,
    optional_variables: bool,
    options: &'a ComposeOptions<'a>,
}

impl<'a> QueryHooks<'a> {
    fn new(operation: &'a Operation<'a>, options: &'a ComposeOptions<'a>) -> Self {
        let result_type = operation.operation_result_type.as_str();

        let response_type = if options.raw_request {
            StaticType::ident("SWRRawResponse").param(result_type)
        } else {
            StaticType::ident(result_type)
        };

        Self {
            name: operation.name,
            pascal_name: pascal_case(operation.name),
            response_type,
            variables_type: &operation.operation_variables_types,
            optional_variables: operation.has_optional_variables(),
            options,
        }
    }

    fn variables(&self) -> Property<'a> {
        Property::new("variables", self.variables_type).optional_if(self.optional_variables)
    }

    fn generated_key(&self) -> Call<'a> {
        Call::new("genKey")
            .type_param(self.variables_type)
            .arg(Quoted::new(self.pascal_name.clone()))
            .arg("variables")
    }

    fn plain(&self) -> Method<'a> {
        let key: Expression<'a> = if self.options.autogen_key {
            Conditional::new(
                "opt?.customKey",
                Call::new("opt.customKey").arg(self.generated_key()),
                self.generated_key(),
            )
            .into()
        } else {
            "key".into()
        };

        let fetch = Call::new("useSWR")
            .type_param(self.response_type.clone())
            .type_param("ClientError")
            .arg(key)
            .arg(Closure::new(Call::new(format!("sdk.{}", self.name)).arg("variables")))
            .arg("config");

        let mut method = Method::new(format!("use{}", self.pascal_name), fetch);

        if !self.options.autogen_key {
            method = method.push_param(Property::new("key", "SWRKeyInterface"));
        }

        method
            .push_param(self.variables())
            .push_param(
                Property::new(
                    "config",
                    StaticType::ident("SWRConfigInterface")
                        .param(self.response_type.clone())
                        .param("ClientError"),
                )
                .optional(),
            )
            .push_param(Property::new("opt", CUSTOM_KEY_OPTION).optional())
    }

    fn infinite(&self) -> Method<'a> {
        let id: Expression<'a> = if self.options.autogen_key {
            self.generated_key().into()
        } else {
            "id".into()
        };

        let fetch = Call::new("useSWRInfinite")
            .type_param(self.response_type.clone())
            .type_param("ClientError")
            .arg(
                Call::new("utilsForInfinite.generateGetKey")
                    .type_param(self.response_type.clone())
                    .type_param(self.variables_type)
                    .arg(id)
                    .arg("getKey"),
            )
            .arg(
                Call::new("utilsForInfinite.generateFetcher")
                    .type_param(self.response_type.clone())
                    .type_param(self.variables_type)
                    .arg(format!("sdk.{}", self.name))
                    .arg("variables"),
            )
            .arg("config")
            .multiline(2);

        let mut method = Method::new(format!("use{}Infinite", self.pascal_name), fetch);

        if !self.options.autogen_key {
            method = method.push_param(Property::new("id", "string"));
        }

        method
            .push_param(Property::new(
                "getKey",
                StaticType::ident(self.options.key_loader)
                    .param(self.response_type.clone())
                    .param(self.variables_type),
            ))
            .push_param(self.variables())
            .push_param(
                Property::new(
                    "config",
                    StaticType::ident("SWRInfiniteConfiguration")
                        .param(self.response_type.clone())
                        .param("ClientError"),
                )
                .optional(),
            )
    }
}
