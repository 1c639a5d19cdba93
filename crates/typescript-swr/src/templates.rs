//! The fixed blocks around the generated hooks.

use indoc::{formatdoc, indoc};

use crate::{naming::NamingConvention, typescript_ast::indent_multiline};

pub(crate) const RAW_RESPONSE_TYPE: &str = "type SWRRawResponse<Data = any> = { data?: Data | undefined; extensions?: any; headers: Headers; status: number; errors?: GraphQLError[] | undefined; };";

pub(crate) const FACTORY_HEADER: &str = indoc! {r#"
    export function getSdkWithHooks(client: GraphQLClient, withWrapper: SdkFunctionWrapper = defaultWrapper) {
      const sdk = getSdk(client, withWrapper);"#};

pub(crate) const GEN_KEY: &str = "  const genKey = <V extends Record<string, unknown> = Record<string, unknown>>(name: string, object: V = {} as V): SWRKeyInterface => [name, ...Object.keys(object).sort().map(key => object[key])];";

pub(crate) fn key_loader_name(naming: &NamingConvention) -> String {
    naming.affixed("SWRInfiniteKeyLoader")
}

pub(crate) fn key_loader_type(naming: &NamingConvention) -> String {
    formatdoc! {r#"
        export type {}<Data = unknown, Variables = unknown> = (
          index: number,
          previousPageData: Data | null
        ) => [keyof Variables, Variables[keyof Variables] | null] | null;"#,
        key_loader_name(naming),
    }
}

/// The adapters between a page key loader and `useSWRInfinite`. Generated
/// keys are arrays, so the id the loader keys are prefixed with changes type
/// with them.
pub(crate) fn infinite_utils(naming: &NamingConvention, autogen_key: bool) -> String {
    let id_type = if autogen_key { "SWRKeyInterface" } else { "string" };

    let utils = formatdoc! {r#"
        const utilsForInfinite = {{
          generateGetKey: <Data = unknown, Variables = unknown>(
            id: {id_type},
            getKey: {loader}<Data, Variables>
          ) => (pageIndex: number, previousData: Data | null) => {{
            const key = getKey(pageIndex, previousData)
            return key ? [id, ...key] : null
          }},
          generateFetcher: <Query = unknown, Variables = unknown>(query: (variables: Variables) => Promise<Query>, variables?: Variables) => (
              id: string,
              fieldName: keyof Variables,
              fieldValue: Variables[typeof fieldName]
            ) => query({{ ...variables, [fieldName]: fieldValue }} as Variables)
        }}"#,
        loader = key_loader_name(naming),
    };

    indent_multiline(&utils, 1)
}

/// The return statement of the factory. `hooks` are already indented.
pub(crate) fn factory_return(hooks: &[String]) -> String {
    formatdoc! {r#"
          return {{
            ...sdk,
        {}
          }};
        }}"#,
        hooks.join(",\n"),
    }
}

pub(crate) fn sdk_with_hooks_type(naming: &NamingConvention) -> String {
    format!(
        "export type {} = ReturnType<typeof getSdkWithHooks>;",
        naming.affixed("SdkWithHooks")
    )
}
