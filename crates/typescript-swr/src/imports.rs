use itertools::Itertools;

use crate::typescript_ast::Import;

/// The import lines the hooks module needs, in the order they are emitted.
pub(crate) fn hook_imports(use_type_imports: bool, infinite: bool) -> Vec<String> {
    let swr_types = Import::new("swr")
        .item_as("SWRConfiguration", "SWRConfigInterface")
        .item_as("Key", "SWRKeyInterface");

    let mut imports = Vec::with_capacity(5);

    if use_type_imports {
        imports.push(swr_types.type_only(true));

        if infinite {
            imports.push(
                Import::new("swr/infinite")
                    .item("SWRInfiniteConfiguration")
                    .type_only(true),
            );
        }

        imports.push(Import::new("swr").default_item("useSWR"));

        if infinite {
            imports.push(Import::new("swr/infinite").default_item("useSWRInfinite"));
        }
    } else {
        imports.push(swr_types.default_item("useSWR"));

        if infinite {
            imports.push(
                Import::new("swr/infinite")
                    .default_item("useSWRInfinite")
                    .item("SWRInfiniteConfiguration"),
            );
        }
    }

    imports.push(
        Import::new("graphql-request/dist/types")
            .item("ClientError")
            .type_only(use_type_imports),
    );

    imports.iter().map(ToString::to_string).unique().collect()
}
