use heck::ToUpperCamelCase;
use itertools::Itertools;

use crate::operation::OperationKind;

/// The Pascal case form of an operation name used in hook names and cache
/// keys. Words are split on underscores and case changes. A word starting
/// with a digit keeps an underscore in front of it, so `feed_2` becomes
/// `Feed_2` while `feed2` stays `Feed2`.
pub fn pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .enumerate()
        .map(|(i, word)| {
            let word = word.to_upper_camel_case();

            if i > 0 && word.starts_with(|c: char| c.is_ascii_digit()) {
                format!("_{word}")
            } else {
                word
            }
        })
        .collect()
}

/// The base convention for generated type names: every underscore separated
/// part is Pascal cased on its own and the underscores are kept.
fn convert_name(name: &str) -> String {
    name.split('_').map(|part| part.to_upper_camel_case()).join("_")
}

/// How generated TypeScript types are named.
///
/// Type names carry the configured prefix and suffix. Document variables are
/// values, not types, and are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingConvention {
    types_prefix: String,
    types_suffix: String,
}

impl NamingConvention {
    pub fn new(types_prefix: impl Into<String>, types_suffix: impl Into<String>) -> Self {
        Self {
            types_prefix: types_prefix.into(),
            types_suffix: types_suffix.into(),
        }
    }

    pub fn affixed(&self, name: &str) -> String {
        format!("{}{name}{}", self.types_prefix, self.types_suffix)
    }

    pub fn operation_result_type(&self, name: &str, kind: OperationKind) -> String {
        self.affixed(&format!("{}{}", convert_name(name), kind.as_str()))
    }

    pub fn operation_variables_type(&self, name: &str, kind: OperationKind) -> String {
        self.affixed(&format!("{}{}Variables", convert_name(name), kind.as_str()))
    }

    pub fn document_variable_name(&self, name: &str) -> String {
        format!("{}Document", convert_name(name))
    }
}
