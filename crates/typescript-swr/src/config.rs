use serde::Deserialize;

use crate::{filter::GlobPatterns, naming::NamingConvention};

/// One glob, or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Patterns {
    One(String),
    Many(Vec<String>),
}

impl Patterns {
    /// An empty string or an empty list does not count as a filter.
    pub fn is_empty(&self) -> bool {
        match self {
            Patterns::One(pattern) => pattern.is_empty(),
            Patterns::Many(patterns) => patterns.is_empty(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let patterns = match self {
            Patterns::One(pattern) => std::slice::from_ref(pattern),
            Patterns::Many(patterns) => patterns.as_slice(),
        };

        patterns.iter().map(String::as_str)
    }
}

impl From<&str> for Patterns {
    fn from(value: &str) -> Self {
        Self::One(value.to_owned())
    }
}

impl From<Vec<&str>> for Patterns {
    fn from(value: Vec<&str>) -> Self {
        Self::Many(value.into_iter().map(ToOwned::to_owned).collect())
    }
}

/// The plugin options as written by the user.
///
/// The host shares one configuration object between all the plugins it runs,
/// so keys this plugin does not know about are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawSwrPluginConfig {
    /// Wrap hook results in the full response envelope (data, extensions,
    /// headers, status and errors) instead of returning only `data`.
    pub raw_request: Option<bool>,
    /// Queries matching any of these globs get no hooks at all.
    pub exclude_queries: Option<Patterns>,
    /// Queries matching any of these globs get an additional `useSWRInfinite` hook.
    #[serde(rename = "useSWRInfinite")]
    pub use_swr_infinite: Option<Patterns>,
    /// Derive cache keys from the operation name and variables instead of
    /// taking them as a parameter.
    #[serde(rename = "autogenSWRKey")]
    pub autogen_swr_key: Option<bool>,
    pub types_prefix: Option<String>,
    pub types_suffix: Option<String>,
    /// Use `import type` for imports that are only used as types.
    pub use_type_imports: Option<bool>,
}

/// The configuration after defaults have been applied. Immutable for a run.
#[derive(Debug, Clone)]
pub struct SwrPluginConfig {
    pub raw_request: bool,
    /// `None` means no query is excluded.
    pub exclude_queries: Option<GlobPatterns>,
    /// `None` means infinite hooks are disabled for the whole module.
    pub use_swr_infinite: Option<GlobPatterns>,
    pub autogen_swr_key: bool,
    pub types_prefix: String,
    pub types_suffix: String,
    pub use_type_imports: bool,
}

impl SwrPluginConfig {
    pub fn resolve(raw: &RawSwrPluginConfig) -> Self {
        Self {
            raw_request: raw.raw_request.unwrap_or_default(),
            exclude_queries: compile(raw.exclude_queries.as_ref()),
            use_swr_infinite: compile(raw.use_swr_infinite.as_ref()),
            autogen_swr_key: raw.autogen_swr_key.unwrap_or_default(),
            types_prefix: raw.types_prefix.clone().unwrap_or_default(),
            types_suffix: raw.types_suffix.clone().unwrap_or_default(),
            use_type_imports: raw.use_type_imports.unwrap_or_default(),
        }
    }

    pub fn infinite_enabled(&self) -> bool {
        self.use_swr_infinite.is_some()
    }

    pub fn naming(&self) -> NamingConvention {
        NamingConvention::new(self.types_prefix.clone(), self.types_suffix.clone())
    }
}

impl Default for SwrPluginConfig {
    fn default() -> Self {
        Self::resolve(&RawSwrPluginConfig::default())
    }
}

fn compile(patterns: Option<&Patterns>) -> Option<GlobPatterns> {
    patterns
        .filter(|patterns| !patterns.is_empty())
        .map(GlobPatterns::new)
}
