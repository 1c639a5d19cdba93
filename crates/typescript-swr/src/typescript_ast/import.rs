use std::{borrow::Cow, fmt};

use super::Quoted;

#[derive(Debug, Clone)]
struct ImportSpecifier<'a> {
    name: Cow<'a, str>,
    alias: Option<Cow<'a, str>>,
}

impl fmt::Display for ImportSpecifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alias {
            Some(ref alias) => write!(f, "{} as {alias}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// `import [type] Default, { Named as Alias } from 'location';`
#[derive(Debug, Clone)]
pub(crate) struct Import<'a> {
    location: Quoted<'a>,
    default: Option<Cow<'a, str>>,
    named: Vec<ImportSpecifier<'a>>,
    type_only: bool,
}

impl<'a> Import<'a> {
    pub(crate) fn new(location: impl Into<Cow<'a, str>>) -> Self {
        Self {
            location: Quoted::new(location),
            default: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    #[must_use]
    pub(crate) fn default_item(mut self, name: impl Into<Cow<'a, str>>) -> Self {
        self.default = Some(name.into());
        self
    }

    #[must_use]
    pub(crate) fn item(mut self, name: impl Into<Cow<'a, str>>) -> Self {
        self.named.push(ImportSpecifier {
            name: name.into(),
            alias: None,
        });
        self
    }

    #[must_use]
    pub(crate) fn item_as(mut self, name: impl Into<Cow<'a, str>>, alias: impl Into<Cow<'a, str>>) -> Self {
        self.named.push(ImportSpecifier {
            name: name.into(),
            alias: Some(alias.into()),
        });
        self
    }

    #[must_use]
    pub(crate) fn type_only(mut self, type_only: bool) -> Self {
        self.type_only = type_only;
        self
    }
}

impl fmt::Display for Import<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("import ")?;

        if self.type_only {
            f.write_str("type ")?;
        }

        if let Some(ref default) = self.default {
            f.write_str(default)?;

            if !self.named.is_empty() {
                f.write_str(", ")?;
            }
        }

        if !self.named.is_empty() {
            f.write_str("{ ")?;

            for (i, specifier) in self.named.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }

                specifier.fmt(f)?;
            }

            f.write_str(" }")?;
        }

        write!(f, " from {};", self.location)
    }
}
