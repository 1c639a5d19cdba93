use std::{
    borrow::Cow,
    fmt::{self, Write},
};

/// A type reference, with optional generic arguments.
#[derive(Debug, Clone)]
pub(crate) struct StaticType<'a> {
    name: Cow<'a, str>,
    params: Vec<StaticType<'a>>,
}

impl<'a> StaticType<'a> {
    pub(crate) fn ident(name: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    #[must_use]
    pub(crate) fn param(mut self, param: impl Into<StaticType<'a>>) -> Self {
        self.params.push(param.into());
        self
    }
}

impl<'a> From<&'a str> for StaticType<'a> {
    fn from(value: &'a str) -> Self {
        Self::ident(value)
    }
}

impl From<String> for StaticType<'_> {
    fn from(value: String) -> Self {
        Self::ident(value)
    }
}

impl fmt::Display for StaticType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;

        if !self.params.is_empty() {
            f.write_char('<')?;

            for (i, param) in self.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }

                param.fmt(f)?;
            }

            f.write_char('>')?;
        }

        Ok(())
    }
}
