use std::{borrow::Cow, fmt};

use super::{Expression, StaticType, INDENT};

/// A parameter: `key: Type`, or `key?: Type` when optional.
pub(crate) struct Property<'a> {
    key: Cow<'a, str>,
    value: StaticType<'a>,
    optional: bool,
}

impl<'a> Property<'a> {
    pub(crate) fn new(key: impl Into<Cow<'a, str>>, value: impl Into<StaticType<'a>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            optional: false,
        }
    }

    #[must_use]
    pub(crate) fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    #[must_use]
    pub(crate) fn optional_if(self, optional: bool) -> Self {
        if optional {
            self.optional()
        } else {
            self
        }
    }
}

impl fmt::Display for Property<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let optional = if self.optional { "?" } else { "" };
        write!(f, "{}{optional}: {}", self.key, self.value)
    }
}

/// An object literal method whose body is a single return statement.
pub(crate) struct Method<'a> {
    name: Cow<'a, str>,
    params: Vec<Property<'a>>,
    returns: Expression<'a>,
}

impl<'a> Method<'a> {
    pub(crate) fn new(name: impl Into<Cow<'a, str>>, returns: impl Into<Expression<'a>>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: returns.into(),
        }
    }

    #[must_use]
    pub(crate) fn push_param(mut self, param: Property<'a>) -> Self {
        self.params.push(param);
        self
    }
}

impl fmt::Display for Method<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;

        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            param.fmt(f)?;
        }

        writeln!(f, ") {{")?;
        writeln!(f, "{INDENT}return {};", self.returns)?;
        f.write_str("}")
    }
}
