use std::{borrow::Cow, fmt};

use super::{Quoted, StaticType, INDENT};

pub(crate) enum Expression<'a> {
    Variable(Cow<'a, str>),
    String(Quoted<'a>),
    Call(Box<Call<'a>>),
    Closure(Box<Closure<'a>>),
    Conditional(Box<Conditional<'a>>),
}

impl fmt::Display for Expression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Variable(name) => f.write_str(name),
            Expression::String(value) => value.fmt(f),
            Expression::Call(call) => call.fmt(f),
            Expression::Closure(closure) => closure.fmt(f),
            Expression::Conditional(conditional) => conditional.fmt(f),
        }
    }
}

impl<'a> From<&'a str> for Expression<'a> {
    fn from(value: &'a str) -> Self {
        Self::Variable(Cow::Borrowed(value))
    }
}

impl From<String> for Expression<'_> {
    fn from(value: String) -> Self {
        Self::Variable(Cow::Owned(value))
    }
}

impl<'a> From<Quoted<'a>> for Expression<'a> {
    fn from(value: Quoted<'a>) -> Self {
        Self::String(value)
    }
}

impl<'a> From<Call<'a>> for Expression<'a> {
    fn from(value: Call<'a>) -> Self {
        Self::Call(Box::new(value))
    }
}

impl<'a> From<Closure<'a>> for Expression<'a> {
    fn from(value: Closure<'a>) -> Self {
        Self::Closure(Box::new(value))
    }
}

impl<'a> From<Conditional<'a>> for Expression<'a> {
    fn from(value: Conditional<'a>) -> Self {
        Self::Conditional(Box::new(value))
    }
}

/// `callee<T, U>(a, b)`, optionally with one argument per line.
pub(crate) struct Call<'a> {
    callee: Cow<'a, str>,
    type_params: Vec<StaticType<'a>>,
    args: Vec<Expression<'a>>,
    multiline: Option<usize>,
}

impl<'a> Call<'a> {
    pub(crate) fn new(callee: impl Into<Cow<'a, str>>) -> Self {
        Self {
            callee: callee.into(),
            type_params: Vec::new(),
            args: Vec::new(),
            multiline: None,
        }
    }

    #[must_use]
    pub(crate) fn type_param(mut self, param: impl Into<StaticType<'a>>) -> Self {
        self.type_params.push(param.into());
        self
    }

    #[must_use]
    pub(crate) fn arg(mut self, arg: impl Into<Expression<'a>>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Puts every argument on its own line, indented by `levels` steps. The
    /// closing parenthesis follows the last argument.
    #[must_use]
    pub(crate) fn multiline(mut self, levels: usize) -> Self {
        self.multiline = Some(levels);
        self
    }
}

impl fmt::Display for Call<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.callee)?;

        if !self.type_params.is_empty() {
            f.write_str("<")?;

            for (i, param) in self.type_params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }

                param.fmt(f)?;
            }

            f.write_str(">")?;
        }

        f.write_str("(")?;

        match self.multiline {
            Some(levels) => {
                let indentation = INDENT.repeat(levels);

                for (i, arg) in self.args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }

                    write!(f, "\n{indentation}{arg}")?;
                }
            }
            None => {
                for (i, arg) in self.args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }

                    arg.fmt(f)?;
                }
            }
        }

        f.write_str(")")
    }
}

/// A zero-argument arrow function: `() => body`.
pub(crate) struct Closure<'a> {
    body: Expression<'a>,
}

impl<'a> Closure<'a> {
    pub(crate) fn new(body: impl Into<Expression<'a>>) -> Self {
        Self { body: body.into() }
    }
}

impl fmt::Display for Closure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "() => {}", self.body)
    }
}

/// `test ? consequent : alternate`
pub(crate) struct Conditional<'a> {
    test: Expression<'a>,
    consequent: Expression<'a>,
    alternate: Expression<'a>,
}

impl<'a> Conditional<'a> {
    pub(crate) fn new(
        test: impl Into<Expression<'a>>,
        consequent: impl Into<Expression<'a>>,
        alternate: impl Into<Expression<'a>>,
    ) -> Self {
        Self {
            test: test.into(),
            consequent: consequent.into(),
            alternate: alternate.into(),
        }
    }
}

impl fmt::Display for Conditional<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ? {} : {}", self.test, self.consequent, self.alternate)
    }
}
