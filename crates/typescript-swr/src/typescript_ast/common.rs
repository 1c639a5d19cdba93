use std::{borrow::Cow, fmt};

#[derive(Debug, Clone)]
pub(crate) struct Quoted<'a> {
    inner: Cow<'a, str>,
}

impl<'a> Quoted<'a> {
    pub(crate) fn new(value: impl Into<Cow<'a, str>>) -> Self {
        Self { inner: value.into() }
    }
}

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.inner)
    }
}
