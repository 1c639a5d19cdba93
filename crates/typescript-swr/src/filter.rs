use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::Patterns;

/// A compiled set of operation name globs.
///
/// Patterns match the whole name and support `*`, `?`, bracket classes
/// (`feed[2-3]`, `feed[24]`) and `{a,b}` alternatives. A leading `!` negates
/// a pattern: `!feed` matches every name except `feed`.
#[derive(Debug, Clone)]
pub struct GlobPatterns {
    positive: GlobSet,
    negated: GlobSet,
}

impl GlobPatterns {
    /// Invalid patterns are reported and left out. They never match anything.
    pub fn new(patterns: &Patterns) -> Self {
        let mut positive = GlobSetBuilder::new();
        let mut negated = GlobSetBuilder::new();

        for pattern in patterns.iter() {
            let (builder, glob) = match pattern.strip_prefix('!') {
                Some(glob) => (&mut negated, glob),
                None => (&mut positive, pattern),
            };

            match Glob::new(glob) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(error) => tracing::warn!("Ignoring invalid operation name pattern `{pattern}`: {error}"),
            }
        }

        Self {
            positive: build(positive),
            negated: build(negated),
        }
    }

    /// True if any pattern matches. A negated pattern matches the names its
    /// glob does not.
    pub fn is_match(&self, name: &str) -> bool {
        self.positive.is_match(name) || self.negated.matches(name).len() < self.negated.len()
    }
}

fn build(builder: GlobSetBuilder) -> GlobSet {
    builder.build().unwrap_or_else(|error| {
        tracing::warn!("Ignoring operation name patterns: {error}");
        GlobSet::empty()
    })
}
