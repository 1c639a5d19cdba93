//! Just enough TypeScript syntax to write the hooks module.

mod common;
mod expression;
mod import;
mod method;
mod r#type;

pub(crate) use common::Quoted;
pub(crate) use expression::{Call, Closure, Conditional, Expression};
pub(crate) use import::Import;
pub(crate) use method::{Method, Property};
pub(crate) use r#type::StaticType;

pub(crate) const INDENT: &str = "  ";

/// Indents every line of `text`, the first one included, by `levels` steps.
pub(crate) fn indent_multiline(text: &str, levels: usize) -> String {
    let indentation = INDENT.repeat(levels);
    let mut indented = String::with_capacity(text.len() + indentation.len());

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            indented.push('\n');
        }

        indented.push_str(&indentation);
        indented.push_str(line);
    }

    indented
}
