//! cli/template.rs
//! Output templates: literal text with `{field}` placeholders.
//!
//! - `{name}` expands to one field of the [`RenderContext`]
//! - `{{` and `}}` are literal braces
//! - anything else involving braces is a [`TemplateError`]
//!
//! Templates are compiled once, before any file is processed.

use thiserror::Error;

use super::context::{Field, RenderContext};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown field {{{name}}} in format (known: {})", known_fields())]
    UnknownField { name: String },

    #[error("unclosed '{{' at byte {offset} in format")]
    UnclosedPlaceholder { offset: usize },

    #[error("single '}}' at byte {offset} in format (use '}}}}' for a literal brace)")]
    UnmatchedBrace { offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn compile(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if chars.peek().is_some_and(|&(_, next)| next == '{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek().is_some_and(|&(_, next)| next == '}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(TemplateError::UnmatchedBrace { offset }),
                '{' => {
                    let rest = &source[offset + 1..];
                    let Some(len) = rest.find('}') else {
                        return Err(TemplateError::UnclosedPlaceholder { offset });
                    };
                    let name = &rest[..len];
                    let field = Field::from_name(name).ok_or_else(|| TemplateError::UnknownField {
                        name: name.to_string(),
                    })?;

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));

                    // Skip the name and the closing brace.
                    while chars.next_if(|&(i, _)| i <= offset + 1 + len).is_some() {}
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    pub fn render(&self, context: &RenderContext) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => out.push_str(context.get(*field)),
            }
        }
        out
    }
}

fn known_fields() -> String {
    Field::ALL
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}
