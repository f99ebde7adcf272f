//! cli/escape.rs
//! Backslash-escaping of a user-chosen set of characters.

use regex::{Captures, Regex};

/// Puts a backslash in front of every occurrence of any character in a set.
/// An empty set escapes nothing.
#[derive(Debug, Clone)]
pub struct Escaper {
    pattern: Option<Regex>,
}

impl Escaper {
    /// Each character of `chars` is taken on its own; duplicates are harmless.
    pub fn new(chars: &str) -> Result<Self, regex::Error> {
        let mut alternatives: Vec<String> = Vec::new();
        for c in chars.chars() {
            let literal = regex::escape(c.encode_utf8(&mut [0; 4]));
            if !alternatives.contains(&literal) {
                alternatives.push(literal);
            }
        }

        if alternatives.is_empty() {
            return Ok(Self { pattern: None });
        }

        let pattern = Regex::new(&alternatives.join("|"))?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn escape(&self, value: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return value.to_string();
        };

        pattern
            .replace_all(value, |caps: &Captures| format!("\\{}", &caps[0]))
            .into_owned()
    }
}
