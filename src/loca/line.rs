//! Structural parsing of a single localisation line.
//!
//! A translatable line looks like:
//!
//! ```text
//!  wedding_greeting:0 "A toast to the happy couple!" # optional note
//! ```
//!
//! Everything before the first double quote is the prefix (key, revision
//! number, indentation), the quoted section is the value, and an optional
//! trailing comment may follow. Lines that do not fit this shape are left
//! untouched by the translator.

/// One localisation line split into its structural parts.
///
/// Borrows from the raw line so that reassembly can reproduce the prefix and
/// comment byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaLine<'a> {
    /// Everything before the opening quote, untouched.
    pub prefix: &'a str,
    /// The quoted value, quotes excluded.
    pub value: &'a str,
    /// Trailing comment including its leading spaces, if present.
    pub comment: Option<&'a str>,
}

impl<'a> LocaLine<'a> {
    /// Split a raw line into prefix, quoted value and trailing comment.
    ///
    /// Returns `None` when the line has no quoted section, when the quote
    /// opens the line (no key), when the value is unterminated, or when
    /// anything other than a ` # ...` comment follows the closing quote.
    pub fn parse(line: &'a str) -> Option<Self> {
        let open = line.find('"')?;
        if open == 0 {
            return None;
        }
        let (prefix, rest) = line.split_at(open);
        let rest = &rest[1..];
        let close = rest.find('"')?;
        let value = &rest[..close];
        let after = &rest[close + 1..];
        let comment = if after.is_empty() {
            None
        } else if is_trailing_comment(after) {
            Some(after)
        } else {
            return None;
        };
        Some(LocaLine {
            prefix,
            value,
            comment,
        })
    }

    /// Rebuild the full line around a replacement value.
    ///
    /// `reassemble(self.value)` reproduces the original line exactly.
    pub fn reassemble(&self, value: &str) -> String {
        let mut line = String::with_capacity(
            self.prefix.len() + value.len() + self.comment.map_or(0, str::len) + 2,
        );
        line.push_str(self.prefix);
        line.push('"');
        line.push_str(value);
        line.push('"');
        if let Some(comment) = self.comment {
            line.push_str(comment);
        }
        line
    }
}

/// A trailing comment is optional spaces, then `# ` and anything after.
fn is_trailing_comment(after: &str) -> bool {
    after.trim_start_matches(' ').starts_with("# ")
}
