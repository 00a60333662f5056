//! Decides whether a quoted value is safe to machine translate.
//!
//! The localisation format embeds three kinds of markup inside values:
//! `$KEY$` cross-references that must survive verbatim, `#tag ... #!`
//! formatting spans, and a literal `\n` escape separating sub-phrases.
//! Values a translator could corrupt are passed through unchanged; the only
//! formatting handled is a single tag wrapping the whole value, which is
//! stripped before translation and reapplied after.

/// Marker that closes a formatting span.
pub const CLOSING_MARKER: &str = "#!";

/// Two-character newline escape used inside values.
pub const NEWLINE_ESCAPE: &str = "\\n";

/// A markup token that wraps an entire value, e.g. `#bold` or `#R`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTag(pub String);

impl FormatTag {
    /// Wrap translated text back in this tag and the closing marker.
    pub fn wrap(&self, text: &str) -> String {
        format!("{} {}{}", self.0, text, CLOSING_MARKER)
    }
}

/// The translatable text of one value, split on the `\n` escape.
///
/// Sub-phrases are translated as one batch and rejoined with the same
/// escape, so translated values keep their line breaks in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseGroup {
    phrases: Vec<String>,
}

impl PhraseGroup {
    /// Split text on the literal `\n` escape. Empty sub-phrases are kept so
    /// that rejoining reproduces the original break positions.
    pub fn split(text: &str) -> Self {
        PhraseGroup {
            phrases: text.split(NEWLINE_ESCAPE).map(str::to_string).collect(),
        }
    }

    /// The sub-phrases, in value order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Number of sub-phrases. Always at least one.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Rejoin translated sub-phrases with the `\n` escape.
    pub fn rejoin(parts: &[String]) -> String {
        parts.join(NEWLINE_ESCAPE)
    }
}

/// Classification outcome for one quoted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationDecision {
    /// Emit the line unchanged.
    PassThrough,
    /// Translate the sub-phrases and rebuild the line.
    Translatable {
        phrases: PhraseGroup,
        tag: Option<FormatTag>,
    },
}

/// Classify a quoted value.
///
/// Passed through unchanged: empty values, values containing a `$KEY$`
/// reference, values with formatting the reconstructor cannot reproduce
/// (mid-value tags, unterminated spans), and a bare tag with no text.
pub fn classify(value: &str) -> TranslationDecision {
    if value.is_empty() || contains_reference(value) || has_unsafe_formatting(value) {
        return TranslationDecision::PassThrough;
    }
    if let Some(rest) = value.strip_prefix('#') {
        // Single tag wrapping the whole value: split off the tag token and
        // drop the closing marker.
        let Some(space) = rest.find(' ') else {
            return TranslationDecision::PassThrough;
        };
        let tag = FormatTag(value[..space + 1].to_string());
        let text = &value[space + 2..value.len() - CLOSING_MARKER.len()];
        return TranslationDecision::Translatable {
            phrases: PhraseGroup::split(text),
            tag: Some(tag),
        };
    }
    TranslationDecision::Translatable {
        phrases: PhraseGroup::split(value),
        tag: None,
    }
}

/// `$KEY$` detection: two dollar signs with at least one character between
/// them. A lone `$` is plain text.
fn contains_reference(value: &str) -> bool {
    match (value.find('$'), value.rfind('$')) {
        (Some(first), Some(last)) => last - first >= 2,
        _ => false,
    }
}

/// Formatting the reconstructor cannot put back: any `#` in a value that
/// does not end with the closing marker, or a tag opening past the start of
/// the value.
fn has_unsafe_formatting(value: &str) -> bool {
    if !value.contains('#') {
        return false;
    }
    !value.ends_with(CLOSING_MARKER) || has_tag_opener_past_start(value)
}

/// A tag opener is `#` followed by a token and a space, with no `!` before
/// the space. Only the tag at position zero can be stripped and reapplied.
fn has_tag_opener_past_start(value: &str) -> bool {
    for (index, _) in value.match_indices('#') {
        if index == 0 {
            continue;
        }
        let tail = &value[index + 1..];
        let token = &tail[..tail.find('!').unwrap_or(tail.len())];
        if token.char_indices().any(|(offset, c)| c == ' ' && offset >= 1) {
            return true;
        }
    }
    false
}
