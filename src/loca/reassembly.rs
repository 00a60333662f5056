//! Rebuilds a localisation line from translated sub-phrases.
//!
//! The provider returns one translated string per sub-phrase, sometimes with
//! HTML entity escaping applied (`&#39;`, `&amp;`, ...). Reassembly decodes
//! the entities, rejoins the sub-phrases with the `\n` escape, reapplies the
//! stripped formatting tag, and puts the value back between its original
//! prefix and trailing comment.

use crate::loca::classify::{FormatTag, PhraseGroup};
use crate::loca::line::LocaLine;

/// Build the output line for a translated value.
///
/// `translated` must contain exactly one entry per sub-phrase of `phrases`,
/// in the same order.
pub fn rebuild_line(
    entry: &LocaLine<'_>,
    phrases: &PhraseGroup,
    tag: Option<&FormatTag>,
    translated: &[String],
) -> String {
    assert_eq!(
        translated.len(),
        phrases.len(),
        "Translated phrase count must match the source phrase group"
    );
    let decoded: Vec<String> = translated.iter().map(|p| decode_entities(p)).collect();
    let mut value = PhraseGroup::rejoin(&decoded);
    if let Some(tag) = tag {
        value = tag.wrap(&value);
    }
    entry.reassemble(&value)
}

/// Reverse provider entity escaping. Sequences that are not valid entities
/// are left verbatim; a bad translation is still better than a lost line.
pub fn decode_entities(phrase: &str) -> String {
    html_escape::decode_html_entities(phrase).into_owned()
}
