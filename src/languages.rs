//! Language identifier table.
//!
//! Localisation files carry an `l_<language>` identifier in their filename
//! and on their first line (`l_english`, `l_simp_chinese`, ...). The
//! translation provider wants ISO-style codes (`en`, `zh-CN`, ...). This
//! table is the complete set the game ships with; any other identifier is a
//! configuration error, not a file to be skipped.

/// Known language identifiers paired with their provider codes.
pub const KNOWN_LANGUAGES: [(&str, &str); 7] = [
    ("l_english", "en"),
    ("l_french", "fr"),
    ("l_german", "de"),
    ("l_spanish", "es"),
    ("l_simp_chinese", "zh-CN"),
    ("l_russian", "ru"),
    ("l_korean", "ko"),
];

/// Look up the provider code for a language identifier.
///
/// Returns `None` when the identifier is not in [`KNOWN_LANGUAGES`].
pub fn provider_code(identifier: &str) -> Option<&'static str> {
    KNOWN_LANGUAGES
        .iter()
        .find(|(id, _)| *id == identifier)
        .map(|(_, code)| *code)
}

/// All known language identifiers, in table order.
pub fn language_ids() -> [&'static str; 7] {
    KNOWN_LANGUAGES.map(|(id, _)| id)
}
