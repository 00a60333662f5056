//! Filename convention and BOM-aware file I/O.
//!
//! Localisation files are named `<stem>_<l_language>.yml` and start with a
//! UTF-8 byte order mark. Output files keep both conventions so the game
//! accepts them as-is.

use std::fs;
use std::io;
use std::path::Path;

use regex::Regex;

/// Byte order mark the game writes at the start of its files.
const BOM: char = '\u{feff}';

/// A localisation filename split into stem and language identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaFileName {
    pub stem: String,
    pub language: String,
}

impl LocaFileName {
    /// Parse `<stem>_<l_language>.yml`. Anything else is rejected.
    pub fn parse(file_name: &str) -> Option<Self> {
        let re = Regex::new(r"^(.*)_(l_[a-z_]*)\.yml$").unwrap();
        let caps = re.captures(file_name)?;
        Some(LocaFileName {
            stem: caps[1].to_string(),
            language: caps[2].to_string(),
        })
    }

    /// The filename this file takes in another language.
    pub fn with_language(&self, language: &str) -> String {
        format!("{}_{}.yml", self.stem, language)
    }
}

/// Read a file as right-trimmed lines, dropping a leading BOM if present.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let content = content.strip_prefix(BOM).unwrap_or(&content);
    Ok(content.lines().map(|l| l.trim_end().to_string()).collect())
}

/// Write lines with a BOM and `\n` endings.
pub fn write_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum::<usize>() + 3);
    out.push(BOM);
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    fs::write(path, out)
}
