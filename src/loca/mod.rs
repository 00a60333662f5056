//! The localisation file format.
//!
//! Four stages: [`line`] splits a raw line into prefix, quoted value and
//! trailing comment; [`classify`] decides whether the value is safe to
//! translate and strips whole-value formatting; [`reassembly`] rebuilds the
//! line from translated sub-phrases; [`file`] handles the filename
//! convention and BOM-aware reading and writing.

pub mod classify;
pub mod file;
pub mod line;
pub mod reassembly;

pub use classify::{
    CLOSING_MARKER, FormatTag, NEWLINE_ESCAPE, PhraseGroup, TranslationDecision, classify,
};
pub use file::LocaFileName;
pub use line::LocaLine;
pub use reassembly::rebuild_line;
