//! Markdown format implementation for Setext-style headings.
//!
//! Titles are underlined with `=` for top-level sections and `-` for subsections.

use crate::formats::Format;

/// Setext heading markers (`===` and `---` underlines).
pub struct SetextFormat;

impl Format for SetextFormat {
    fn section_marker(&self) -> char {
        '='
    }

    fn subsection_marker(&self) -> char {
        '-'
    }
}

#[cfg(test)]
#[path = "../tests/formats.rs"]
mod tests;
