//! Parser settings read from mdcontext.toml.
//!
//! Every key is optional; anything left out takes the default declared on the field. The keys
//! set the fallback section title, the minimum underline length, and whether a paragraph left
//! open at the end of the input is kept.

use facet::Facet;
use std::fs;
use std::path::Path;

/// File looked up in the working directory when no explicit path is given.
pub const CONFIG_FILE: &str = "mdcontext.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// Parser preferences loaded from mdcontext.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "untitled".to_string())]
    /// Title of the section synthesised when a subsection appears before any section.
    pub default_section_title: String,
    #[facet(default = 3)]
    /// Shortest run of `=` or `-` recognised as a heading underline.
    pub min_rule_length: usize,
    #[facet(default = false)]
    /// Keep a final paragraph that is not followed by a blank line.
    pub flush_trailing_paragraph: bool,
}

impl Default for Config {
    /// The field defaults, as an empty mdcontext.toml would give.
    ///
    /// # Panics
    ///
    /// Panics if the field defaults cannot be deserialised, which would be a bug in their
    /// declarations.
    fn default() -> Self {
        facet_toml::from_str::<Self>("").expect("every field declares a default")
    }
}

impl Config {
    #[must_use]
    /// Load configuration from mdcontext.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents).unwrap_or_else(|| {
                tracing::warn!(path = %path.display(), "ignoring malformed config");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    #[must_use]
    /// Parse a TOML document, filling unset keys with defaults.
    pub fn from_toml(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
