//! Section tree produced by the parser and consumed by the exporter.
//!
//! A document is an ordered list of top-level sections, each holding an ordered list of
//! subsections, each holding the paragraphs written under it. Titles are unique among their
//! siblings: the parser reuses an existing node rather than adding a second one with the same
//! title, so a tree only ever grows by appending.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Root of a parsed document.
pub struct Tree {
    /// Top-level sections in order of first appearance.
    #[serde(alias = "documents")]
    pub sections: Vec<Section>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Top-level division of a document, introduced by a `===` underlined title.
pub struct Section {
    /// Title text as written on the line above the rule.
    pub title: String,
    /// Second-level divisions in order of first appearance.
    #[serde(alias = "subjects")]
    pub subsections: Vec<Subsection>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Second-level division of a section, introduced by a `---` underlined title.
pub struct Subsection {
    /// Title text as written on the line above the rule.
    pub title: String,
    /// Blocks of prose, each with its internal newlines preserved.
    #[serde(alias = "contexts")]
    pub paragraphs: Vec<String>,
}

impl Tree {
    #[must_use]
    /// Look up a top-level section by exact title.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }

    #[must_use]
    /// Whether no section has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    /// Total number of paragraphs across every subsection.
    pub fn paragraph_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|section| &section.subsections)
            .map(|subsection| subsection.paragraphs.len())
            .sum()
    }

    /// Index of the section titled `title`, appending an empty one if absent.
    pub(crate) fn resolve_section(&mut self, title: &str) -> usize {
        if let Some(idx) = self.sections.iter().position(|s| s.title == title) {
            tracing::debug!(title, idx, "reusing section");
            return idx;
        }
        self.sections.push(Section::new(title));
        tracing::debug!(title, "created section");
        self.sections.len() - 1
    }
}

impl Section {
    #[must_use]
    /// Create a section with no subsections.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subsections: Vec::new(),
        }
    }

    #[must_use]
    /// Look up a subsection by exact title.
    pub fn subsection(&self, title: &str) -> Option<&Subsection> {
        self.subsections.iter().find(|sub| sub.title == title)
    }

    /// Index of the subsection titled `title`, appending an empty one if absent.
    pub(crate) fn resolve_subsection(&mut self, title: &str) -> usize {
        if let Some(idx) = self.subsections.iter().position(|s| s.title == title) {
            tracing::debug!(section = %self.title, title, idx, "reusing subsection");
            return idx;
        }
        self.subsections.push(Subsection::new(title));
        tracing::debug!(section = %self.title, title, "created subsection");
        self.subsections.len() - 1
    }
}

impl Subsection {
    #[must_use]
    /// Create a subsection with no paragraphs.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            paragraphs: Vec::new(),
        }
    }
}
