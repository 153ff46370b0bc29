//! The parsing state machine that folds lines of Setext markdown into a section tree.
//!
//! Lines are walked once, top to bottom. Prose is gathered into an accumulator and flushed as
//! a paragraph on each blank line. A heading is only recognised once its underline rule is
//! reached, by which point the title line (and the rule itself) may already have been pushed
//! onto the accumulator, so both are taken back off when the rule matches.
//!
//! The cursors survive between calls to [`Parser::parse`], so several texts can be folded into
//! one tree: repeated titles land on the node created the first time they were seen.

use crate::config::Config;
use crate::exporter;
use crate::formats::markdown::SetextFormat;
use crate::formats::{Format, Rule};
use crate::section::Tree;

/// Incremental parser owning the tree it builds.
///
/// Not reentrant: `parse` needs exclusive access, which `&mut self` enforces within a thread.
/// Sharing a parser between threads needs an external lock around it.
pub struct Parser {
    tree: Tree,
    /// Index of the section that new subsections attach to.
    current_section: Option<usize>,
    /// `(section, subsection)` indices of the subsection receiving paragraphs.
    current_subsection: Option<(usize, usize)>,
    config: Config,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    #[must_use]
    /// Create a parser with an empty tree and default settings.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    #[must_use]
    /// Create a parser with an empty tree and the given settings.
    pub fn with_config(config: Config) -> Self {
        Self {
            tree: Tree::default(),
            current_section: None,
            current_subsection: None,
            config,
        }
    }

    /// Fold `text` into the tree and return it.
    ///
    /// Never fails: text without any heading leaves the tree untouched, and a subsection that
    /// appears before any section is filed under the configured default section.
    pub fn parse(&mut self, text: &str) -> &Tree {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut paragraph: Vec<&str> = Vec::new();

        for (idx, &line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                self.flush(&mut paragraph);
                continue;
            }

            if self.collecting() {
                paragraph.push(line);
            }

            let Some(rule) = SetextFormat.classify(line, self.config.min_rule_length) else {
                continue;
            };
            let title = idx.checked_sub(1).map_or("", |prev| lines[prev]);
            match rule {
                Rule::Section => {
                    self.enter_section(title);
                }
                Rule::Subsection => self.enter_subsection(title),
            }

            // Title   Subject
            // =====   -------   <- current line
            let keep = paragraph.len().saturating_sub(2);
            paragraph.truncate(keep);
        }

        if self.config.flush_trailing_paragraph {
            self.flush(&mut paragraph);
        } else if !paragraph.is_empty() {
            tracing::debug!(
                lines = paragraph.len(),
                "dropping paragraph not terminated by a blank line"
            );
        }

        &self.tree
    }

    #[must_use]
    /// The tree built so far.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    #[must_use]
    /// Consume the parser, keeping only its tree.
    pub fn into_tree(self) -> Tree {
        self.tree
    }

    #[must_use]
    /// Render the tree built so far back to markdown.
    pub fn export(&self) -> String {
        exporter::export(&self.tree)
    }

    /// Lines are only gathered once both a section and a subsection are selected.
    fn collecting(&self) -> bool {
        self.current_section.is_some() && self.current_subsection.is_some()
    }

    fn flush(&mut self, paragraph: &mut Vec<&str>) {
        if paragraph.is_empty() || self.current_section.is_none() {
            return;
        }
        let Some((section, subsection)) = self.current_subsection else {
            return;
        };
        let text = paragraph.join("\n");
        tracing::trace!(lines = paragraph.len(), "flushing paragraph");
        self.tree.sections[section].subsections[subsection]
            .paragraphs
            .push(text);
        paragraph.clear();
    }

    fn enter_section(&mut self, title: &str) -> usize {
        let idx = self.tree.resolve_section(title);
        self.current_section = Some(idx);
        idx
    }

    fn enter_subsection(&mut self, title: &str) {
        let section = match self.current_section {
            Some(idx) => idx,
            None => {
                let fallback = self.config.default_section_title.clone();
                self.enter_section(&fallback)
            }
        };
        let subsection = self.tree.sections[section].resolve_subsection(title);
        self.current_subsection = Some((section, subsection));
    }
}

#[cfg(test)]
#[path = "tests/parser.rs"]
mod tests;
