//! Format trait for underline-style heading syntaxes.
//!
//! This module defines the `Format` trait which abstracts over the characters a document uses
//! to underline its titles, so that the parser and the exporter agree on what a heading rule
//! looks like.

pub mod markdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Heading level signalled by an underline rule.
pub enum Rule {
    /// Top-level title underline.
    Section,
    /// Second-level title underline.
    Subsection,
}

/// Characters that make up heading underlines, and how to recognise and draw them.
pub trait Format {
    /// Character repeated to underline a top-level title.
    fn section_marker(&self) -> char;

    /// Character repeated to underline a second-level title.
    fn subsection_marker(&self) -> char;

    /// Marker character for the given heading level.
    fn marker(&self, rule: Rule) -> char {
        match rule {
            Rule::Section => self.section_marker(),
            Rule::Subsection => self.subsection_marker(),
        }
    }

    /// Recognise a heading rule: a run of at least `min_run` markers starting at column 0.
    ///
    /// Text following the run does not prevent a match. A `min_run` of zero is treated as one.
    fn classify(&self, line: &str, min_run: usize) -> Option<Rule> {
        let min_run = min_run.max(1);
        [Rule::Section, Rule::Subsection].into_iter().find(|&rule| {
            let marker = self.marker(rule);
            line.chars().take_while(|&c| c == marker).count() >= min_run
        })
    }

    /// Underline for `title`, one marker per character of the title.
    fn underline(&self, rule: Rule, title: &str) -> String {
        std::iter::repeat_n(self.marker(rule), title.chars().count()).collect()
    }
}
