//! Rendering of section trees back to Setext markdown.
//!
//! A well-typed [`Tree`] always renders in full. Trees arriving from outside the crate (as
//! JSON, say) may be malformed in two different ways, and the two are treated differently:
//! input that is not tree-shaped at all is rejected as a whole, while individual sections or
//! subsections missing a required field are skipped and the rest is still rendered.

use crate::formats::markdown::SetextFormat;
use crate::formats::{Format, Rule};
use crate::section::Tree;
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Tree whose entries may lack some of their fields.
pub struct SparseTree {
    /// Top-level sections, possibly incomplete.
    pub sections: Vec<SparseSection>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Section that is only rendered if both fields are present.
pub struct SparseSection {
    /// Title of the section.
    pub title: Option<String>,
    /// Subsections of the section.
    pub subsections: Option<Vec<SparseSubsection>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Subsection that is only rendered if both fields are present.
pub struct SparseSubsection {
    /// Title of the subsection.
    pub title: Option<String>,
    /// Paragraphs of the subsection.
    pub paragraphs: Option<Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Anything handed to the exporter from outside the crate.
pub enum ExportInput {
    /// A tree-shaped value, with entries that may be incomplete.
    Tree(SparseTree),
    /// A value that cannot be read as a tree at all.
    Invalid,
}

/// Marks a value that cannot be read as a tree.
struct NotATree(&'static str);

impl From<&Value> for ExportInput {
    fn from(value: &Value) -> Self {
        match sparse_tree(value) {
            Ok(tree) => Self::Tree(tree),
            Err(NotATree(reason)) => {
                tracing::debug!(reason, "export input is not a tree");
                Self::Invalid
            }
        }
    }
}

impl From<Value> for ExportInput {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

/// The root must be an object holding a list of sections. Entries of that list (and of each
/// section's subsections) that are not objects are kept as empty entries, which are skipped
/// when rendering. Present fields of the wrong type reject the whole value.
fn sparse_tree(value: &Value) -> Result<SparseTree, NotATree> {
    let map = value.as_object().ok_or(NotATree("root is not an object"))?;
    let sections =
        field(map, &["sections", "documents"]).ok_or(NotATree("no sections field"))?;
    let sections = list(sections)?
        .iter()
        .map(sparse_section)
        .collect::<Result<Vec<_>, NotATree>>()?;
    Ok(SparseTree { sections })
}

fn sparse_section(value: &Value) -> Result<SparseSection, NotATree> {
    let Some(map) = value.as_object() else {
        return Ok(SparseSection::default());
    };
    let subsections = match field(map, &["subsections", "subjects"]) {
        Some(value) => Some(
            list(value)?
                .iter()
                .map(sparse_subsection)
                .collect::<Result<Vec<_>, NotATree>>()?,
        ),
        None => None,
    };
    Ok(SparseSection {
        title: text(field(map, &["title"]))?,
        subsections,
    })
}

fn sparse_subsection(value: &Value) -> Result<SparseSubsection, NotATree> {
    let Some(map) = value.as_object() else {
        return Ok(SparseSubsection::default());
    };
    let paragraphs = match field(map, &["paragraphs", "contexts"]) {
        Some(value) => Some(
            list(value)?
                .iter()
                .map(|p| {
                    p.as_str()
                        .map(str::to_string)
                        .ok_or(NotATree("paragraph is not a string"))
                })
                .collect::<Result<Vec<_>, NotATree>>()?,
        ),
        None => None,
    };
    Ok(SparseSubsection {
        title: text(field(map, &["title"]))?,
        paragraphs,
    })
}

/// First of `names` present in `map` with a non-null value.
fn field<'a>(map: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .find_map(|name| map.get(*name))
        .filter(|value| !value.is_null())
}

fn list(value: &Value) -> Result<&Vec<Value>, NotATree> {
    value.as_array().ok_or(NotATree("expected a list"))
}

fn text(value: Option<&Value>) -> Result<Option<String>, NotATree> {
    value
        .map(|v| {
            v.as_str()
                .map(str::to_string)
                .ok_or(NotATree("title is not a string"))
        })
        .transpose()
}

impl From<&Tree> for SparseTree {
    fn from(tree: &Tree) -> Self {
        Self {
            sections: tree
                .sections
                .iter()
                .map(|section| SparseSection {
                    title: Some(section.title.clone()),
                    subsections: Some(
                        section
                            .subsections
                            .iter()
                            .map(|sub| SparseSubsection {
                                title: Some(sub.title.clone()),
                                paragraphs: Some(sub.paragraphs.clone()),
                            })
                            .collect(),
                    ),
                })
                .collect(),
        }
    }
}

#[must_use]
/// Render a tree as Setext markdown.
pub fn export(tree: &Tree) -> String {
    let mut out = String::new();
    for section in &tree.sections {
        push_heading(&mut out, Rule::Section, &section.title);
        for sub in &section.subsections {
            push_heading(&mut out, Rule::Subsection, &sub.title);
            push_paragraphs(&mut out, &sub.paragraphs);
        }
    }
    out
}

#[must_use]
/// Render loosely-typed input, or `None` if it is not tree-shaped.
///
/// Sections without a title or subsections, and subsections without a title or paragraphs,
/// are left out of the output.
pub fn export_input(input: &ExportInput) -> Option<String> {
    let ExportInput::Tree(tree) = input else {
        return None;
    };
    let mut out = String::new();
    for section in &tree.sections {
        let (Some(title), Some(subsections)) = (&section.title, &section.subsections) else {
            tracing::debug!(title = ?section.title, "skipping incomplete section");
            continue;
        };
        push_heading(&mut out, Rule::Section, title);
        for sub in subsections {
            let (Some(title), Some(paragraphs)) = (&sub.title, &sub.paragraphs) else {
                tracing::debug!(title = ?sub.title, "skipping incomplete subsection");
                continue;
            };
            push_heading(&mut out, Rule::Subsection, title);
            push_paragraphs(&mut out, paragraphs);
        }
    }
    Some(out)
}

#[must_use]
/// Render a JSON value, or `None` if it is not tree-shaped.
pub fn export_value(value: &Value) -> Option<String> {
    export_input(&ExportInput::from(value))
}

fn push_heading(out: &mut String, rule: Rule, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&SetextFormat.underline(rule, title));
    out.push_str("\n\n");
}

fn push_paragraphs(out: &mut String, paragraphs: &[String]) {
    for paragraph in paragraphs {
        out.push_str(paragraph);
        out.push('\n');
    }
}

#[cfg(test)]
#[path = "tests/exporter.rs"]
mod tests;
