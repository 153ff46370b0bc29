//! mdcontext: Setext-sectioned markdown to a section tree and back.
//!
//! Documents are split by `===` underlined titles into sections and by `---` underlined titles
//! into subsections; the prose under each subsection is kept as a list of paragraphs. The
//! [`parser::Parser`] folds text into a [`section::Tree`], and [`exporter::export`] turns a tree
//! back into canonical markdown.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod exporter;
pub mod formats;
pub mod input;
pub mod parser;
pub mod section;

pub use error::Error;
pub use exporter::{export, export_value, ExportInput};
pub use parser::Parser;
pub use section::{Section, Subsection, Tree};
