//! mdcontext: convert Setext-sectioned markdown to a JSON section tree and back.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser as ClapParser, Subcommand};
use mdcontext::{config, exporter, input, Error, Parser};
use std::path::PathBuf;

#[derive(ClapParser)]
#[command(name = "mdcontext")]
#[command(about = "Setext-sectioned markdown to a section tree and back", long_about = None)]
struct Args {
    /// Load settings from this file instead of mdcontext.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse markdown files (stdin if none) into one tree and print it as JSON
    Parse {
        /// Markdown files, merged in the order given
        #[arg(value_name = "PATH")]
        paths: Vec<PathBuf>,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Render a JSON tree (stdin if no path) back to markdown
    Export {
        /// JSON file holding a tree
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();
    let cfg = match &args.config {
        Some(path) => config::Config::load_from(path),
        None => config::Config::load(),
    };

    match args.command {
        Command::Parse { paths, compact } => {
            let mut parser = Parser::with_config(cfg);
            if paths.is_empty() {
                parser.parse(&input::read_source(None)?);
            } else {
                input::parse_sources(&mut parser, &paths)?;
            }
            let json = if compact {
                serde_json::to_string(parser.tree())?
            } else {
                serde_json::to_string_pretty(parser.tree())?
            };
            println!("{json}");
        }
        Command::Export { path } => {
            let text = input::read_source(path.as_deref())?;
            let value: serde_json::Value = serde_json::from_str(&text)?;
            let markdown = exporter::export_value(&value).ok_or(Error::InvalidTree)?;
            print!("{markdown}");
        }
    }

    Ok(())
}
