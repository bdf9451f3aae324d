use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use mdlite_core::{HtmlEmitOptions, Tag, build_tags, render_with_options, split_paragraphs};
use thiserror::Error;

/// Convert underscore-flavoured Markdown to HTML, one paragraph per line.
#[derive(Debug, Parser)]
#[command(name = "mdlite", version)]
struct Cli {
    /// Input file; reads stdin when omitted.
    input: Option<PathBuf>,

    /// Print the resolved tags of every paragraph as JSON instead of HTML.
    #[arg(long)]
    tags: bool,

    /// Escape special characters inside link href and title values.
    #[arg(long)]
    escape_link_attributes: bool,

    /// Log pipeline decisions (RUST_LOG overrides this).
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to serialize tags: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(err) = run(&cli) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let source = read_source(cli.input.as_ref())?;
    log::debug!("read {} bytes", source.len());

    if cli.tags {
        let paragraphs: Vec<Vec<Tag>> = split_paragraphs(&source).map(build_tags).collect();
        println!("{}", serde_json::to_string_pretty(&paragraphs)?);
        return Ok(());
    }

    let options = HtmlEmitOptions {
        escape_link_attributes: cli.escape_link_attributes,
    };
    print!("{}", render_with_options(&source, &options));
    Ok(())
}

fn read_source(input: Option<&PathBuf>) -> Result<String, CliError> {
    match input {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(CliError::Stdin)?;
            Ok(buffer)
        }
    }
}
