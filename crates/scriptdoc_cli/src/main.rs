//! sdoc: Render JSON document trees as Python-style script text.
//!
//! Usage:
//!   sdoc [options] [FILE]
//!
//! Reads the document from FILE, or from stdin when no file is given.

use clap::Parser as ClapParser;
use miette::{Context, IntoDiagnostic};
use scriptdoc_doc::codec;
use scriptdoc_doc::visitor::KindCounter;
use scriptdoc_doc::Doc;
use scriptdoc_options::{load_config, Config};
use scriptdoc_printer::{doc_to_python_script, PrinterOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

#[derive(ClapParser, Debug)]
#[command(name = "sdoc", version, about = "scriptdoc - render document trees as Python-style script")]
struct Cli {
    /// JSON document to render. Reads stdin when omitted.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to scriptdoc.json.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Spaces per indentation level.
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Do not print statement comments or docstrings.
    #[arg(long = "no-comments")]
    no_comments: bool,

    /// Write the script here instead of stdout.
    #[arg(short = 'o', long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print per-kind node counts to stderr.
    #[arg(long)]
    stats: bool,

    /// Enable debug logging.
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let options = resolve_options(&cli)?;
    let source = read_input(cli.file.as_deref())?;
    let docs = codec::from_json_str(&source)?;

    if cli.stats {
        print_stats(&docs);
    }

    let script = doc_to_python_script(&docs, &options);
    write_output(cli.output.as_deref(), &script)
}

fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file values with command-line flags layered on top.
fn resolve_options(cli: &Cli) -> miette::Result<PrinterOptions> {
    let cwd = std::env::current_dir()
        .into_diagnostic()
        .wrap_err("failed to read the working directory")?;
    let file = load_config(cli.config.as_deref(), &cwd)?;
    let flags = Config {
        indent_spaces: cli.indent,
        print_comments: cli.no_comments.then_some(false),
    };
    Ok(file.merge(flags).resolve()?)
}

fn read_input(file: Option<&Path>) -> miette::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .into_diagnostic()
                .wrap_err("failed to read stdin")?;
            Ok(source)
        }
    }
}

fn print_stats(docs: &[Doc]) {
    let counter = KindCounter::count(docs);
    for (kind, count) in counter.iter() {
        eprintln!("{:<12} {}", kind.name(), count);
    }
    eprintln!("{:<12} {}", "total", counter.total());
    eprintln!("{:<12} {}", "max depth", counter.max_depth());
}

fn write_output(output: Option<&Path>, script: &str) -> miette::Result<()> {
    match output {
        Some(path) => std::fs::write(path, script)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(script.as_bytes())
                .and_then(|()| stdout.flush())
                .into_diagnostic()
                .wrap_err("failed to write stdout")
        }
    }
}
