//! retype: parse a source file and print its syntax tree.
//!
//! Usage:
//!   retype [options] <FILE>
//!
//! The whole file is parsed from the chosen entry point. On success the
//! tree (or, with `--tokens`, the token stream) is printed to stdout; on the
//! first syntax error a labelled diagnostic is printed to stderr.

use bumpalo::Bump;
use clap::{ArgAction, Parser as ClapParser};
use miette::{IntoDiagnostic, NamedSource, Report, WrapErr};
use retype_ast::NodeFactory;
use retype_diagnostics::SyntaxError;
use retype_parser::{ParseEntry, ParseOptions, Parser};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser, Debug)]
#[command(name = "retype", about = "retype - a parser for typed ECMAScript", version)]
struct Cli {
    /// Source file to parse.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Grammar production to start from.
    #[arg(short, long, default_value_t = ParseEntry::Program)]
    entry: ParseEntry,

    /// Parse as strict mode code from the start.
    #[arg(long)]
    strict: bool,

    /// JSON file with parse options, e.g. `{"strict": true}`.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the token stream instead of the syntax tree.
    #[arg(long)]
    tokens: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            eprintln!("{report:?}");
            ExitCode::FAILURE
        }
    }
}

fn directive_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Options from `--config`, with command-line flags taking precedence.
fn resolve_options(cli: &Cli) -> miette::Result<ParseOptions> {
    let mut options = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to read config '{}'", path.display()))?;
            ParseOptions::from_json_str(&json)
                .into_diagnostic()
                .wrap_err_with(|| format!("invalid config '{}'", path.display()))?
        }
        None => ParseOptions::default(),
    };
    if cli.strict {
        options.strict = true;
    }
    Ok(options)
}

fn run(cli: &Cli) -> miette::Result<()> {
    let options = resolve_options(cli)?;
    let source = std::fs::read_to_string(&cli.file)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read '{}'", cli.file.display()))?;
    let with_source =
        |err: SyntaxError| Report::new(err).with_source_code(named_source(&cli.file, &source));

    if cli.tokens {
        let tokens = retype_scanner::tokenize(&source).map_err(with_source)?;
        for token in &tokens {
            let start = token.location.start;
            println!(
                "{}:{}\t{:?}\t{:?}",
                start.line + 1,
                start.column + 1,
                token.code,
                token.text
            );
        }
        return Ok(());
    }

    let start = Instant::now();
    let arena = Bump::new();
    let factory = NodeFactory::new(&arena);
    let mut parser = Parser::new(&factory, &source, options).map_err(with_source)?;
    debug!(tokens = parser.tokens().len(), entry = %cli.entry, "scanned");
    let parsed = parser.parse(cli.entry).map_err(with_source)?;
    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        identifiers = factory.identifier_count(),
        "parsed {}",
        cli.file.display()
    );
    println!("{parsed:#?}");
    Ok(())
}

fn named_source(path: &Path, source: &str) -> NamedSource<String> {
    NamedSource::new(path.display().to_string(), source.to_string())
}
