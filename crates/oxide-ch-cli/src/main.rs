//! oxide-ch CLI
//!
//! Command-line tool that classifies ClickHouse SQL for highlighting.

mod render;

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::{Level, debug, info, warn};
use tracing_subscriber::FmtSubscriber;

use oxide_ch_lexer::{StateId, SymbolCatalog, Tokenizer, Tokens};

/// Tokenize and highlight ClickHouse SQL.
#[derive(Parser)]
#[command(name = "oxide-ch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON symbol catalog with the server's keywords, functions and types.
    #[arg(short, long, env = "OXIDE_CH_CATALOG")]
    catalog: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one classified token per line.
    Tokens {
        /// Query file (stdin if not specified).
        file: Option<PathBuf>,

        /// Print tokens as JSON lines.
        #[arg(long)]
        json: bool,
    },

    /// Print the query with ANSI colors.
    Highlight {
        /// Query file (stdin if not specified).
        file: Option<PathBuf>,
    },

    /// Color pretty-printed result tables.
    Pretty {
        /// Output file (stdin if not specified).
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::Tokens { file, json } => {
            let input = read_input(file.as_deref())?;
            let tokenizer = query_tokenizer(cli.catalog.as_deref())?;
            let mut tokens = tokenizer.tokenize(&input);
            for token in tokens.by_ref() {
                if json {
                    writeln!(out, "{}", serde_json::to_string(&token)?)?;
                } else {
                    writeln!(
                        out,
                        "{:>6} {:<18} {:?}",
                        token.offset(),
                        token.category,
                        token.text
                    )?;
                }
            }
            report_open_states(&tokens);
        }
        Commands::Highlight { file } => {
            let input = read_input(file.as_deref())?;
            let tokenizer = query_tokenizer(cli.catalog.as_deref())?;
            let mut tokens = tokenizer.tokenize(&input);
            let text = render::highlight(tokens.by_ref());
            out.write_all(text.as_bytes())?;
            report_open_states(&tokens);
        }
        Commands::Pretty { file } => {
            let input = read_input(file.as_deref())?;
            let tokenizer = Tokenizer::pretty_format()?;
            let text = render::highlight(tokenizer.tokenize(&input));
            out.write_all(text.as_bytes())?;
        }
    }

    out.flush()?;
    Ok(())
}

fn read_input(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn query_tokenizer(catalog: Option<&Path>) -> oxide_ch_lexer::Result<Tokenizer> {
    let catalog = match catalog {
        Some(path) => {
            info!("Loading symbol catalog from {}", path.display());
            SymbolCatalog::from_path(path)?
        }
        None => {
            debug!("No symbol catalog given, only structural rules apply");
            SymbolCatalog::new()
        }
    };
    Tokenizer::new(&catalog)
}

fn report_open_states(tokens: &Tokens<'_, '_>) {
    let stack = tokens.state_stack();
    if let Some(state) = stack.last().filter(|state| **state != StateId::Root) {
        warn!("Input ended inside {state} ({} states open)", stack.len() - 1);
    }
}
