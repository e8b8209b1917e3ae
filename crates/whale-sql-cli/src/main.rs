//! whale-lex CLI
//!
//! Command-line tool for tokenizing SQL with a built-in or JSON-described
//! dialect.

use std::borrow::Cow;
use std::fmt::Write as _;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use whale_sql_core::{DialectTable, Lexer, PostgresDialect, Token};

/// Dialect-pluggable SQL tokenizer.
#[derive(Parser)]
#[command(name = "whale-lex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON dialect description (built-in Postgres dialect if not specified).
    #[arg(short, long, env = "WHALE_SQL_DIALECT", global = true)]
    dialect: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tokens of a SQL text.
    Tokenize {
        /// SQL file to read (stdin if neither a file nor --sql is given).
        file: Option<PathBuf>,

        /// Inline SQL text.
        #[arg(short = 'e', long, conflicts_with = "file")]
        sql: Option<String>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Fail on unterminated string literals instead of printing them.
        #[arg(long)]
        strict: bool,
    },

    /// Print the active dialect as JSON, usable as a --dialect file.
    Dialect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One token per line: span, kind, text.
    Text,
    /// A JSON array of tokens.
    Json,
}

fn load_dialect(path: Option<&Path>) -> anyhow::Result<Cow<'static, DialectTable>> {
    match path {
        Some(path) => {
            let table = DialectTable::from_path(path)
                .with_context(|| format!("Failed to load dialect {}", path.display()))?;
            info!(dialect = table.name(), "Loaded dialect from {}", path.display());
            Ok(Cow::Owned(table))
        }
        None => Ok(Cow::Borrowed(PostgresDialect::table())),
    }
}

fn read_input(file: Option<&Path>, sql: Option<String>) -> anyhow::Result<String> {
    if let Some(sql) = sql {
        return Ok(sql);
    }
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn tokenize(input: &str, dialect: &DialectTable, strict: bool) -> anyhow::Result<Vec<Token>> {
    let mut lexer = Lexer::with_dialect(input, dialect);
    let tokens = if strict {
        lexer.try_tokenize()?
    } else {
        lexer.tokenize()
    };
    debug!(tokens = tokens.len(), bytes = input.len(), "Tokenized input");
    Ok(tokens)
}

fn render(tokens: &[Token], format: Format) -> anyhow::Result<String> {
    match format {
        Format::Text => {
            let mut out = String::new();
            for token in tokens {
                let span = format!("{}..{}", token.span.start, token.span.end);
                let kind = token.kind.to_string();
                writeln!(out, "{span:<12}{kind:<24}{}", token.text)?;
            }
            Ok(out)
        }
        Format::Json => Ok(serde_json::to_string_pretty(tokens)?),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout is reserved for tokens.
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dialect = load_dialect(cli.dialect.as_deref())?;

    match cli.command {
        Commands::Tokenize {
            file,
            sql,
            format,
            strict,
        } => {
            let input = read_input(file.as_deref(), sql)?;
            let tokens = tokenize(&input, &dialect, strict)?;
            print!("{}", render(&tokens, format)?);
            if format == Format::Json {
                println!();
            }
        }

        Commands::Dialect => {
            println!("{}", dialect.to_json()?);
        }
    }

    Ok(())
}
