//! `bracket` command line.
//!
//! ```bash
//! # run the guard around a block that fails with a key error
//! bracket guard --suppress index,key --raise key
//!
//! # keep a list of books in ./.books.db
//! bracket books add "Dune" "Frank Herbert" 1965 "Chilton Books"
//! bracket books list
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use bracket::books::{Book, BookStore};
use bracket::guard::{console_sink, ScopedGuard};
use bracket::kind::{BlockError, ErrorKind};
use bracket::policy::{PolicyInput, SuppressionPolicy};
use bracket::seq::Indexed;
use bracket::settings::Settings;
use bracket::{prompt, puzzles, seq, wrap, BracketError, Result};

/// Bracket - scoped guards and a handful of small idioms.
#[derive(Parser)]
#[command(name = "bracket")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./bracket.toml when present).
    #[arg(long, global = true, env = "BRACKET_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a block inside a guard, optionally failing with an error kind.
    Guard {
        /// Suppression policy: true, false, or a comma separated list of kinds.
        #[arg(short, long)]
        suppress: Option<String>,

        /// Error kind the block fails with.
        #[arg(short, long)]
        raise: Option<String>,
    },

    /// Walk through the guard scenarios.
    Demo,

    /// Keep a list of books.
    Books {
        #[command(subcommand)]
        command: BookCommands,
    },

    /// Fuel requirements for the module masses in a file.
    Fuel {
        /// One mass per line.
        file: PathBuf,
    },

    /// Timed recursive Fibonacci.
    Fib { n: u32 },

    /// Print the squares, both ways.
    Squares,

    /// Ask for an integer until one is given.
    Ask,
}

#[derive(Subcommand)]
enum BookCommands {
    /// Add a book.
    Add {
        title: String,
        author: String,
        year: String,
        publisher: String,
    },
    /// List all books.
    List {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log)),
        )
        .with_writer(io::stderr)
        .init();
    debug!(?settings, "loaded settings");

    match run(cli.command, &settings) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, settings: &Settings) -> Result<ExitCode> {
    match command {
        Commands::Guard { suppress, raise } => {
            let policy = match suppress {
                Some(text) => text.parse::<SuppressionPolicy>()?,
                None => settings.suppression_policy()?,
            };
            let raise = raise.map(|kind| kind.parse::<ErrorKind>()).transpose()?;
            let guard = ScopedGuard::new(policy).with_sink(console_sink());
            let outcome = guard.run(|_| match raise {
                Some(kind) => Err(BlockError::new(kind, "raised on request")),
                None => Ok(()),
            });
            match outcome {
                Ok(Some(())) => println!("completed"),
                Ok(None) => println!("suppressed"),
                Err(e) => {
                    println!("propagated: {e}");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Demo => demo()?,
        Commands::Books { command } => {
            let mut store = BookStore::open(&settings.database)?;
            match command {
                BookCommands::Add {
                    title,
                    author,
                    year,
                    publisher,
                } => store.add(&Book::new(title, author, year, publisher))?,
                BookCommands::List { json } => {
                    let books = store.list()?;
                    if json {
                        let text = serde_json::to_string_pretty(&books)
                            .map_err(|e| BracketError::Persistence(e.to_string()))?;
                        println!("{text}");
                    } else {
                        for book in books {
                            println!("{book}");
                        }
                    }
                }
            }
        }
        Commands::Fuel { file } => {
            let masses = puzzles::parse_masses(&file)?;
            println!("Day 1 pt 1 {}", puzzles::solve1(&masses)?);
            println!("Day 1 pt 2 {}", puzzles::solve2(&masses)?);
        }
        Commands::Fib { n } => {
            let (value, _) = wrap::timed("fib", || puzzles::fibonacci(n));
            println!("{value}");
        }
        Commands::Squares => {
            let squares = seq::Squares::new();
            for e in &squares {
                println!("{e}");
            }
            println!("{:?}", (&squares).into_iter().collect::<Vec<_>>());
            let table = seq::SquareTable;
            for e in &table {
                println!("{e}");
            }
            println!("{:?}", table.iter_indexed().collect::<Vec<_>>());
        }
        Commands::Ask => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            let prompt_text = "Please enter an integer: ";
            if let Some(number) = prompt::read_integer(&mut input, &mut output, prompt_text)? {
                println!("{number}");
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

// The five scenarios of a manually written scoped manager.
fn demo() -> Result<()> {
    let scenarios: [(PolicyInput, BlockError); 4] = [
        (PolicyInput::Flag(true), BlockError::generic("anything")),
        (vec![ErrorKind::Value].into(), BlockError::value("bad value")),
        (vec![ErrorKind::Index, ErrorKind::Key].into(), BlockError::key("missing key")),
        (vec![ErrorKind::Index, ErrorKind::Key].into(), BlockError::value("bad value")),
    ];

    let guard = ScopedGuard::try_new(PolicyInput::Absent)?.with_sink(console_sink());
    if let Ok(Some(())) = guard.run(|_| Ok::<_, BlockError>(())) {
        println!("-> completed");
    }

    for (input, raised) in scenarios {
        let policy = SuppressionPolicy::try_from(input)?;
        println!("policy {policy}, raising {raised}");
        let guard = ScopedGuard::new(policy).with_sink(console_sink());
        match guard.run(|_| Err::<(), _>(raised)) {
            Ok(_) => println!("-> suppressed"),
            Err(e) => println!("-> propagated: {e}"),
        }
    }
    Ok(())
}
