//! Fibonacci CLI
//!
//! Prints F(n) for the given index, F(42) when run without arguments.

use clap::{CommandFactory, Parser as ClapParser};
use clap_complete::{Shell, generate};
use naive_fib::RunConfig;
use std::io;
use std::process;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

#[derive(ClapParser)]
#[command(name = "fib")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print the nth Fibonacci number, computed by naive recursion", long_about = None)]
struct Cli {
    /// Index of the term to print (defaults to 42)
    #[arg(allow_negative_numbers = true)]
    index: Option<String>,

    /// Generate shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        run_completions(shell);
        return;
    }

    init_logging();

    let config = match RunConfig::resolve(cli.index.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    debug!(index = config.index, "resolved configuration");

    let stdout = io::stdout();
    if let Err(e) = naive_fib::run(&config, &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "fib", &mut io::stdout());
}
