mod commands;
mod config;

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use commands::{
    add, blocks, init, lint, render, AddArgs, BlocksArgs, InitArgs, LintArgs, RenderArgs,
};
use tracing_subscriber::EnvFilter;

/// Sitecraft CLI - Block-based website builder
#[derive(Parser, Debug)]
#[command(name = "sitecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Sitecraft project
    Init(InitArgs),

    /// List the block palette
    Blocks(BlocksArgs),

    /// Append a default block to a project
    Add(AddArgs),

    /// Render a project to HTML
    Render(RenderArgs),

    /// Check a project for problems
    Lint(LintArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so `render --stdout` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::Blocks(args) => blocks(args, &cwd),
                Command::Add(args) => add(args, &cwd),
                Command::Render(args) => render(args, &cwd),
                Command::Lint(args) => lint(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
