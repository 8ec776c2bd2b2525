mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{export, init, show, ExportArgs, InitArgs, ShowArgs};

/// Resumark CLI - résumé documents as editable content trees
#[derive(Parser, Debug)]
#[command(name = "resumark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a resume from the default template
    Init(InitArgs),

    /// Export a resume as HTML, Markdown, or a standalone page
    Export(ExportArgs),

    /// Print a resume's serialized JSON
    Show(ShowArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Init(args) => init(args),
        Command::Export(args) => export(args),
        Command::Show(args) => show(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
