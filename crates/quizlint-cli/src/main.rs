//! quizlint CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizlint", version, about = "Educational content integrity checker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate quiz and exam content under a subjects directory
    Check {
        /// Root of the subjects content tree
        #[arg(long, default_value = "./subjects")]
        subjects_dir: PathBuf,

        /// Content kind to validate: quizzes, exams, or all
        #[arg(long, default_value = "all")]
        kind: String,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Also write the full JSON report to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Exit non-zero when warnings are present
        #[arg(long)]
        fail_on_warnings: bool,
    },

    /// Print referent-option usage statistics without a verdict
    Stats {
        /// Root of the subjects content tree
        #[arg(long, default_value = "./subjects")]
        subjects_dir: PathBuf,
    },

    /// Create a starter subjects directory with sample content
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizlint=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            subjects_dir,
            kind,
            format,
            output,
            fail_on_warnings,
        } => commands::check::execute(subjects_dir, kind, format, output, fail_on_warnings),
        Commands::Stats { subjects_dir } => commands::stats::execute(subjects_dir),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
