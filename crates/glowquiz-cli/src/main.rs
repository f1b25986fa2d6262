//! glowquiz CLI — take the skincare quiz in a terminal or script it.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "glowquiz", version, about = "Skincare product recommendation quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the quiz interactively (commands are read from stdin)
    Take {
        /// Quiz .toml file (default: built-in skincare quiz)
        #[arg(long)]
        quiz: Option<PathBuf>,

        /// Output directory for saved results
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: text, json, html, all
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print recommendations for answers given on the command line
    Recommend {
        /// Quiz .toml file (default: built-in skincare quiz)
        #[arg(long)]
        quiz: Option<PathBuf>,

        /// Answer as QUESTION_ID=VALUE[,VALUE...] (repeatable, e.g. "2=acne,aging")
        #[arg(long = "answer", short = 'a')]
        answers: Vec<String>,

        /// Output format: text, json, html
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a quiz TOML file
    Validate {
        /// Path to the quiz file
        #[arg(long)]
        quiz: PathBuf,
    },

    /// Create starter config and an editable copy of the built-in quiz
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("glowquiz=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take {
            quiz,
            output,
            format,
            config,
        } => commands::take::execute(quiz, output, format, config),
        Commands::Recommend {
            quiz,
            answers,
            format,
            config,
        } => commands::recommend::execute(quiz, answers, format, config),
        Commands::Validate { quiz } => commands::validate::execute(quiz),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
