use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Cross-domain search over workspace records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a corpus and print grouped results
    Query {
        /// Query text
        text: String,

        /// Corpus file (JSON array of records)
        #[arg(long)]
        corpus: PathBuf,

        /// Restrict results to one record type (document, memory, task, activity)
        #[arg(long = "type", default_value = "all")]
        record_type: String,

        /// Output results as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print title suggestions for partial input
    Suggest {
        /// Partial input text
        text: String,

        /// Corpus file (JSON array of records)
        #[arg(long)]
        corpus: PathBuf,

        /// Output suggestions as JSON
        #[arg(short, long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Query {
            text,
            corpus,
            record_type,
            json,
        } => commands::query::execute(&text, &corpus, &record_type, json),
        Commands::Suggest { text, corpus, json } => {
            commands::suggest::execute(&text, &corpus, json)
        }
    }
}
