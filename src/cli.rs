//! CLI argument parsing for mailmark

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Mailmark - clean Markdown from raw messages
#[derive(Parser, Debug)]
#[command(name = "mailmark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format for reports and errors
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Log pipeline stages at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. `info`, `mailmark_core=trace`)
    #[arg(long, global = true, env = "MAILMARK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Readable text
    Human,
    /// Machine-readable JSON
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a JSON array of items through the pipeline
    Transform {
        /// Pipeline configuration (TOML); built-in defaults when omitted
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Input file, stdin when omitted
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// Output file, stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Validate a pipeline configuration and show the resolved stages
    CheckConfig {
        /// Pipeline configuration (TOML)
        #[arg(long, short)]
        config: PathBuf,
    },

    /// Convert a single HTML document to Markdown
    Html {
        /// Input file, stdin when omitted
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
}
