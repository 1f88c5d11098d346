use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "mockrag",
    about = "An in-memory mock retrieval engine for RAG search demos"
)]
pub struct Cli {
    /// Start from an empty corpus instead of the canned fixtures
    #[arg(long, global = true)]
    pub empty: bool,

    /// Simulated completion delay in milliseconds for search and upload
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search the corpus and generate an answer
    Search(SearchArgs),
    /// Manage indexed documents
    Docs {
        #[command(subcommand)]
        action: DocsAction,
    },
    /// Show corpus statistics
    Status(StatusArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Search --

#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// The search query
    pub query: String,

    /// Top K: maximum number of chunks to retrieve
    #[arg(short = 'k', long, default_value = "5", value_parser = clap::value_parser!(u32).range(1..))]
    pub top_k: u32,

    /// Top N: maximum number of documents to show (default: all)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub top_n: Option<u32>,

    /// Output the result as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Docs subcommands --

#[derive(Debug, Subcommand)]
pub enum DocsAction {
    /// List indexed documents
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Simulate uploading and indexing a file
    Add {
        /// File name (the extension determines the type tag)
        name: String,
        /// File size in bytes
        size: u64,
    },
    /// Delete a document by identifier
    Remove {
        /// Document identifier
        id: u32,
    },
    /// Show a document with its chunks
    Show {
        /// Document identifier
        id: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

// -- Status --

#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "mockrag",
            &mut std::io::stdout(),
        );
    }
}
