//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "copilot")]
#[command(about = "Support copilot: serve the HTTP API or manage AI per conversation", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (config from env; bind can override BIND_ADDR).
    Serve {
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Turn AI drafting on for a conversation.
    Enable { conversation_id: i64 },
    /// Turn AI drafting off for a conversation.
    Disable { conversation_id: i64 },
    /// Show whether AI drafting is on for a conversation.
    Status { conversation_id: i64 },
    /// Draft a reply for a conversation and print it.
    Generate {
        conversation_id: i64,
        /// Extra instruction appended to the system prompt.
        #[arg(short, long, default_value = "")]
        prompt: String,
    },
    /// Create a demo conversation with a few messages and enable AI on it.
    Seed,
}
