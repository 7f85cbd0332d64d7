//! copilot CLI: serve the HTTP API, manage the AI switch, draft replies, seed demo data.

use anyhow::Result;
use clap::Parser;
use copilot_server::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind } => commands::serve(bind).await,
        Commands::Enable { conversation_id } => commands::enable(conversation_id).await,
        Commands::Disable { conversation_id } => commands::disable(conversation_id).await,
        Commands::Status { conversation_id } => commands::status(conversation_id).await,
        Commands::Generate {
            conversation_id,
            prompt,
        } => commands::generate(conversation_id, &prompt).await,
        Commands::Seed => commands::seed().await,
    }
}
