//! Anemo Chat - interactive conversation over the chat completions endpoint.
//!
//! Reads the API key from `OPENAI_API_KEY` (a `.env` file is honored) and
//! keeps the whole conversation in memory until it is reset.

use anemo::repl;
use anemo::{ChatSession, Client, ClientConfig, Conversation, DEFAULT_CHAT_MODEL};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments for the chat demo.
#[derive(Parser, Debug)]
#[command(name = "anemo-chat")]
#[command(about = "Chat with a model from the terminal")]
#[command(version)]
struct Args {
    /// Chat model to talk to
    #[arg(short, long, default_value = DEFAULT_CHAT_MODEL)]
    model: String,

    /// Optional TOML file with client settings
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    anemo::init_tracing();

    let args = Args::parse();
    let config = ClientConfig::load(args.config.as_deref())?;
    let client = Client::from_env(config)?;

    info!(model = %args.model, "Starting chat session");
    let mut session = ChatSession::new(client, args.model);

    let mut stdout = std::io::stdout();
    repl::write_banner(&mut stdout, &session.label())?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    repl::run(&mut session, stdin, &mut stdout).await?;
    Ok(())
}
