//! Anemo Complete - interactive conversation over the text completions endpoint.
//!
//! Reads the API key from `OPENAI_API_KEY` (a `.env` file is honored) and
//! replays the conversation as a plain-text prompt on every turn.

use anemo::repl;
use anemo::{CompletionSession, Client, ClientConfig, Conversation, DEFAULT_COMPLETION_MODEL};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments for the completion demo.
#[derive(Parser, Debug)]
#[command(name = "anemo-complete")]
#[command(about = "Converse with a completion model from the terminal")]
#[command(version)]
struct Args {
    /// Completion model to talk to
    #[arg(short, long, default_value = DEFAULT_COMPLETION_MODEL)]
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

    info!(model = %args.model, "Starting completion session");
    let mut session = CompletionSession::new(client, args.model);

    let mut stdout = std::io::stdout();
    repl::write_banner(&mut stdout, &session.label())?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    repl::run(&mut session, stdin, &mut stdout).await?;
    Ok(())
}
