//! Line-oriented read-eval-print loop over a [`Conversation`].

use crate::Conversation;
use anemo_error::{AnemoResult, IoError};
use crossterm::style::Stylize;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

/// Meaning of one input line.
///
/// ```
/// use anemo::repl::ReplCommand;
///
/// assert_eq!(ReplCommand::parse(None), ReplCommand::Exit);
/// assert_eq!(ReplCommand::parse(Some("  ")), ReplCommand::Reset);
/// assert_eq!(ReplCommand::parse(Some("hi\n")), ReplCommand::Say("hi".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// End of input, `/exit` or `/quit`
    Exit,
    /// Empty line or `/reset`
    Reset,
    /// A user turn
    Say(String),
}

impl ReplCommand {
    /// Classifies a line; `None` means the input is exhausted.
    pub fn parse(line: Option<&str>) -> Self {
        let Some(line) = line else {
            return Self::Exit;
        };

        match line.trim() {
            "/exit" | "/quit" => Self::Exit,
            "" | "/reset" => Self::Reset,
            text => Self::Say(text.to_string()),
        }
    }
}

/// What happened during one [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplSummary {
    /// Turns answered
    pub turns: usize,
    /// Times the transcript was cleared
    pub resets: usize,
}

fn io_error(e: std::io::Error) -> IoError {
    IoError::new(format!("Terminal I/O failed: {}", e))
}

/// Prints the greeting shown before the first prompt.
///
/// # Errors
///
/// Returns an I/O error if `output` cannot be written.
pub fn write_banner<W: Write>(output: &mut W, label: &str) -> AnemoResult<()> {
    let title = format!("anemo {}", env!("CARGO_PKG_VERSION"));
    writeln!(output, "{}", title.bold()).map_err(io_error)?;
    writeln!(output, "talking to {}", label).map_err(io_error)?;
    writeln!(output, "use ctrl+c to exit").map_err(io_error)?;
    writeln!(output, "press enter on an empty prompt to reset").map_err(io_error)?;
    Ok(())
}

/// Reads lines from `input` until exit, answering each through `conversation`
/// and printing replies to `output`.
///
/// # Errors
///
/// Stops at the first failed turn or terminal I/O error. Turns answered
/// before the failure stay in the transcript.
pub async fn run<C, R, W>(
    conversation: &mut C,
    input: R,
    output: &mut W,
) -> AnemoResult<ReplSummary>
where
    C: Conversation + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut summary = ReplSummary::default();

    loop {
        write!(output, "> ").map_err(io_error)?;
        output.flush().map_err(io_error)?;

        let line = lines.next_line().await.map_err(io_error)?;
        match ReplCommand::parse(line.as_deref()) {
            ReplCommand::Exit => {
                writeln!(output).map_err(io_error)?;
                break;
            }
            ReplCommand::Reset => {
                let dropped = conversation.reset();
                summary.resets += 1;
                debug!(dropped, "Transcript reset");
                writeln!(output, "{}", format!("reset {} messages", dropped).yellow())
                    .map_err(io_error)?;
            }
            ReplCommand::Say(text) => {
                let reply = conversation.respond(&text).await?;
                summary.turns += 1;
                writeln!(
                    output,
                    "{}",
                    format!("{}: {}", conversation.label(), reply.content()).cyan()
                )
                .map_err(io_error)?;
            }
        }
    }

    info!(turns = summary.turns, resets = summary.resets, "Session ended");
    Ok(summary)
}
