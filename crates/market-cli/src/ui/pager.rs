use anyhow::Result;
use is_terminal::IsTerminal;
use log::warn;
use std::io::{self, Write};
use std::process::{Command, Stdio};

const DEFAULT_PAGER: &str = "less -R";

/// Shows long text through `$PAGER` when stdout is a terminal.
#[derive(Debug, Clone, Default)]
pub struct Pager {
    command: Option<String>,
}

impl Pager {
    pub fn detect() -> Self {
        if !io::stdout().is_terminal() {
            return Self::disabled();
        }

        let command = std::env::var("PAGER")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PAGER.to_string());
        Self {
            command: Some(command),
        }
    }

    pub fn disabled() -> Self {
        Self { command: None }
    }

    /// Page `text`, falling back to plain stdout if the pager cannot start.
    pub fn show(&self, text: &str) -> Result<()> {
        if let Some(command) = &self.command {
            match run_pager(command, text) {
                Ok(()) => return Ok(()),
                Err(e) => warn!("pager '{}' failed: {}; printing directly", command, e),
            }
        }

        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

fn run_pager(command: &str, text: &str) -> io::Result<()> {
    let mut parts = command.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty pager command"))?;

    let mut child = Command::new(program)
        .args(parts)
        .stdin(Stdio::piped())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take()
        && let Err(e) = stdin.write_all(text.as_bytes())
        && e.kind() != io::ErrorKind::BrokenPipe
    {
        return Err(e);
    }

    child.wait()?;
    Ok(())
}
