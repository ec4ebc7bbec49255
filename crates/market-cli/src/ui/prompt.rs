use anyhow::Result;
use is_terminal::IsTerminal;
use std::io::{self, BufRead, Write};

use crate::presentation::OutputFormat;

/// Source of interactive user input.
pub trait Prompter {
    /// Show `message` and read one non-empty, trimmed line.
    ///
    /// `Ok(None)` means the user aborted the prompt (Ctrl-C or end of input).
    fn read(&mut self, message: &str) -> Result<Option<String>>;
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn read(&mut self, message: &str) -> Result<Option<String>> {
        (**self).read(message)
    }
}

/// Line-editing prompt for interactive terminals.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read(&mut self, message: &str) -> Result<Option<String>> {
        let input = dialoguer::Input::<String>::new()
            .with_prompt(message)
            .interact_text();

        match input {
            Ok(line) => Ok(Some(line.trim().to_string())),
            Err(dialoguer::Error::IO(e))
                if matches!(
                    e.kind(),
                    io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Prompt over plain reader/writer pairs, used when stdin is piped.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read(&mut self, message: &str) -> Result<Option<String>> {
        loop {
            write!(self.output, "{}: ", message)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }

            let line = line.trim();
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }
}

/// Pick the prompt implementation for the current stdin/stdout.
///
/// Piped JSON sessions prompt on stderr so stdout carries only documents.
pub fn stdin_prompter(format: OutputFormat) -> Box<dyn Prompter> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        return Box::new(TerminalPrompter);
    }

    match format {
        OutputFormat::Text => Box::new(LinePrompter::new(io::stdin().lock(), io::stdout())),
        OutputFormat::Json => Box::new(LinePrompter::new(io::stdin().lock(), io::stderr())),
    }
}
