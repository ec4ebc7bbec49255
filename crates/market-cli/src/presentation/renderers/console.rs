use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::formatters::{Tone, tint};
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, OutputFormat,
};
use crate::ui::Pager;

pub struct ConsoleRenderer {
    format: OutputFormat,
    options: DisplayOptions,
    pager: Pager,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, options: DisplayOptions, pager: Pager) -> Self {
        Self {
            format,
            options,
            pager,
        }
    }

    /// Renderer for the current terminal.
    pub fn detect(format: OutputFormat) -> Self {
        let pager = match format {
            OutputFormat::Text => Pager::detect(),
            OutputFormat::Json => Pager::disabled(),
        };
        Self::new(format, DisplayOptions::detect(), pager)
    }

    /// Full output for `result` as a single string.
    pub fn compose<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
        }

        let color = self.options.color;
        let mut out = String::new();

        if let Some(badge) = &result.badge {
            writeln!(out, "{} {}", badge.icon(), badge.label)?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.options))?;

        if !result.suggestions.is_empty() {
            writeln!(out, "\n{}", tint("Tips:", Tone::Success, color))?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    write!(out, ": {}", tint(cmd, Tone::Accent, color))?;
                }
                writeln!(out)?;
            }
        }

        Ok(out)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let text = self.compose(&result)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn render_paged<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let text = self.compose(&result)?;
        self.pager.show(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_empty;

    fn renderer(format: OutputFormat) -> ConsoleRenderer {
        ConsoleRenderer::new(format, DisplayOptions::default(), Pager::disabled())
    }

    #[test]
    fn test_compose_text_with_suggestion() {
        let text = renderer(OutputFormat::Text)
            .compose(&present_empty(Some("zzz")))
            .unwrap();

        assert!(text.starts_with("No listings found for 'zzz'.\n"));
        assert!(text.contains("Tips:"));
        assert!(text.contains("Browse every listing instead: market search"));
    }

    #[test]
    fn test_compose_json_is_full_view_model() {
        let text = renderer(OutputFormat::Json)
            .compose(&present_empty(Some("zzz")))
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["content"]["query"], "zzz");
        assert_eq!(value["suggestions"][0]["command"], "market search");
    }
}
