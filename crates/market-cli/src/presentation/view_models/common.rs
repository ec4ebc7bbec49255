use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<crate::args::OutputFormat> for OutputFormat {
    fn from(format: crate::args::OutputFormat) -> Self {
        match format {
            crate::args::OutputFormat::Plain => Self::Text,
            crate::args::OutputFormat::Json => Self::Json,
        }
    }
}

/// Terminal traits the text views adapt to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub color: bool,
    /// Usable terminal width in columns.
    pub width: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            color: false,
            width: 120,
        }
    }
}

impl DisplayOptions {
    /// Detect color support and width from stdout.
    ///
    /// Color is disabled when stdout is not a terminal or NO_COLOR is set.
    pub fn detect() -> Self {
        use is_terminal::IsTerminal;

        let is_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        let width = terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), _)| usize::from(w))
            .unwrap_or(Self::default().width);

        Self {
            color: is_tty && !no_color,
            width,
        }
    }
}

/// Warning shown above a view, e.g. for an inactive listing.
#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub label: String,
}

impl StatusBadge {
    pub fn warning(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn icon(&self) -> &str {
        "⚠️"
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub description: String,
    pub command: Option<String>,
}

impl Guidance {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: None,
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}
