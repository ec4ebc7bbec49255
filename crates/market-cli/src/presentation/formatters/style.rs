use owo_colors::OwoColorize;

/// Color roles used by the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    /// Field labels and table values.
    Accent,
    /// Page headers and notices.
    Success,
}

pub fn tint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Plain => text.to_string(),
        Tone::Accent => text.blue().to_string(),
        Tone::Success => text.green().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_without_color_is_identity() {
        assert_eq!(tint("label", Tone::Accent, false), "label");
    }

    #[test]
    fn test_tint_with_color_wraps_text() {
        let painted = tint("label", Tone::Accent, true);
        assert!(painted.contains("label"));
        assert!(painted.starts_with('\u{1b}'));
    }
}
