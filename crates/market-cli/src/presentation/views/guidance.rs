use std::fmt;

use crate::presentation::formatters::{Tone, tint};
use crate::presentation::view_models::{CreateView, DisplayOptions, GuidanceViewModel};

struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
    options: DisplayOptions,
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuidanceView {
            data: self,
            options,
        })
    }
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "market - Search and browse marketplace listings\n")?;
        writeln!(f, "Usage:")?;
        for example in &self.data.examples {
            writeln!(f, "  {}", example.description)?;
            writeln!(
                f,
                "    $ {}",
                tint(&example.command, Tone::Accent, self.options.color)
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Results are paginated: 'n' next page, 'p' previous page, 'q' quit,"
        )?;
        writeln!(f, "or enter an id to view the app's details.")?;
        writeln!(f)?;
        writeln!(f, "For more commands:")?;
        writeln!(f, "  market --help")
    }
}
