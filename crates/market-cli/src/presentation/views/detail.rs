use std::fmt;

use crate::presentation::formatters::{Tone, time, tint};
use crate::presentation::view_models::{CreateView, DisplayOptions, ListingDetailViewModel};

const LABEL_WIDTH: usize = 13;

pub struct ListingDetailView<'a> {
    data: &'a ListingDetailViewModel,
    options: DisplayOptions,
}

impl<'a> ListingDetailView<'a> {
    pub fn new(data: &'a ListingDetailViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn field(&self, f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
        let label = format!("{:<width$}: ", label, width = LABEL_WIDTH);
        writeln!(f, "{}{}", tint(&label, Tone::Accent, self.options.color), value)
    }

    fn section(&self, f: &mut fmt::Formatter<'_>, title: &str, body: &str) -> fmt::Result {
        writeln!(f, "{}", tint(title, Tone::Accent, self.options.color))?;
        writeln!(f)?;
        writeln!(f, "{}", body)
    }
}

impl CreateView for ListingDetailViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ListingDetailView::new(self, options))
    }
}

impl<'a> fmt::Display for ListingDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.data;

        self.field(f, "App Name", &d.title)?;
        self.field(f, "Description", &d.description)?;
        self.field(f, "Created By", &d.creator)?;
        self.field(
            f,
            "Price Range",
            &format!("{} - {} Satoshis", d.min_price, d.max_price),
        )?;
        writeln!(f)?;

        self.field(f, "Status", if d.active { "Active" } else { "Inactive" })?;
        self.field(f, "Availability", &format!("{:.2}%", d.uptime_percent))?;
        writeln!(f)?;

        self.field(f, "Docs URL", &d.docs_url)?;
        self.field(f, "App URL", &d.app_url)?;
        writeln!(f)?;

        self.field(f, "Category", &d.category)?;
        self.field(f, "Keywords", &d.keywords.join(", "))?;
        self.field(f, "Version", &d.version)?;
        self.field(f, "Last Update", &time::format_unix_minutes(d.updated))?;
        writeln!(f)?;

        self.section(f, "Quick Start", &d.quick_start)?;
        writeln!(f)?;
        self.section(f, "Detailed usage", &d.usage_docs)?;
        writeln!(f)
    }
}
