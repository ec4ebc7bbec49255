use comfy_table::{Cell, Color, Table, presets::ASCII_FULL_CONDENSED};
use std::fmt;

use crate::presentation::formatters::{Tone, text, tint};
use crate::presentation::view_models::{
    BrowseAllViewModel, CreateView, DisplayOptions, EmptyResultsViewModel, ListingPageViewModel,
};

const HEADERS: [&str; 5] = ["id", "Details", "Creator", "price range", "category"];
const DESCRIPTION_WRAP_WIDTH: usize = 70;
const MIN_DESCRIPTION_WIDTH: usize = 20;
// Columns other than Details plus borders, for typical listings.
const TABLE_CHROME_WIDTH: usize = 60;

// --------------------------------------------------------
// Listing Page View
// --------------------------------------------------------

pub struct ListingPageView<'a> {
    data: &'a ListingPageViewModel,
    options: DisplayOptions,
}

impl<'a> ListingPageView<'a> {
    pub fn new(data: &'a ListingPageViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn description_width(&self) -> usize {
        DESCRIPTION_WRAP_WIDTH
            .min(self.options.width.saturating_sub(TABLE_CHROME_WIDTH))
            .max(MIN_DESCRIPTION_WIDTH)
    }

    fn accent(&self, content: String) -> Cell {
        let cell = Cell::new(content);
        if self.options.color {
            cell.fg(Color::Blue)
        } else {
            cell
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(ASCII_FULL_CONDENSED).set_header(HEADERS);
        if self.options.color {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }

        let wrap_width = self.description_width();
        let blank_row = || vec![""; HEADERS.len()];

        for row in &self.data.rows {
            table.add_row(vec![
                self.accent(row.row.to_string()),
                self.accent(row.title.clone()),
                self.accent(row.creator.clone()),
                self.accent(format!("{} - {} Satoshis", row.min_price, row.max_price)),
                self.accent(row.category.clone()),
            ]);
            table.add_row(blank_row());
            for line in text::wrap(&row.description, wrap_width) {
                table.add_row(vec![Cell::new(""), Cell::new(line)]);
            }
            table.add_row(blank_row());
        }
        table
    }
}

impl CreateView for ListingPageViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ListingPageView::new(self, options))
    }
}

impl<'a> fmt::Display for ListingPageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!("Page {}/{}", self.data.page_number, self.data.total_pages);
        writeln!(f)?;
        writeln!(f, "{}", tint(&header, Tone::Success, self.options.color))?;
        writeln!(f, "{}", self.table())
    }
}

// --------------------------------------------------------
// Empty Results View
// --------------------------------------------------------

pub struct EmptyResultsView<'a> {
    data: &'a EmptyResultsViewModel,
}

impl CreateView for EmptyResultsViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(EmptyResultsView { data: self })
    }
}

impl<'a> fmt::Display for EmptyResultsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data.query {
            Some(query) => writeln!(f, "No listings found for '{}'.", query),
            None => writeln!(f, "No listings found."),
        }
    }
}

// --------------------------------------------------------
// Browse All Notice
// --------------------------------------------------------

struct BrowseAllView<'a> {
    data: &'a BrowseAllViewModel,
    options: DisplayOptions,
}

impl CreateView for BrowseAllViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(BrowseAllView {
            data: self,
            options,
        })
    }
}

impl<'a> fmt::Display for BrowseAllView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", tint(&self.data.message, Tone::Success, self.options.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::ListingRowViewModel;
    use unicode_width::UnicodeWidthStr;

    fn page_vm() -> ListingPageViewModel {
        ListingPageViewModel {
            page_number: 2,
            total_pages: 3,
            query: Some("games".to_string()),
            rows: vec![ListingRowViewModel {
                row: 11,
                listing_id: "42".to_string(),
                title: "Weather Oracle".to_string(),
                creator: "satoshi".to_string(),
                min_price: 1000u64.into(),
                max_price: 5000u64.into(),
                category: "data".to_string(),
                description: "Forecasts for any city on earth, paid per request. ".repeat(3),
            }],
        }
    }

    #[test]
    fn test_page_view_header_and_row() {
        let vm = page_vm();
        let rendered = vm.create_view(DisplayOptions::default()).to_string();

        assert!(rendered.starts_with("\nPage 2/3\n"));
        assert!(rendered.contains("| id "));
        assert!(rendered.contains("| price range "));
        assert!(rendered.contains("| 11 "));
        assert!(rendered.contains("| Weather Oracle "));
        assert!(rendered.contains("1000 - 5000 Satoshis"));
        assert!(!rendered.contains('\u{1b}'));
    }

    #[test]
    fn test_page_view_wraps_description() {
        let vm = page_vm();
        let rendered = vm.create_view(DisplayOptions::default()).to_string();

        let description_lines = rendered
            .lines()
            .filter(|line| line.contains("Forecasts") || line.contains("paid per request"))
            .count();
        assert!(description_lines >= 2);
        for line in rendered.lines() {
            assert!(!line.contains(&"Forecasts for any city on earth, paid per request. ".repeat(2)));
        }
    }

    #[test]
    fn test_page_view_aligns_wide_titles() {
        let mut vm = page_vm();
        let mut wide = vm.rows[0].clone();
        wide.row = 12;
        wide.title = "天気アプリ".to_string();
        vm.rows.push(wide);

        let rendered = vm.create_view(DisplayOptions::default()).to_string();
        let border_width = rendered
            .lines()
            .find(|line| line.starts_with('+'))
            .map(UnicodeWidthStr::width)
            .unwrap();

        for line in rendered.lines().filter(|line| line.starts_with('|')) {
            assert_eq!(line.width(), border_width, "misaligned: {:?}", line);
        }
        assert!(rendered.contains("天気アプリ"));
    }

    #[test]
    fn test_page_view_color() {
        let vm = page_vm();
        let options = DisplayOptions {
            color: true,
            ..DisplayOptions::default()
        };
        let rendered = vm.create_view(options).to_string();
        assert!(rendered.contains('\u{1b}'));
    }

    #[test]
    fn test_empty_view_mentions_query() {
        let vm = EmptyResultsViewModel {
            query: Some("zzz".to_string()),
        };
        assert_eq!(
            vm.create_view(DisplayOptions::default()).to_string(),
            "No listings found for 'zzz'.\n"
        );

        let vm = EmptyResultsViewModel { query: None };
        assert_eq!(
            vm.create_view(DisplayOptions::default()).to_string(),
            "No listings found.\n"
        );
    }
}
