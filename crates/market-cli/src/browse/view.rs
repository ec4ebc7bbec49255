use anyhow::Result;
use market_types::{ListingDetail, Page};

use super::controller::BrowseView;
use crate::presentation::presenters::{present_detail, present_empty, present_page};
use crate::presentation::{ConsoleRenderer, Renderer};

/// [`BrowseView`] that prints through the presentation layer.
pub struct ConsoleBrowseView<'a> {
    renderer: &'a ConsoleRenderer,
}

impl<'a> ConsoleBrowseView<'a> {
    pub fn new(renderer: &'a ConsoleRenderer) -> Self {
        Self { renderer }
    }
}

impl BrowseView for ConsoleBrowseView<'_> {
    fn show_page(&mut self, page: &Page, query: Option<&str>) -> Result<()> {
        self.renderer.render(present_page(page, query))
    }

    fn show_empty(&mut self, query: Option<&str>) -> Result<()> {
        self.renderer.render(present_empty(query))
    }

    fn show_detail(&mut self, detail: &ListingDetail) -> Result<()> {
        self.renderer.render_paged(present_detail(detail))
    }
}
