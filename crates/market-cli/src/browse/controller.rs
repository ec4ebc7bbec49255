use anyhow::Result;
use log::{debug, info};
use market_client::{MarketClient, PageResult, fetch_page};
use market_types::{ListingDetail, Page, RowMap};

use super::input::{Action, interpret, target_page};
use crate::ui::Prompter;

pub const PROMPT: &str =
    "Enter the id of the app you want to view, 'n' for next page, 'p' for previous page, 'q' to quit";

/// Output side of a browse session.
pub trait BrowseView {
    fn show_page(&mut self, page: &Page, query: Option<&str>) -> Result<()>;
    fn show_empty(&mut self, query: Option<&str>) -> Result<()>;
    fn show_detail(&mut self, detail: &ListingDetail) -> Result<()>;
}

/// Why a browse session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The query matched nothing; the user was never prompted.
    NoResults,
    /// The user typed a cancel keyword.
    Cancelled,
    /// The prompt was interrupted or input ran out.
    Aborted,
}

/// Result of handling one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Done(SessionOutcome),
}

/// Position of a session that has at least one page on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    current_page: usize,
    total_pages: usize,
    rows: RowMap,
}

impl BrowseState {
    fn from_page(page: &Page) -> Self {
        Self {
            current_page: page.index,
            total_pages: page.total_pages,
            rows: RowMap::for_page(page),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn rows(&self) -> &RowMap {
        &self.rows
    }
}

/// Interactive loop over the search results for one query.
pub struct BrowseSession<'a, C: ?Sized, P, V> {
    client: &'a C,
    prompter: P,
    view: V,
    query: Option<String>,
}

impl<'a, C, P, V> BrowseSession<'a, C, P, V>
where
    C: MarketClient + ?Sized,
    P: Prompter,
    V: BrowseView,
{
    pub fn new(client: &'a C, prompter: P, view: V, query: Option<&str>) -> Self {
        Self {
            client,
            prompter,
            view,
            query: query.map(str::to_string),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Fetch and show the first page. `None` when there is nothing to browse.
    pub fn start(&mut self) -> Result<Option<BrowseState>> {
        match fetch_page(self.client, self.query.as_deref(), 0)? {
            PageResult::Results(page) => {
                self.view.show_page(&page, self.query.as_deref())?;
                Ok(Some(BrowseState::from_page(&page)))
            }
            PageResult::Empty => {
                self.view.show_empty(self.query.as_deref())?;
                Ok(None)
            }
        }
    }

    /// Apply one line of input to `state`.
    pub fn handle_input(&mut self, state: &mut BrowseState, input: &str) -> Result<Step> {
        match interpret(input, &state.rows) {
            Action::Select(row) => {
                if let Some(id) = state.rows.get(row) {
                    info!("showing listing {} (row {})", id, row);
                    let detail = self.client.listing(id)?;
                    self.view.show_detail(&detail)?;
                }
                Ok(Step::Continue)
            }
            Action::Navigate(keyword) => {
                let Some(target) = target_page(keyword, state.current_page, state.total_pages)
                else {
                    debug!(
                        "ignoring {:?} from page {}/{}",
                        keyword,
                        state.current_page + 1,
                        state.total_pages
                    );
                    return Ok(Step::Continue);
                };

                match fetch_page(self.client, self.query.as_deref(), target)? {
                    PageResult::Results(page) => {
                        self.view.show_page(&page, self.query.as_deref())?;
                        // The page count from the first fetch bounds the whole session.
                        state.current_page = page.index;
                        state.rows = RowMap::for_page(&page);
                        debug!(
                            "now on page {}/{} with rows {:?}",
                            state.current_page + 1,
                            state.total_pages,
                            state.rows.row_numbers().collect::<Vec<_>>()
                        );
                        Ok(Step::Continue)
                    }
                    PageResult::Empty => {
                        self.view.show_empty(self.query.as_deref())?;
                        Ok(Step::Done(SessionOutcome::NoResults))
                    }
                }
            }
            Action::Cancel => Ok(Step::Done(SessionOutcome::Cancelled)),
            Action::Ignore => Ok(Step::Continue),
        }
    }

    /// Run the session until the user cancels or input ends.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        let Some(mut state) = self.start()? else {
            return Ok(SessionOutcome::NoResults);
        };

        loop {
            let Some(input) = self.prompter.read(PROMPT)? else {
                return Ok(SessionOutcome::Aborted);
            };

            if let Step::Done(outcome) = self.handle_input(&mut state, &input)? {
                return Ok(outcome);
            }
        }
    }
}
