use market_types::{ListingDetail, Page};

use crate::presentation::view_models::{
    BrowseAllViewModel, CommandResultViewModel, EmptyResultsViewModel, Guidance,
    ListingDetailViewModel, ListingPageViewModel, ListingRowViewModel, StatusBadge,
};

pub fn present_page(page: &Page, query: Option<&str>) -> CommandResultViewModel<ListingPageViewModel> {
    let rows = page
        .rows()
        .map(|(row, listing)| ListingRowViewModel {
            row,
            listing_id: listing.id.to_string(),
            title: listing.title.clone(),
            creator: listing.username.clone(),
            min_price: listing.min_price.clone(),
            max_price: listing.max_price.clone(),
            category: listing.category.clone(),
            description: listing.description.clone(),
        })
        .collect();

    CommandResultViewModel::new(ListingPageViewModel {
        page_number: page.index + 1,
        total_pages: page.total_pages,
        query: query.map(str::to_string),
        rows,
    })
}

pub fn present_empty(query: Option<&str>) -> CommandResultViewModel<EmptyResultsViewModel> {
    let result = CommandResultViewModel::new(EmptyResultsViewModel {
        query: query.map(str::to_string),
    });

    match query {
        Some(_) => result.with_suggestion(
            Guidance::new("Browse every listing instead").with_command("market search"),
        ),
        None => result,
    }
}

pub fn present_browse_all() -> CommandResultViewModel<BrowseAllViewModel> {
    CommandResultViewModel::new(BrowseAllViewModel {
        message: "Listing all the apps in the marketplace".to_string(),
    })
}

pub fn present_detail(detail: &ListingDetail) -> CommandResultViewModel<ListingDetailViewModel> {
    let active = detail.is_available();
    let result = CommandResultViewModel::new(ListingDetailViewModel {
        title: detail.title.clone(),
        creator: detail.username.clone(),
        description: detail.description.clone(),
        min_price: detail.min_price.clone(),
        max_price: detail.max_price.clone(),
        active,
        uptime_percent: detail.uptime_percent(),
        docs_url: detail.website_url.clone(),
        app_url: detail.app_url.clone(),
        category: detail.category.clone(),
        keywords: detail.keywords.clone(),
        version: detail.version.clone(),
        updated: detail.updated,
        quick_start: detail.quick_buy.clone(),
        usage_docs: detail.usage_docs.clone(),
    });

    if active {
        result
    } else {
        result.with_badge(StatusBadge::warning("This app is currently inactive"))
    }
}
