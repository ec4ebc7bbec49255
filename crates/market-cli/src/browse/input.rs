use market_types::RowMap;

/// Navigation keywords accepted at the browse prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Forward,
    Backward,
    Cancel,
}

/// What a line of user input asks the browse loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Show the listing at this row of the current page.
    Select(usize),
    /// Move to another page; may still be out of range.
    Navigate(Keyword),
    Cancel,
    /// Unknown rows, unknown words: silently re-prompt.
    Ignore,
}

pub fn parse_keyword(input: &str) -> Option<Keyword> {
    match input.trim().to_lowercase().as_str() {
        "n" | "next" | "f" | "forward" => Some(Keyword::Forward),
        "p" | "previous" | "b" | "back" => Some(Keyword::Backward),
        "q" | "cancel" | "c" => Some(Keyword::Cancel),
        _ => None,
    }
}

/// Interpret `input` against the rows currently on screen.
///
/// A number only selects when it is a row of the current page; any other
/// number falls through to keyword parsing and ends up ignored.
pub fn interpret(input: &str, rows: &RowMap) -> Action {
    let input = input.trim();

    if let Ok(row) = input.parse::<usize>()
        && rows.contains(row)
    {
        return Action::Select(row);
    }

    match parse_keyword(input) {
        Some(Keyword::Cancel) => Action::Cancel,
        Some(keyword) => Action::Navigate(keyword),
        None => Action::Ignore,
    }
}

/// Page that `keyword` moves to from `current`, or `None` when it would
/// leave `0..total_pages`.
pub fn target_page(keyword: Keyword, current: usize, total_pages: usize) -> Option<usize> {
    let target = match keyword {
        Keyword::Forward => current.checked_add(1)?,
        Keyword::Backward => current.checked_sub(1)?,
        Keyword::Cancel => return None,
    };
    (target < total_pages).then_some(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_types::{ListingId, ListingSummary, Page};

    fn rows(index: usize, count: usize) -> RowMap {
        let page = Page {
            index,
            total_pages: 3,
            listings: (0..count)
                .map(|i| ListingSummary {
                    id: ListingId::new(i.to_string()),
                    title: String::new(),
                    username: String::new(),
                    min_price: 0u64.into(),
                    max_price: 0u64.into(),
                    category: String::new(),
                    description: String::new(),
                })
                .collect(),
        };
        RowMap::for_page(&page)
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        for word in ["n", "next", "F", "FORWARD", "Next"] {
            assert_eq!(parse_keyword(word), Some(Keyword::Forward), "{}", word);
        }
        for word in ["p", "previous", "B", "Back"] {
            assert_eq!(parse_keyword(word), Some(Keyword::Backward), "{}", word);
        }
        for word in ["q", "Q", "cancel", "CANCEL", "c"] {
            assert_eq!(parse_keyword(word), Some(Keyword::Cancel), "{}", word);
        }
        assert_eq!(parse_keyword("quit"), None);
        assert_eq!(parse_keyword(""), None);
    }

    #[test]
    fn test_known_row_selects() {
        assert_eq!(interpret("5", &rows(0, 10)), Action::Select(5));
        assert_eq!(interpret(" 12 ", &rows(1, 10)), Action::Select(12));
    }

    #[test]
    fn test_unknown_row_is_ignored() {
        let current = rows(1, 10);
        assert_eq!(interpret("5", &current), Action::Ignore);
        assert_eq!(interpret("21", &current), Action::Ignore);
        assert_eq!(interpret("0", &current), Action::Ignore);
        assert_eq!(interpret("-3", &current), Action::Ignore);
    }

    #[test]
    fn test_words_and_garbage() {
        let current = rows(0, 10);
        assert_eq!(interpret("next", &current), Action::Navigate(Keyword::Forward));
        assert_eq!(interpret("b", &current), Action::Navigate(Keyword::Backward));
        assert_eq!(interpret("C", &current), Action::Cancel);
        assert_eq!(interpret("hello", &current), Action::Ignore);
    }

    #[test]
    fn test_target_page_bounds() {
        assert_eq!(target_page(Keyword::Forward, 0, 3), Some(1));
        assert_eq!(target_page(Keyword::Forward, 2, 3), None);
        assert_eq!(target_page(Keyword::Backward, 1, 3), Some(0));
        assert_eq!(target_page(Keyword::Backward, 0, 3), None);
        assert_eq!(target_page(Keyword::Forward, 0, 1), None);
        assert_eq!(target_page(Keyword::Cancel, 0, 3), None);
    }
}
