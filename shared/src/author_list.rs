//! View state of the author list: search filter, "load more" window and
//! sticky selection.

use crate::models::{Author, AuthorRef};

/// Cards shown initially and added by each "load more".
pub const AUTHOR_PAGE_STEP: usize = 6;

/// State owned by the author list component.
///
/// The full collection and the filtered subset are kept apart; what is shown
/// is always "filtered if a filter is active, else everything", cut to
/// `max_visible`.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorListState {
    authors: Vec<Author>,
    filtered: Option<Vec<Author>>,
    query: String,
    max_visible: usize,
    loading: bool,
    selected: Option<String>,
}

impl Default for AuthorListState {
    fn default() -> Self {
        Self {
            authors: Vec::new(),
            filtered: None,
            query: String::new(),
            max_visible: AUTHOR_PAGE_STEP,
            loading: true,
            selected: None,
        }
    }
}

impl AuthorListState {
    /// Full, unfiltered collection.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// Current search text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Page-size cursor.
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    /// True until the first [`hydrate`](Self::hydrate).
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Id of the author whose articles are shown, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Install a loaded collection (possibly empty after a failed fetch) and
    /// stop the spinner. An active filter is re-applied.
    pub fn hydrate(&mut self, authors: Vec<Author>) {
        self.authors = authors;
        self.loading = false;
        if self.filtered.is_some() {
            let query = std::mem::take(&mut self.query);
            self.filter(&query);
        }
    }

    /// Case-insensitive substring match on the name, spaces included. A
    /// blank query clears the filter. Always resets the window to one page.
    pub fn filter(&mut self, query: &str) {
        self.query = query.to_string();
        self.max_visible = AUTHOR_PAGE_STEP;
        if query.trim().is_empty() {
            self.filtered = None;
            return;
        }
        let needle = query.to_lowercase();
        self.filtered = Some(
            self.authors
                .iter()
                .filter(|author| author.name.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        );
    }

    /// Authors the current filter lets through, before windowing.
    pub fn displayed(&self) -> &[Author] {
        self.filtered.as_deref().unwrap_or(&self.authors)
    }

    /// Authors to render as cards.
    pub fn visible(&self) -> &[Author] {
        let displayed = self.displayed();
        &displayed[..displayed.len().min(self.max_visible)]
    }

    /// Whether the "load more" control should be shown.
    pub fn has_more(&self) -> bool {
        self.max_visible < self.displayed().len()
    }

    /// Grow the window by one page.
    pub fn load_more(&mut self) {
        self.max_visible += AUTHOR_PAGE_STEP;
    }

    /// Select an author among the displayed ones. Other cards stay hidden
    /// until [`show_all`](Self::show_all).
    pub fn select(&mut self, author_id: &str) -> Option<AuthorRef> {
        let author = self
            .displayed()
            .iter()
            .find(|author| author.id == author_id)?
            .to_ref();
        self.selected = Some(author.id.clone());
        Some(author)
    }

    /// Whether the card for `author_id` is hidden by a selection.
    pub fn is_hidden(&self, author_id: &str) -> bool {
        self.selected
            .as_deref()
            .is_some_and(|selected| selected != author_id)
    }

    /// Drop filter, paging and selection.
    pub fn show_all(&mut self) {
        self.filtered = None;
        self.query.clear();
        self.max_visible = AUTHOR_PAGE_STEP;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthorListState, AUTHOR_PAGE_STEP};
    use crate::models::Author;

    fn author(id: usize, name: &str) -> Author {
        Author {
            id: id.to_string(),
            name: name.to_string(),
            avatar: format!("https://avatars.test/{id}.png"),
            birthdate: String::new(),
            bio: String::new(),
            last_article: None,
            article_count: None,
        }
    }

    fn ten_authors() -> AuthorListState {
        let mut state = AuthorListState::default();
        state.hydrate((1..=10).map(|id| author(id, &format!("Writer {id}"))).collect());
        state
    }

    #[test]
    fn starts_loading_with_one_page_window() {
        let state = AuthorListState::default();
        assert!(state.is_loading());
        assert_eq!(state.max_visible(), AUTHOR_PAGE_STEP);
        assert!(state.visible().is_empty());
        assert!(!state.has_more());
    }

    #[test]
    fn load_more_reveals_all_ten_and_hides_control() {
        let mut state = ten_authors();
        assert!(!state.is_loading());
        assert_eq!(state.visible().len(), 6);
        assert!(state.has_more());

        state.load_more();
        assert_eq!(state.visible().len(), 10);
        assert!(!state.has_more());
    }

    #[test]
    fn filter_is_case_insensitive_and_resets_window() {
        let mut state = ten_authors();
        state.load_more();
        state.filter("WRITER 1");
        // "Writer 1" and "Writer 10"
        assert_eq!(state.visible().len(), 2);
        assert_eq!(state.max_visible(), AUTHOR_PAGE_STEP);
    }

    #[test]
    fn zero_match_filter_shows_nothing_and_keeps_authors() {
        let mut state = ten_authors();
        let before = state.authors().to_vec();
        state.filter("nobody");
        assert!(state.visible().is_empty());
        assert!(!state.has_more());
        assert_eq!(state.authors(), before.as_slice());
    }

    #[test]
    fn empty_query_clears_filter() {
        let mut state = ten_authors();
        state.filter("writer 3");
        assert_eq!(state.visible().len(), 1);
        state.filter("   ");
        assert_eq!(state.displayed().len(), 10);
    }

    #[test]
    fn trailing_space_is_part_of_the_needle() {
        let mut state = AuthorListState::default();
        state.hydrate(vec![author(1, "Ann Lee"), author(2, "Annabel")]);
        state.filter("ann ");
        let names: Vec<&str> = state.visible().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Ann Lee"]);
    }

    #[test]
    fn selection_is_sticky_until_show_all() {
        let mut state = ten_authors();
        let picked = state.select("3").expect("author 3 is displayed");
        assert_eq!(picked.name, "Writer 3");
        assert!(state.is_hidden("4"));
        assert!(!state.is_hidden("3"));

        state.filter("writer");
        assert!(state.is_hidden("4"));

        state.show_all();
        assert!(!state.is_hidden("4"));
        assert_eq!(state.query(), "");
        assert_eq!(state.displayed().len(), 10);
    }

    #[test]
    fn selecting_unknown_author_changes_nothing() {
        let mut state = ten_authors();
        assert!(state.select("99").is_none());
        assert!(state.selected().is_none());
    }

    #[test]
    fn hydrate_reapplies_active_filter() {
        let mut state = AuthorListState::default();
        state.filter("ada");
        state.hydrate(vec![author(1, "Ada"), author(2, "Grace")]);
        assert_eq!(state.visible().len(), 1);
        assert_eq!(state.query(), "ada");
    }
}
