//! Category + free-text filtering over a fixed collection of items.
//!
//! The engine never reorders items. It only keeps one visibility flag per
//! item, in original document order, and recomputes all of them whenever
//! the category, the search term or the page changes.

/// Category value that disables category filtering.
pub const ALL: &str = "all";

/// An item that can be shown or hidden by a [`FilterEngine`].
pub trait Filterable {
    fn category(&self) -> &str;

    /// Text fields searched by the free-text term. A term matches when it is
    /// contained in at least one field.
    fn search_fields(&self) -> Vec<&str>;
}

/// Active category and search term of one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active_category: String,
    search_term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_category: ALL.to_string(),
            search_term: String::new(),
        }
    }
}

impl FilterState {
    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_category(&mut self, category: &str) {
        self.active_category = category.to_string();
    }

    /// Stores the term trimmed and lowercased.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.trim().to_lowercase();
    }

    pub fn matches_category(&self, item: &impl Filterable) -> bool {
        self.active_category == ALL || item.category() == self.active_category
    }

    pub fn matches_search(&self, item: &impl Filterable) -> bool {
        self.search_term.is_empty()
            || item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.search_term))
    }

    pub fn matches(&self, item: &impl Filterable) -> bool {
        self.matches_category(item) && self.matches_search(item)
    }
}

/// Owns a collection and its per-item visibility.
///
/// With a page size set, only the matching items inside
/// `[page * page_size, (page + 1) * page_size)` are visible; any change of
/// category or search term goes back to the first page.
#[derive(Debug, Clone)]
pub struct FilterEngine<T> {
    items: Vec<T>,
    state: FilterState,
    page_size: Option<usize>,
    page: usize,
    visible: Vec<bool>,
    match_count: usize,
    evaluations: usize,
}

impl<T: Filterable> FilterEngine<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut engine = Self {
            visible: vec![true; items.len()],
            match_count: items.len(),
            items,
            state: FilterState::default(),
            page_size: None,
            page: 0,
            evaluations: 0,
        };
        engine.evaluate();
        engine
    }

    pub fn paginated(items: Vec<T>, page_size: usize) -> Self {
        let mut engine = Self::new(items);
        engine.page_size = Some(page_size.max(1));
        engine.evaluate();
        engine
    }

    pub fn set_category(&mut self, category: &str) {
        self.state.set_category(category);
        self.page = 0;
        self.evaluate();
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.state.set_search_term(term);
        self.page = 0;
        self.evaluate();
    }

    /// Moves to `page`, clamped to the last page that has matches.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.total_pages().saturating_sub(1));
        self.evaluate();
    }

    fn evaluate(&mut self) {
        let (start, end) = match self.page_size {
            Some(size) => (self.page * size, (self.page + 1) * size),
            None => (0, usize::MAX),
        };

        let mut rank = 0;
        for (item, visible) in self.items.iter().zip(self.visible.iter_mut()) {
            if self.state.matches(item) {
                *visible = rank >= start && rank < end;
                rank += 1;
            } else {
                *visible = false;
            }
        }
        self.match_count = rank;
        self.evaluations += 1;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    pub fn visibility(&self) -> &[bool] {
        &self.visible
    }

    pub fn visible_items(&self) -> impl Iterator<Item = &T> {
        self.items
            .iter()
            .zip(self.visible.iter())
            .filter(|(_, visible)| **visible)
            .map(|(item, _)| item)
    }

    /// Number of items matching category and term, ignoring pagination.
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> Option<usize> {
        self.page_size
    }

    /// At least one page, even with no matches.
    pub fn total_pages(&self) -> usize {
        match self.page_size {
            Some(size) => self.match_count.div_ceil(size).max(1),
            None => 1,
        }
    }

    /// How many times visibility has been recomputed.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Card {
        category: &'static str,
        title: &'static str,
        description: &'static str,
    }

    impl Filterable for Card {
        fn category(&self) -> &str {
            self.category
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.title, self.description]
        }
    }

    fn cards() -> Vec<Card> {
        vec![
            Card { category: "web", title: "Shop", description: "Next.js storefront" },
            Card { category: "ai", title: "PixelPrompt", description: "Wireframes to code" },
            Card { category: "mobile", title: "Bus Tracker", description: "Live arrivals" },
            Card { category: "ai", title: "Chatbot", description: "Customer SERVICE bot" },
        ]
    }

    fn assert_predicate(engine: &FilterEngine<Card>) {
        for (i, item) in engine.items().iter().enumerate() {
            assert_eq!(engine.is_visible(i), engine.state().matches(item), "item {}", i);
        }
    }

    #[test]
    fn test_identity_case() {
        let engine = FilterEngine::new(cards());
        assert!(engine.visibility().iter().all(|v| *v));
        assert_eq!(engine.match_count(), 4);
    }

    #[test]
    fn test_category_filter() {
        let mut engine = FilterEngine::new(cards());
        engine.set_category("ai");
        assert_eq!(engine.visibility(), &[false, true, false, true]);
        assert_predicate(&engine);

        engine.set_category(ALL);
        assert!(engine.visibility().iter().all(|v| *v));
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let mut engine = FilterEngine::new(cards());
        engine.set_search_term("  service ");
        assert_eq!(engine.state().search_term(), "service");
        assert_eq!(engine.visibility(), &[false, false, false, true]);
        assert_predicate(&engine);
    }

    #[test]
    fn test_category_and_search_combine() {
        let mut engine = FilterEngine::new(cards());
        engine.set_category("ai");
        engine.set_search_term("pixel");
        assert_eq!(engine.visibility(), &[false, true, false, false]);

        engine.set_category("web");
        assert_eq!(engine.visibility(), &[false, false, false, false]);
        assert_eq!(engine.match_count(), 0);
        assert_predicate(&engine);
    }

    #[test]
    fn test_term_matches_single_field_only() {
        let mut engine = FilterEngine::new(cards());
        // spans title and description, so no single field contains it
        engine.set_search_term("shopnext");
        assert_eq!(engine.match_count(), 0);
    }

    #[test]
    fn test_unknown_category_hides_everything() {
        let mut engine = FilterEngine::new(cards());
        engine.set_category("games");
        assert!(engine.visibility().iter().all(|v| !*v));
    }

    fn many(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| Card {
                category: if i % 2 == 0 { "even" } else { "odd" },
                title: "post",
                description: "",
            })
            .collect()
    }

    #[test]
    fn test_pagination_window() {
        let mut engine = FilterEngine::paginated(many(14), 6);
        assert_eq!(engine.total_pages(), 3);
        assert_eq!(engine.visible_items().count(), 6);
        assert!(engine.is_visible(5));
        assert!(!engine.is_visible(6));

        engine.set_page(2);
        assert_eq!(engine.visible_items().count(), 2);
        assert!(engine.is_visible(12) && engine.is_visible(13));

        engine.set_page(10);
        assert_eq!(engine.page(), 2);
    }

    #[test]
    fn test_pagination_follows_matching_order() {
        let mut engine = FilterEngine::paginated(many(14), 3);
        engine.set_category("odd");
        assert_eq!(engine.match_count(), 7);
        engine.set_page(1);
        let visible: Vec<usize> = (0..14).filter(|i| engine.is_visible(*i)).collect();
        assert_eq!(visible, vec![7, 9, 11]);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut engine = FilterEngine::paginated(many(14), 6);
        engine.set_page(1);
        assert_eq!(engine.page(), 1);
        engine.set_search_term("post");
        assert_eq!(engine.page(), 0);

        engine.set_page(2);
        engine.set_category("even");
        assert_eq!(engine.page(), 0);
        assert_eq!(engine.visible_items().count(), 6);
    }

    #[test]
    fn test_empty_collection() {
        let mut engine = FilterEngine::<Card>::paginated(Vec::new(), 6);
        engine.set_page(3);
        assert_eq!(engine.page(), 0);
        assert_eq!(engine.total_pages(), 1);
        assert!(!engine.is_visible(0));
    }
}
