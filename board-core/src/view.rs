use std::ops::Range;

use crate::error::BoardError;
use crate::memo::Memo;
use crate::pagination::{PaginationState, page_count, page_window};
use crate::Post;

/// Posts whose title contains `search` verbatim. An empty search keeps all.
pub fn filter_posts(posts: &[Post], search: &str) -> Vec<Post> {
    if search.is_empty() {
        return posts.to_vec();
    }

    posts
        .iter()
        .filter(|post| post.title.contains(search))
        .cloned()
        .collect()
}

/// Items of the 1-based `page`, clipped to the list; empty past the end.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    &items[page_range(items.len(), page, page_size)]
}

fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    if page == 0 || page_size == 0 {
        return 0..0;
    }
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = page.saturating_mul(page_size).min(len);
    start..end
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
}

/// A reader's session over a fixed post list.
///
/// The filtered list is only recomputed when the search text changes, and the
/// visible slice only when the page, the page size, or the filtered list
/// change.
#[derive(Debug, Default)]
pub struct ListingView {
    posts: Vec<Post>,
    search: SearchState,
    pagination: PaginationState,
    filtered: Memo<String, Vec<Post>>,
    visible: Memo<(u64, usize, usize), Range<usize>>,
}

impl ListingView {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    pub fn with_page_size(posts: Vec<Post>, page_size: usize) -> Result<Self, BoardError> {
        Ok(Self {
            posts,
            pagination: PaginationState::new(1, page_size)?,
            ..Self::default()
        })
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn on_search_change(&mut self, value: impl Into<String>) {
        self.search.query = value.into();
    }

    pub fn on_page_change(&mut self, page: usize) -> Result<(), BoardError> {
        self.pagination.set_page(page)
    }

    pub fn on_page_size_change(&mut self, page_size: usize) -> Result<(), BoardError> {
        self.pagination.set_page_size(page_size)
    }

    /// Posts matching the current search, across all pages.
    pub fn filtered(&mut self) -> &[Post] {
        self.refresh();
        self.filtered
            .value()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of posts matching the current search; the pagination total.
    pub fn filtered_len(&mut self) -> usize {
        self.filtered().len()
    }

    pub fn page_count(&mut self) -> usize {
        let page_size = self.pagination.page_size();
        page_count(self.filtered_len(), page_size)
    }

    pub fn page_window(&mut self) -> Vec<Option<usize>> {
        let current = self.pagination.page();
        page_window(self.page_count(), current)
    }

    /// The slice of filtered posts shown on the current page.
    pub fn visible(&mut self) -> &[Post] {
        let range = self.refresh();
        self.filtered
            .value()
            .and_then(|posts| posts.get(range))
            .unwrap_or_default()
    }

    /// How many times the filtered and visible derivations were computed.
    pub fn revisions(&self) -> (u64, u64) {
        (self.filtered.revision(), self.visible.revision())
    }

    fn refresh(&mut self) -> Range<usize> {
        let posts = &self.posts;
        let len = self
            .filtered
            .get_or_compute(self.search.query.clone(), |query| filter_posts(posts, query))
            .len();

        let key = (
            self.filtered.revision(),
            self.pagination.page(),
            self.pagination.page_size(),
        );
        self.visible
            .get_or_compute(key, |&(_, page, page_size)| page_range(len, page, page_size))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str) -> Post {
        Post {
            title: title.to_string(),
            body: format!("{title} body"),
            author: "Leanne Graham, Bret".to_string(),
        }
    }

    fn numbered(n: usize) -> Vec<Post> {
        (1..=n).map(|i| post(&format!("post {i}"))).collect()
    }

    fn titles(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn filter_keeps_only_matching_titles() {
        let posts = vec![post("Hello World"), post("hello there"), post("World peace")];

        let hits = filter_posts(&posts, "World");
        assert_eq!(titles(&hits), ["Hello World", "World peace"]);
        for p in posts.iter().filter(|p| !hits.contains(p)) {
            assert!(!p.title.contains("World"));
        }
    }

    #[test]
    fn filter_is_case_sensitive_and_untrimmed() {
        let posts = vec![post("Hello World"), post("hello")];

        assert_eq!(titles(&filter_posts(&posts, "hello")), ["hello"]);
        assert!(filter_posts(&posts, " hello ").is_empty());
    }

    #[test]
    fn empty_search_is_identity() {
        let posts = numbered(5);
        assert_eq!(filter_posts(&posts, ""), posts);
    }

    #[test]
    fn filter_ignores_body_and_author() {
        let posts = vec![post("alpha")];
        assert!(filter_posts(&posts, "body").is_empty());
        assert!(filter_posts(&posts, "Bret").is_empty());
    }

    #[test]
    fn pages_reassemble_the_list() {
        let items: Vec<usize> = (0..23).collect();

        for page_size in 1..=25 {
            let mut joined = Vec::new();
            for page in 1..=page_count(items.len(), page_size) {
                let chunk = paginate(&items, page, page_size);
                assert!(chunk.len() <= page_size);
                joined.extend_from_slice(chunk);
            }
            assert_eq!(joined, items, "page size {page_size}");
        }
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = [1, 2, 3];
        assert_eq!(paginate(&items, 2, 3), &[] as &[i32]);
        assert!(paginate(&items, 100, 10).is_empty());
        assert!(paginate(&items, usize::MAX, usize::MAX).is_empty());
        assert!(paginate::<i32>(&[], 1, 10).is_empty());
    }

    #[test]
    fn last_page_is_clipped() {
        let items: Vec<_> = (1..=25).collect();
        assert_eq!(paginate(&items, 3, 10), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn view_defaults_to_first_ten() {
        let mut view = ListingView::new(numbered(100));

        assert_eq!(view.visible().len(), 10);
        assert_eq!(view.visible()[0].title, "post 1");
        assert_eq!(view.filtered_len(), 100);
        assert_eq!(view.page_count(), 10);
    }

    #[test]
    fn visible_follows_search_and_page() {
        let mut view = ListingView::new(numbered(100));

        view.on_search_change("post 1");
        // "post 1", "post 10".."post 19", "post 100"
        assert_eq!(view.filtered_len(), 12);
        view.on_page_change(2).unwrap();
        assert_eq!(titles(view.visible()), ["post 19", "post 100"]);

        view.on_search_change("");
        assert_eq!(titles(view.visible())[0], "post 11");
    }

    #[test]
    fn growing_page_size_keeps_page_and_may_empty_it() {
        let mut view = ListingView::new(numbered(30));
        view.on_page_change(3).unwrap();
        assert_eq!(view.visible().len(), 10);

        view.on_page_size_change(20).unwrap();
        assert_eq!(view.pagination().page(), 3);
        assert!(view.visible().is_empty());

        view.on_page_size_change(10).unwrap();
        assert_eq!(view.visible()[0].title, "post 21");
    }

    #[test]
    fn search_past_current_page_yields_empty_slice() {
        let mut view = ListingView::new(numbered(50));
        view.on_page_change(5).unwrap();
        view.on_search_change("post 4");

        assert_eq!(view.filtered_len(), 11);
        assert!(view.visible().is_empty());
    }

    #[test]
    fn invalid_pagination_leaves_state_untouched() {
        let mut view = ListingView::new(numbered(30));
        view.on_page_change(2).unwrap();

        assert!(view.on_page_change(0).is_err());
        assert!(view.on_page_size_change(0).is_err());
        assert_eq!(view.pagination(), PaginationState::new(2, 10).unwrap());
    }

    #[test]
    fn derivations_are_memoized() {
        let mut view = ListingView::new(numbered(40));

        view.visible();
        view.visible();
        assert_eq!(view.revisions(), (1, 1));

        view.on_page_change(2).unwrap();
        view.visible();
        assert_eq!(view.revisions(), (1, 2));

        view.on_search_change("post");
        view.visible();
        assert_eq!(view.revisions(), (2, 3));

        view.on_search_change("post");
        view.visible();
        assert_eq!(view.revisions(), (2, 3));

        view.on_search_change("");
        assert_eq!(view.filtered_len(), 40);
        assert_eq!(view.revisions(), (3, 4));
    }

    #[test]
    fn visible_titles_always_contain_search() {
        let mut view = ListingView::with_page_size(numbered(120), 7).unwrap();
        for search in ["", "1", "post 2", "9", "nothing"] {
            view.on_search_change(search);
            for page in 1..=view.page_count() + 1 {
                view.on_page_change(page).unwrap();
                let visible = view.visible();
                assert!(visible.len() <= 7);
                assert!(visible.iter().all(|p| p.title.contains(search)));
            }
        }
    }
}
