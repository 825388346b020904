use std::sync::Arc;

use board_core::{
    PageProps, PaginationState, Post, filter_posts, page_count, page_window, paginate,
};
use serde::Serialize;
use tracing::instrument;

use crate::domain::error::ApiError;

/// One page of the listing as seen by a client.
#[derive(Debug, Serialize)]
pub struct ListingPage {
    pub posts: Vec<Post>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub pages: Vec<Option<usize>>,
    pub error: String,
}

/// Serves pages out of props built once at startup.
#[derive(Clone)]
pub struct ListingService {
    props: Arc<PageProps>,
    default_page_size: usize,
}

impl ListingService {
    pub fn new(props: PageProps, default_page_size: usize) -> Self {
        Self {
            props: Arc::new(props),
            default_page_size,
        }
    }

    pub fn props(&self) -> &PageProps {
        &self.props
    }

    #[instrument(skip(self))]
    pub fn list(
        &self,
        search: &str,
        page: Option<usize>,
        page_size: Option<usize>,
    ) -> Result<ListingPage, ApiError> {
        let state = PaginationState::new(
            page.unwrap_or(1),
            page_size.unwrap_or(self.default_page_size),
        )?;

        let filtered = filter_posts(&self.props.posts, search);
        let total = filtered.len();
        let posts = paginate(&filtered, state.page(), state.page_size()).to_vec();

        Ok(ListingPage {
            posts,
            total,
            page: state.page(),
            page_size: state.page_size(),
            pages: page_window(page_count(total, state.page_size()), state.page()),
            error: self.props.error.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(n: usize) -> ListingService {
        let posts = (1..=n)
            .map(|i| Post {
                title: format!("title {i}"),
                body: "body".into(),
                author: "A, a".into(),
            })
            .collect();
        ListingService::new(
            PageProps {
                posts,
                error: String::new(),
            },
            10,
        )
    }

    #[test]
    fn uses_default_page_size() {
        let page = service(25).list("", None, None).unwrap();

        assert_eq!(page.posts.len(), 10);
        assert_eq!(page.total, 25);
        assert_eq!((page.page, page.page_size), (1, 10));
        assert_eq!(page.pages, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn total_counts_filtered_posts() {
        let page = service(25).list("title 2", Some(1), Some(5)).unwrap();

        // "title 2", "title 20".."title 25"
        assert_eq!(page.total, 7);
        assert_eq!(page.posts.len(), 5);
        assert!(page.posts.iter().all(|p| p.title.contains("title 2")));
    }

    #[test]
    fn page_beyond_range_is_empty() {
        let page = service(5).list("", Some(4), None).unwrap();
        assert!(page.posts.is_empty());
        assert_eq!(page.total, 5);
    }

    #[test]
    fn huge_page_number_is_empty_not_a_crash() {
        let page = service(25).list("", Some(usize::MAX), None).unwrap();

        assert!(page.posts.is_empty());
        assert_eq!(page.page, usize::MAX);
        assert_eq!(page.pages, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn zero_page_is_rejected() {
        assert!(matches!(
            service(5).list("", Some(0), None),
            Err(ApiError::InvalidPagination(_))
        ));
        assert!(matches!(
            service(5).list("", None, Some(0)),
            Err(ApiError::InvalidPagination(_))
        ));
    }

    #[test]
    fn carries_build_error() {
        let service = ListingService::new(PageProps::failed(), 10);
        let page = service.list("", None, None).unwrap();

        assert!(page.posts.is_empty());
        assert_eq!(page.error, "Server Error");
    }
}
