use async_trait::async_trait;

pub use crate::debounce::Debounced;
pub use crate::error::BoardError;
pub use crate::http_client::{BoardClientHttp, DEFAULT_API_URL};
pub use crate::join::{join_posts, load_posts};
pub use crate::memo::Memo;
pub use crate::model::{Post, RawPost, User};
pub use crate::pagination::{
    DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, PaginationState, page_count, page_window,
};
pub use crate::props::{PageProps, SERVER_ERROR};
pub use crate::view::{ListingView, SearchState, filter_posts, paginate};

mod debounce;
mod error;
mod http_client;
mod join;
mod memo;
mod model;
mod pagination;
mod props;
mod view;

/// Remote collections the listing is built from.
#[async_trait(?Send)]
pub trait PostSource {
    async fn fetch_posts(&self) -> Result<Vec<RawPost>, BoardError>;
    async fn fetch_users(&self) -> Result<Vec<User>, BoardError>;
}
