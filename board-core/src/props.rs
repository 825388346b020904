use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::join::load_posts;
use crate::{Post, PostSource};

/// Message handed to the page whenever the listing could not be built.
pub const SERVER_ERROR: &str = "Server Error";

/// What the listing page is rendered from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageProps {
    pub posts: Vec<Post>,
    pub error: String,
}

impl PageProps {
    /// Builds the props once. Any fetch or join failure collapses into an
    /// empty listing carrying [`SERVER_ERROR`]; the cause only goes to the log.
    pub async fn build<S>(source: &S) -> Self
    where
        S: PostSource + ?Sized,
    {
        match load_posts(source).await {
            Ok(posts) => {
                info!(posts = posts.len(), "listing props built");
                Self {
                    posts,
                    error: String::new(),
                }
            }
            Err(e) => {
                error!(error = %e, "failed to build listing props");
                Self::failed()
            }
        }
    }

    pub fn failed() -> Self {
        Self {
            posts: Vec::new(),
            error: SERVER_ERROR.to_string(),
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}
