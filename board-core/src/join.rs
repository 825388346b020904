use std::collections::HashMap;

use crate::error::BoardError;
use crate::{Post, PostSource, RawPost, User};
use tracing::info;

/// Resolves every post's author. Source order is kept; the first user with a
/// matching id wins.
pub fn join_posts(posts: Vec<RawPost>, users: &[User]) -> Result<Vec<Post>, BoardError> {
    let mut authors: HashMap<u64, String> = HashMap::with_capacity(users.len());
    for user in users {
        authors
            .entry(user.id)
            .or_insert_with(|| user.display_name());
    }

    posts
        .into_iter()
        .map(|raw| {
            let author = authors
                .get(&raw.user_id)
                .cloned()
                .ok_or(BoardError::MissingAuthor {
                    post_id: raw.id,
                    user_id: raw.user_id,
                })?;
            Ok(Post {
                title: raw.title,
                body: raw.body,
                author,
            })
        })
        .collect()
}

/// Fetches posts, then users, and joins them. Any failure fails the whole load.
pub async fn load_posts<S>(source: &S) -> Result<Vec<Post>, BoardError>
where
    S: PostSource + ?Sized,
{
    let posts = source.fetch_posts().await?;
    let users = source.fetch_users().await?;
    info!(posts = posts.len(), users = users.len(), "collections fetched");

    join_posts(posts, &users)
}
