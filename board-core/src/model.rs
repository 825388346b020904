use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A post as shown to the reader, with its author already resolved.
/// Displays as a text card: title, body, then the author line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("# {title}\n{body}\n  {author}")]
pub struct Post {
    pub title: String,
    pub body: String,
    pub author: String,
}

/// Post record as served by the source API. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPost {
    pub id: u64,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
}

impl User {
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.username)
    }
}
