use std::collections::HashSet;

use crate::{Author, ContentBlock, Error, Time};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct PostId(pub u64);

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    pub published_at: Time,

    /// Blocks in render order
    pub content: Vec<ContentBlock>,
}

impl Post {
    pub fn sort_newest_first(posts: &mut [Post]) {
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at).then(a.id.cmp(&b.id)));
    }
}

/// Parse a feed fixture, ie. a json array of posts
pub fn parse_feed(json: &str) -> Result<Vec<Post>, Error> {
    let posts: Vec<Post> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(posts.len());
    for p in posts.iter() {
        if !seen.insert(p.id) {
            return Err(Error::DuplicatePostId(p.id));
        }
    }
    Ok(posts)
}
