use crate::PostId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid feed json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Post id {0:?} used more than once in feed")]
    DuplicatePostId(PostId),
}
