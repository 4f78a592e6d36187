#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CommentId(pub u64);

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Comment {
    /// Assigned at creation, never reused within one post
    pub id: CommentId,
    pub text: String,
}
