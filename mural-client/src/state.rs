use crate::{Comment, CommentId};

/// Comment every post starts with
pub const SEED_COMMENT: &str = "Daora";

pub const REQUIRED_FIELD_MESSAGE: &str = "Esse campo é obrigatório!";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Validity {
    Valid,
    ValueMissing,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PostEvent {
    /// The comment form was submitted
    Submit,

    /// The comment field now holds this text
    Change(String),

    /// The host rejected the comment field
    Invalid,

    Delete(CommentId),

    /// Remove every comment whose text is exactly this one
    DeleteMatching(String),
}

/// Local state of one post: its comments and the comment being typed
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PostState {
    comments: Vec<Comment>,
    next_comment_id: u64,
    pending: String,
    validity: Validity,
}

impl Default for PostState {
    fn default() -> PostState {
        PostState::new()
    }
}

impl PostState {
    pub fn new() -> PostState {
        PostState::with_comments([SEED_COMMENT])
    }

    pub fn with_comments<I, S>(comments: I) -> PostState
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut this = PostState {
            comments: Vec::new(),
            next_comment_id: 0,
            pending: String::new(),
            validity: Validity::Valid,
        };
        for c in comments {
            this.push_comment(c.into());
        }
        this
    }

    /// Comments in insertion order
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn pending_text(&self) -> &str {
        &self.pending
    }

    pub fn validity(&self) -> Validity {
        self.validity
    }

    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }

    pub fn validation_message(&self) -> Option<&'static str> {
        match self.validity {
            Validity::Valid => None,
            Validity::ValueMissing => Some(REQUIRED_FIELD_MESSAGE),
        }
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn apply(mut self, event: PostEvent) -> PostState {
        tracing::debug!(?event, "applying post event");
        match event {
            PostEvent::Submit if !self.can_submit() => {
                tracing::warn!("rejected submission of empty comment");
                self.validity = Validity::ValueMissing;
            }
            PostEvent::Submit => {
                let text = std::mem::take(&mut self.pending);
                self.push_comment(text);
            }
            PostEvent::Change(text) => {
                self.validity = Validity::Valid;
                self.pending = text;
            }
            PostEvent::Invalid => {
                self.validity = Validity::ValueMissing;
            }
            PostEvent::Delete(id) => {
                let len_before = self.comments.len();
                self.comments.retain(|c| c.id != id);
                if self.comments.len() == len_before {
                    tracing::warn!(?id, "asked to delete a comment that does not exist");
                }
            }
            PostEvent::DeleteMatching(text) => {
                let len_before = self.comments.len();
                self.comments.retain(|c| c.text != text);
                if self.comments.len() == len_before {
                    tracing::warn!(?text, "asked to delete comments matching no existing one");
                }
            }
        }
        self
    }

    fn push_comment(&mut self, text: String) {
        let id = CommentId(self.next_comment_id);
        self.next_comment_id += 1;
        self.comments.push(Comment { id, text });
    }
}
