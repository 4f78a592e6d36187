mod comment;
pub use comment::{Comment, CommentId};

pub mod date;

mod state;
pub use state::{PostEvent, PostState, Validity, REQUIRED_FIELD_MESSAGE, SEED_COMMENT};

pub mod api {
    pub use mural_api::*;
}
