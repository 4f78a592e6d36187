use chrono::Utc;

mod author;
pub use author::Author;

mod content;
pub use content::{ContentBlock, ContentKind, PLACEHOLDER_HREF};

mod error;
pub use error::Error;

mod post;
pub use post::{parse_feed, Post, PostId};

pub type Time = chrono::DateTime<Utc>;
