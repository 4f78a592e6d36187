mod app;
pub use app::{App, AppProps};

mod avatar;
pub use avatar::Avatar;

mod comment;
pub use comment::Comment;

mod post;
pub use post::Post;
