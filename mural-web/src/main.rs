use std::rc::Rc;

use anyhow::Context;
use mural_client::api;

mod ui;
mod util;

const FEED_FIXTURE: &str = include_str!("../fixtures/posts.json");

fn load_feed() -> anyhow::Result<Vec<api::Post>> {
    let mut posts = api::parse_feed(FEED_FIXTURE).context("parsing embedded feed fixture")?;
    api::Post::sort_newest_first(&mut posts);
    Ok(posts)
}

fn main() {
    tracing_wasm::set_as_global_default();
    let posts = match load_feed() {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!("failed loading feed: {e:?}");
            Vec::new()
        }
    };
    tracing::debug!(num_posts = posts.len(), "loaded feed");
    yew::Renderer::<ui::App>::with_props(ui::AppProps {
        posts: Rc::new(posts),
    })
    .render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_feed_loads() {
        let posts = load_feed().unwrap();
        assert!(!posts.is_empty());
        assert!(posts
            .windows(2)
            .all(|w| w[0].published_at >= w[1].published_at));
    }
}
