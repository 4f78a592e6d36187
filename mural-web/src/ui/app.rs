use std::rc::Rc;

use mural_client::api;
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct AppProps {
    /// Already in display order
    pub posts: Rc<Vec<api::Post>>,
}

#[function_component(App)]
pub fn app(p: &AppProps) -> Html {
    html! {
        <>
            <header class="header">
                <strong>{ "Mural" }</strong>
            </header>
            <div class="wrapper">
                <main>
                    { for p.posts.iter().map(|post| html! {
                        <ui::Post key={ post.id.0 } post={ post.clone() } />
                    }) }
                </main>
            </div>
        </>
    }
}
