use chrono::{SecondsFormat, Utc};
use mural_client::{api, date, PostEvent, PostState};
use yew::prelude::*;

use crate::{ui, util};

#[derive(Clone, PartialEq, Properties)]
pub struct PostProps {
    pub post: api::Post,
}

pub struct Post {
    state: PostState,
    comment_ref: NodeRef,
}

impl Component for Post {
    type Message = PostEvent;
    type Properties = PostProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: PostState::new(),
            comment_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.state = std::mem::take(&mut self.state).apply(msg);
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // The browser only knows about validity through setCustomValidity
        if let Some(field) = self.comment_ref.cast::<web_sys::HtmlTextAreaElement>() {
            field.set_custom_validity(self.state.validation_message().unwrap_or(""));
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let post = &ctx.props().post;

        // Recomputed on each render only, there is no timer
        let published_date_formatted =
            date::format_published(&post.published_at, &util::local_tz());
        let published_date_relative_to_now =
            date::relative_to_now(&post.published_at, &Utc::now());

        let on_submit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            PostEvent::Submit
        });
        let on_input = ctx.link().callback(|e: InputEvent| {
            let field: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            PostEvent::Change(field.value())
        });
        let on_delete = ctx.link().callback(PostEvent::Delete);

        html! {
            <article class="post">
                <header>
                    <div class="author">
                        <ui::Avatar src={ post.author.avatar_url.clone() } />
                        <div class="authorInfo">
                            <strong>{ &post.author.name }</strong>
                            <span>{ &post.author.role }</span>
                        </div>
                    </div>
                    <time
                        title={ published_date_formatted }
                        datetime={ post.published_at.to_rfc3339_opts(SecondsFormat::Millis, true) }
                    >
                        { published_date_relative_to_now }
                    </time>
                </header>

                <div class="content">
                    { for post.content.iter().enumerate().map(|(i, b)| content_block(i, b)) }
                </div>

                <form class="commentForm" onsubmit={ on_submit }>
                    <strong>{ "Deixe seu feedback" }</strong>
                    <textarea
                        ref={ self.comment_ref.clone() }
                        name="comment"
                        placeholder="Deixe um comentário..."
                        value={ self.state.pending_text().to_owned() }
                        oninput={ on_input }
                        oninvalid={ ctx.link().callback(|_| PostEvent::Invalid) }
                        required={ true }
                    />
                    <footer>
                        <button type="submit" disabled={ !self.state.can_submit() }>
                            { "Comentar" }
                        </button>
                    </footer>
                </form>

                <div class="commentList">
                    { for self.state.comments().iter().map(|c| html! {
                        <ui::Comment
                            key={ c.id.0 }
                            comment={ c.clone() }
                            on_delete={ on_delete.clone() }
                        />
                    }) }
                </div>
            </article>
        }
    }
}

// Blocks never move within a post, so their position is a stable key even
// when two of them hold the same text
fn content_block(index: usize, block: &api::ContentBlock) -> Html {
    match block.target() {
        None => html! {
            <p key={ index }>{ &block.text }</p>
        },
        Some(href) => html! {
            <p key={ index }><a href={ href.to_owned() }>{ &block.text }</a></p>
        },
    }
}
