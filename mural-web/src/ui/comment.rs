use mural_client::CommentId;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentProps {
    pub comment: mural_client::Comment,
    pub on_delete: Callback<CommentId>,
}

#[function_component(Comment)]
pub fn comment(p: &CommentProps) -> Html {
    let on_delete = delete_request(&p.on_delete, p.comment.id);
    html! {
        <div class="comment">
            <div class="commentBox">
                <div class="commentContent">
                    <p>{ &p.comment.text }</p>
                    <button
                        type="button"
                        class="deleteComment"
                        title="Deletar comentário"
                        aria-label="Deletar comentário"
                        onclick={ on_delete }
                    >
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Whatever the triggering event, report which comment is to be deleted
fn delete_request<E: 'static>(on_delete: &Callback<CommentId>, id: CommentId) -> Callback<E> {
    on_delete.reform(move |_| id)
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use mural_client::{PostEvent, PostState};

    use super::*;

    #[test]
    fn delete_reports_own_id() {
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let on_delete = {
            let emitted = emitted.clone();
            Callback::from(move |id| emitted.borrow_mut().push(id))
        };
        delete_request::<()>(&on_delete, CommentId(3)).emit(());
        delete_request::<()>(&on_delete, CommentId(7)).emit(());
        assert_eq!(*emitted.borrow(), vec![CommentId(3), CommentId(7)]);
    }

    #[test]
    fn delete_reaches_post_state() {
        let state = Rc::new(RefCell::new(PostState::with_comments(["Daora", "x", "Daora"])));
        let on_delete = {
            let state = state.clone();
            Callback::from(move |id| {
                let s = state.take();
                *state.borrow_mut() = s.apply(PostEvent::Delete(id));
            })
        };
        let last = state.borrow().comments()[2].clone();
        delete_request::<()>(&on_delete, last.id).emit(());

        let state = state.borrow();
        let texts = state.comments().iter().map(|c| &c.text as &str).collect::<Vec<_>>();
        assert_eq!(texts, vec!["Daora", "x"]);
    }
}
