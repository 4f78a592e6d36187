use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct AvatarProps {
    pub src: AttrValue,

    #[prop_or(true)]
    pub has_border: bool,
}

#[function_component(Avatar)]
pub fn avatar(p: &AvatarProps) -> Html {
    let class = match p.has_border {
        true => "avatarWithBorder",
        false => "avatar",
    };
    html! {
        <img class={ class } src={ p.src.clone() } alt="" />
    }
}
