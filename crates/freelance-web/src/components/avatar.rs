use freelance_core::format::initials;
use leptos::prelude::*;

/// Round avatar; falls back to initials when there is no image
#[component]
pub fn Avatar(#[prop(into)] name: String, #[prop(into)] src: String, #[prop(optional)] large: bool) -> impl IntoView {
    let size = if large { "avatar avatar-lg" } else { "avatar" };

    if src.is_empty() {
        view! { <div class=size>{initials(&name)}</div> }.into_any()
    } else {
        view! { <img class=size src=src alt=name /> }.into_any()
    }
}
