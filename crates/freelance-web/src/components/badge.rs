use leptos::prelude::*;

/// Coloured pill for statuses and priorities
#[component]
pub fn Badge(#[prop(into)] color: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <span class=format!("badge badge-{}", color)>{label}</span>
    }
}
