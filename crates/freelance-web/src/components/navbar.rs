use freelance_core::CONFIG;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::Avatar;
use crate::state::use_app;

#[component]
pub fn Navbar() -> impl IntoView {
    let app = use_app();

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <A href="/">
                    <span class="brand">{CONFIG.name}</span>
                </A>
                <div class="nav-links">
                    {CONFIG.nav.iter().map(|entry| view! {
                        <A href=entry.path>{entry.label}</A>
                    }).collect_view()}
                </div>
                {move || app.state.with(|s| {
                    let profile = s.profile();
                    view! { <Avatar name=profile.name.clone() src=profile.avatar_src.clone() /> }
                })}
            </div>
        </nav>
    }
}
