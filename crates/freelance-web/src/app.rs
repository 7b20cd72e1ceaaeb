use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::browser::apply_dark_mode;
use crate::components::{Navbar, ToastHost};
use crate::pages::{ClientsPage, DashboardPage, EarningsPage, ProjectsPage, SettingsPage};
use crate::state::{provide_app_context, use_app};
use freelance_core::CONFIG;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_app_context();

    let app = use_app();
    Effect::new(move |_| {
        let dark = app.state.with(|s| s.settings().dark_mode);
        apply_dark_mode(dark);
    });

    view! {
        <Title text=CONFIG.tagline />
        <Router>
            <div class="min-h-screen">
                <Navbar />
                <Routes fallback=|| view! { <p class="page">"404 - Page not found"</p> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/clients") view=ClientsPage />
                    <Route path=path!("/earnings") view=EarningsPage />
                    <Route path=path!("/settings") view=SettingsPage />
                </Routes>
            </div>
            <ToastHost />
        </Router>
    }
}
