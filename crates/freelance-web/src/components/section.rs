use leptos::prelude::*;

/// Section component - titled panel used by every page
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <section id=id class="panel mb-8">
            <h2 class="panel-title">{title}</h2>
            <div class="panel-body">
                {children()}
            </div>
        </section>
    }
}
