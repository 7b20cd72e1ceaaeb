use leptos::prelude::*;

#[component]
pub fn ProgressBar(value: f64, #[prop(into)] color: String) -> impl IntoView {
    let width = value.clamp(0.0, 100.0);

    view! {
        <div class="progress">
            <div class=format!("progress-fill bg-{}", color) style=format!("width: {}%", width)></div>
        </div>
    }
}
