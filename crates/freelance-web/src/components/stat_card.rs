use freelance_core::format::format_growth;
use leptos::prelude::*;

/// Headline number with an optional period-over-period change
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: String,
    #[prop(into)] color: String,
    #[prop(optional)] change: Option<f64>,
    #[prop(optional, into)] caption: Option<String>,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card border-{}", color)>
            <div class="stat-title">{title}</div>
            <div class="stat-value">{value}</div>
            {change.map(|c| {
                let trend = if c < 0.0 { "stat-change down" } else { "stat-change up" };
                view! { <div class=trend>{format_growth(c)}</div> }
            })}
            {caption.map(|c| view! { <div class="stat-caption">{c}</div> })}
        </div>
    }
}
