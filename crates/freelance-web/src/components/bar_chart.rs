use freelance_core::earnings::EarningsBucket;
use freelance_core::format::format_currency;
use leptos::prelude::*;

/// Vertical bars for a bucket's chart points, scaled against the largest one
#[component]
pub fn BarChart(bucket: EarningsBucket, axis_label: &'static str) -> impl IntoView {
    let max = bucket.chart_max();

    view! {
        <div class="chart">
            <div class="chart-bars">
                {bucket.chart.into_iter().map(|p| {
                    let height = if max > 0.0 { p.earnings / max * 100.0 } else { 0.0 };
                    view! {
                        <div class="chart-column" title=format_currency(p.earnings)>
                            <div class="chart-value">{format_currency(p.earnings)}</div>
                            <div class="chart-bar" style=format!("height: {:.1}%", height)></div>
                            <div class="chart-label">{p.label}</div>
                        </div>
                    }
                }).collect_view()}
            </div>
            <div class="chart-axis muted">{axis_label}</div>
        </div>
    }
}
