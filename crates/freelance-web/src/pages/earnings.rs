use freelance_core::earnings::TimeRange;
use freelance_core::format::{format_currency, format_date, format_percent};
use freelance_core::metrics::aggregate_range;
use freelance_core::report::{earnings_csv, report_filename};
use freelance_core::{Notice, NoticeLevel, aggregate, sample};
use leptos::prelude::*;

use crate::browser::download_csv;
use crate::components::{Badge, BarChart, SelectField, StatCard};
use crate::state::use_app;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Breakdown,
}

#[component]
pub fn EarningsPage() -> impl IntoView {
    let app = use_app();
    let table = StoredValue::new(sample::earnings());
    let transactions = StoredValue::new(sample::transactions());

    let metrics = RwSignal::new(table.with_value(|t| aggregate_range(t, TimeRange::Monthly)));
    let tab = RwSignal::new(Tab::Overview);

    let on_range = Callback::new(move |key: String| match table.with_value(|t| aggregate(t, &key)) {
        Ok(derived) => metrics.set(derived),
        Err(e) => {
            log::warn!("{}", e);
            app.notify(Notice::from(e));
        }
    });

    let export = move |_| {
        let m = metrics.get_untracked();
        let report = match transactions.with_value(|txs| earnings_csv(&m, txs)) {
            Ok(report) => report,
            Err(e) => {
                app.notify(Notice::from(e));
                return;
            }
        };
        match download_csv(&report_filename(&m), &report) {
            Ok(()) => app.notify(
                Notice::info("Download initiated").with_description("Your earnings report is being prepared"),
            ),
            Err(e) => {
                log::error!("{}", e);
                app.notify(Notice::new(NoticeLevel::Error, "Export failed").with_description(e));
            }
        }
    };

    let range_options = TimeRange::ALL.into_iter().map(|r| (r.key(), r.label())).collect::<Vec<_>>();
    let tab_class = move |t: Tab| if tab.get() == t { "tab tab-active" } else { "tab" };

    view! {
        <main class="page">
            // Header
            <div class="flex justify-between items-center mb-8">
                <h1 class="page-title">
                    "Earnings Dashboard "
                    {move || view! {
                        <Badge color="green" label=format!("{}% growth", metrics.with(|m| m.bucket.growth)) />
                    }}
                </h1>
                <div class="flex items-end gap-4">
                    <SelectField
                        label="Range"
                        options=range_options
                        value=Signal::derive(move || metrics.with(|m| m.range.key().to_string()))
                        on_change=on_range
                    />
                    <button class="btn btn-primary" on:click=export>"Export"</button>
                </div>
            </div>

            // Stats
            {move || {
                let bucket = metrics.with(|m| m.bucket.clone());
                view! {
                    <div class="grid grid-4 gap-6 mb-8">
                        <StatCard
                            title="Total Earnings"
                            value=format_currency(bucket.total)
                            color="green"
                            change=bucket.growth
                        />
                        <StatCard
                            title="Recurring Income"
                            value=format_currency(bucket.recurring)
                            color="blue"
                            change=8.2
                        />
                        <StatCard
                            title="One-Time Projects"
                            value=format_currency(bucket.one_time)
                            color="orange"
                            change={-3.5}
                        />
                        <StatCard
                            title="Active Clients"
                            value=bucket.total_clients.to_string()
                            color="purple"
                            change=5.7
                        />
                    </div>
                }
            }}

            // Tabs
            <div class="tabs">
                <button class=move || tab_class(Tab::Overview) on:click=move |_| tab.set(Tab::Overview)>
                    "Overview"
                </button>
                <button class=move || tab_class(Tab::Breakdown) on:click=move |_| tab.set(Tab::Breakdown)>
                    "Detailed Breakdown"
                </button>
            </div>

            <div class="card mb-8">
                {move || match tab.get() {
                    Tab::Overview => {
                        let m = metrics.get();
                        view! {
                            <h2 class="card-title mb-4">"Earnings Trend"</h2>
                            <BarChart bucket=m.bucket axis_label=m.range.axis_label() />
                        }
                            .into_any()
                    }
                    Tab::Breakdown => {
                        let m = metrics.get();
                        let average = m
                            .average_project_value
                            .map(format_currency)
                            .unwrap_or_else(|| "No data".to_string());
                        view! {
                            <h2 class="card-title mb-4">"Income Distribution"</h2>
                            <div class="split-bar">
                                <div class="split-recurring" style=format!("width: {}%", m.recurring_share)></div>
                                <div class="split-one-time" style=format!("width: {}%", m.one_time_share)></div>
                            </div>
                            <div class="grid grid-3 gap-6 mt-4">
                                <div>
                                    <div class="font-bold">"Recurring Income"</div>
                                    <div class="text-xl text-blue">{format_currency(m.bucket.recurring)}</div>
                                    <div class="muted">{format_percent(m.recurring_share, 1)} " of total"</div>
                                </div>
                                <div>
                                    <div class="font-bold">"One-Time Projects"</div>
                                    <div class="text-xl text-green">{format_currency(m.bucket.one_time)}</div>
                                    <div class="muted">{format_percent(m.one_time_share, 1)} " of total"</div>
                                </div>
                                <div>
                                    <div class="font-bold">"Average Project Value"</div>
                                    <div class="text-xl">{average}</div>
                                    <div class="muted">{m.bucket.completed_projects} " completed projects"</div>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>

            // Recent transactions
            <div class="card">
                <h2 class="card-title mb-4">"Recent Transactions"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Client"</th>
                            <th>"Amount"</th>
                            <th>"Date"</th>
                            <th>"Type"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {transactions.with_value(|txs| {
                            txs.iter()
                                .map(|tx| view! {
                                    <tr>
                                        <td>{tx.client.clone()}</td>
                                        <td>{format_currency(tx.amount)}</td>
                                        <td>{format_date(tx.date)}</td>
                                        <td>{tx.kind.to_string()}</td>
                                        <td>
                                            <Badge color=tx.status.color_scheme() label=tx.status.to_string() />
                                        </td>
                                    </tr>
                                })
                                .collect_view()
                        })}
                    </tbody>
                </table>
            </div>
        </main>
    }
}
