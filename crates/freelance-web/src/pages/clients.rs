use freelance_core::client::{Client, ClientStatus};
use freelance_core::filter::ALL_FACET;
use freelance_core::{Notice, StatusFacet, filter, sample};
use leptos::prelude::*;

use crate::components::{ClientCard, SelectField};
use crate::state::use_app;

fn status_options() -> Vec<(&'static str, &'static str)> {
    std::iter::once((ALL_FACET, "All Clients"))
        .chain(ClientStatus::ALL.into_iter().map(|s| (s.slug(), s.label())))
        .collect()
}

#[component]
pub fn ClientsPage() -> impl IntoView {
    let app = use_app();
    let clients = StoredValue::new(sample::clients());

    let query = RwSignal::new(String::new());
    let status = RwSignal::new(ALL_FACET.to_string());

    let on_status = Callback::new(move |value: String| match value.parse::<StatusFacet<ClientStatus>>() {
        Ok(_) => status.set(value),
        Err(e) => app.notify(Notice::from(e)),
    });

    let visible = Memo::new(move |_| {
        let facet: StatusFacet<ClientStatus> = status.with(|s| s.parse().unwrap_or(StatusFacet::All));
        clients.with_value(|all| query.with(|q| filter(all, q, facet).into_iter().cloned().collect::<Vec<Client>>()))
    });

    view! {
        <main class="page">
            <div class="flex justify-between items-center mb-6">
                <h1 class="page-title">"Clients"</h1>
                <button
                    class="btn btn-primary"
                    on:click=move |_| app.notify(Notice::info("Add Client").with_description("Client management is coming soon"))
                >
                    "+ Add Client"
                </button>
            </div>

            <div class="toolbar mb-6">
                <input
                    class="input flex-1"
                    type="search"
                    placeholder="Search by name or email..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <SelectField
                    label="Status"
                    options=status_options()
                    value=Signal::derive(move || status.get())
                    on_change=on_status
                />
            </div>

            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! { <p class="empty">"No clients found."</p> }
            >
                <div class="grid grid-3 gap-6">
                    <For
                        each=move || visible.get()
                        key=|client| client.id
                        children=|client| view! { <ClientCard client=client /> }
                    />
                </div>
            </Show>
        </main>
    }
}
