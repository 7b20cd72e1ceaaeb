use freelance_core::client::Client;
use freelance_core::format::{format_currency, format_date};
use leptos::prelude::*;

use crate::components::{Avatar, Badge};

#[component]
pub fn ClientCard(client: Client) -> impl IntoView {
    let status = client.status;
    let priority = client.priority;
    let mailto = format!("mailto:{}", client.email);
    let tel = format!("tel:{}", client.phone);

    view! {
        <div class="card client-card">
            <div class="flex items-center gap-3">
                <Avatar name=client.name.clone() src=client.avatar.clone() />
                <div class="flex-1">
                    <h3 class="card-title">{client.name}</h3>
                    <Badge color=status.color_scheme() label=status.label() />
                </div>
                <Badge color=priority.color_scheme() label=format!("{} priority", priority) />
            </div>

            <div class="mt-2 space-y-1 text-sm">
                <div><a href=mailto>{client.email}</a></div>
                <div><a href=tel>{client.phone}</a></div>
            </div>

            <div class="client-stats mt-2">
                <div>
                    <div class="muted">"Projects"</div>
                    <strong>{client.projects}</strong>
                </div>
                <div>
                    <div class="muted">"Active"</div>
                    <strong>{client.active_projects}</strong>
                </div>
                <div>
                    <div class="muted">"Total Spent"</div>
                    <strong>{format_currency(client.total_spent)}</strong>
                </div>
            </div>

            <div class="mt-2 text-sm muted">
                "Last contact: " {format_date(client.last_contact)}
            </div>
            <div class="mt-1 text-sm italic">{client.notes}</div>
        </div>
    }
}
