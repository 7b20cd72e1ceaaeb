use freelance_core::filter::ALL_FACET;
use freelance_core::project::{Project, ProjectStatus};
use freelance_core::{Notice, StatusFacet, filter, sample};
use leptos::prelude::*;

use crate::components::{ProjectCard, SelectField};
use crate::state::use_app;

fn status_options() -> Vec<(&'static str, &'static str)> {
    std::iter::once((ALL_FACET, "All Statuses"))
        .chain(ProjectStatus::ALL.into_iter().map(|s| (s.slug(), s.label())))
        .collect()
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let app = use_app();
    let projects = StoredValue::new(sample::projects());

    let query = RwSignal::new(String::new());
    let status = RwSignal::new(ALL_FACET.to_string());

    let on_status = Callback::new(move |value: String| match value.parse::<StatusFacet<ProjectStatus>>() {
        Ok(_) => status.set(value),
        Err(e) => app.notify(Notice::from(e)),
    });

    let visible = Memo::new(move |_| {
        let facet: StatusFacet<ProjectStatus> = status.with(|s| s.parse().unwrap_or(StatusFacet::All));
        projects.with_value(|all| query.with(|q| filter(all, q, facet).into_iter().cloned().collect::<Vec<Project>>()))
    });

    view! {
        <main class="page">
            <div class="flex justify-between items-center mb-6">
                <h1 class="page-title">"Projects"</h1>
                <button
                    class="btn btn-primary"
                    on:click=move |_| app.notify(Notice::info("New Project").with_description("Project creation is coming soon"))
                >
                    "+ New Project"
                </button>
            </div>

            <div class="toolbar mb-6">
                <input
                    class="input flex-1"
                    type="search"
                    placeholder="Search projects or clients..."
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

            <div class="muted mb-4">
                {move || format!("Showing {} of {} projects", visible.with(Vec::len), projects.with_value(Vec::len))}
            </div>

            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! { <p class="empty">"No projects match your filters."</p> }
            >
                <div class="grid grid-2 gap-6">
                    <For
                        each=move || visible.get()
                        key=|project| project.id
                        children=|project| view! { <ProjectCard project=project /> }
                    />
                </div>
            </Show>
        </main>
    }
}
