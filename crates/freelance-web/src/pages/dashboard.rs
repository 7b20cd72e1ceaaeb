use freelance_core::earnings::TimeRange;
use freelance_core::format::{format_currency, format_percent};
use freelance_core::metrics::{aggregate_range, client_stats, project_stats};
use freelance_core::project::ProjectStatus;
use freelance_core::{CONFIG, StatusFacet, filter, sample};
use leptos::prelude::*;

use crate::components::{FeedbackCard, ProfileCard, ProfileOverviewCard, ProjectCard, Section, StatCard};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let projects = sample::projects();
    let clients = sample::clients();
    let monthly = aggregate_range(&sample::earnings(), TimeRange::Monthly);

    let project_summary = project_stats(&projects);
    let client_summary = client_stats(&clients);
    let ongoing: Vec<_> = filter(&projects, "", StatusFacet::Only(ProjectStatus::Ongoing))
        .into_iter()
        .cloned()
        .collect();

    view! {
        <main class="page">
            <h1 class="page-title">{CONFIG.tagline}</h1>

            // Profile
            <div class="grid grid-profile gap-6">
                <ProfileCard />
                <ProfileOverviewCard />
            </div>

            // This month's earnings
            <div class="grid grid-3 gap-6 mt-8">
                <StatCard
                    title="Total Earnings"
                    value=format_currency(monthly.bucket.total)
                    color="teal"
                    change=monthly.bucket.growth
                    caption="This month"
                />
                <StatCard
                    title="Completed Projects"
                    value=monthly.bucket.completed_projects.to_string()
                    color="blue"
                />
                <StatCard title="Total Clients" value=monthly.bucket.total_clients.to_string() color="purple" />
            </div>

            <div class="grid grid-main gap-6 mt-8">
                <div>
                    <Section id="ongoing" title="Ongoing Projects">
                        <div class="space-y-4">
                            {ongoing
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project compact=true /> })
                                .collect_view()}
                        </div>
                    </Section>

                    <Section id="portfolio" title="Portfolio">
                        <div class="grid grid-2 gap-4">
                            <StatCard
                                title="Projects"
                                value=project_summary.total.to_string()
                                color="blue"
                                caption=format!(
                                    "{} ongoing, {} upcoming, {} completed",
                                    project_summary.ongoing,
                                    project_summary.upcoming,
                                    project_summary.completed,
                                )
                            />
                            <StatCard
                                title="Completion Rate"
                                value=format_percent(project_summary.completion_rate, 1)
                                color="green"
                                caption=project_summary
                                    .average_progress
                                    .map(|p| format!("Average progress {}", format_percent(p, 1)))
                                    .unwrap_or_else(|| "No projects yet".to_string())
                            />
                            <StatCard
                                title="Total Budget"
                                value=format_currency(project_summary.total_budget)
                                color="teal"
                            />
                            <StatCard
                                title="Client Revenue"
                                value=format_currency(client_summary.lifetime_revenue)
                                color="purple"
                                caption=format!(
                                    "{} of {} clients active, {} active projects",
                                    client_summary.active,
                                    client_summary.total,
                                    client_summary.active_projects,
                                )
                            />
                        </div>
                    </Section>
                </div>

                <Section id="feedback" title="Client Feedback">
                    <div class="space-y-4">
                        {sample::feedback()
                            .into_iter()
                            .map(|feedback| view! { <FeedbackCard feedback=feedback /> })
                            .collect_view()}
                    </div>
                </Section>
            </div>
        </main>
    }
}
