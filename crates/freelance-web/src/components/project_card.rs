use freelance_core::format::{format_currency, format_date};
use freelance_core::project::{Project, ProjectStatus};
use leptos::prelude::*;

use crate::components::{Badge, ProgressBar};

/// Project summary with progress, budget and team
#[component]
pub fn ProjectCard(project: Project, #[prop(optional)] compact: bool) -> impl IntoView {
    let status = project.status;
    let progress_color = if status == ProjectStatus::Completed { "green" } else { status.color_scheme() };

    view! {
        <div class="card project-card">
            <div class="flex justify-between items-center">
                <h3 class="card-title">{project.title}</h3>
                <Badge color=status.color_scheme() label=status.label() />
            </div>
            <div class="muted">{project.client}</div>

            {(!compact).then(|| view! { <p class="mt-2">{project.description.clone()}</p> })}

            <div class="mt-2">
                <div class="flex justify-between text-sm">
                    <span>"Progress"</span>
                    <span>{project.progress} "%"</span>
                </div>
                <ProgressBar value=f64::from(project.progress) color=progress_color />
            </div>

            <div class="flex justify-between mt-2 text-sm">
                <span>"Deadline: " {format_date(project.deadline)}</span>
                <span>"Budget: " {format_currency(project.budget)}</span>
            </div>

            {(!compact).then(|| view! {
                <div class="flex justify-between items-center mt-2">
                    <div class="team">
                        {project.team.iter().map(|member| view! {
                            <span class="team-member" title=member.role.clone()>{member.name.clone()}</span>
                        }).collect_view()}
                    </div>
                    <Badge color=project.priority.color_scheme() label=format!("{} Priority", project.priority) />
                </div>
            })}
        </div>
    }
}
