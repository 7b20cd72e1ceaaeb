use freelance_core::Notice;
use freelance_core::format::format_percent;
use freelance_core::profile::ProfileOverviewDraft;
use leptos::prelude::*;

use crate::components::{Avatar, AvatarUpload, ProgressBar, StarRating, TextField};
use crate::state::use_app;

/// Public-facing summary: rating, completion rate and join date
#[component]
pub fn ProfileOverviewCard() -> impl IntoView {
    let app = use_app();
    let overview = Memo::new(move |_| app.state.with(|s| s.overview().clone()));

    let editing = RwSignal::new(false);
    let draft = RwSignal::new(ProfileOverviewDraft::default());

    let start_edit = move |_| {
        draft.set(ProfileOverviewDraft::from(&overview.get_untracked()));
        editing.set(true);
    };

    let save = move |_| {
        let result = draft.with_untracked(|d| d.apply(&overview.get_untracked()));
        match result {
            Ok(updated) => {
                if app.mutate(|s| s.set_overview(updated)) {
                    app.notify(Notice::success("Profile updated"));
                }
                editing.set(false);
            }
            Err(e) => app.notify(Notice::from(e)),
        }
    };

    // Photo changes save immediately, independent of the form
    let on_avatar = Callback::new(move |src: String| {
        if app.mutate(|s| s.set_overview_avatar(src)) {
            app.notify(Notice::success("Photo updated"));
        }
    });

    let read_only = move || {
        let o = overview.get();
        view! {
            <div class="flex items-center gap-3">
                <Avatar name=o.name.clone() src=o.avatar_src.clone() large=true />
                <div class="flex-1">
                    <h2 class="card-title">{o.name.clone()}</h2>
                    <div class="muted">{o.title.clone()}</div>
                    <div class="muted">{o.location.clone()}</div>
                </div>
                <button class="btn btn-outline btn-sm" on:click=start_edit>"Edit"</button>
            </div>
            <div class="mt-2 flex items-center gap-2">
                <StarRating rating=o.rating />
                <span class="font-bold">{format!("{:.1}", o.rating)}</span>
            </div>
            <div class="mt-2">
                <div class="flex justify-between text-sm">
                    <span>"Completion rate"</span>
                    <span>{format_percent(o.completion_rate, 0)}</span>
                </div>
                <ProgressBar value=o.completion_rate color="green" />
            </div>
            <div class="flex justify-between mt-2 text-sm muted">
                <span>"Member since " {o.join_date.clone()}</span>
                <span>{o.total_projects} " projects"</span>
            </div>
        }
    };

    view! {
        <div class="card profile-overview">
            <Show when=move || editing.get() fallback=read_only>
                <div class="space-y-2">
                    <AvatarUpload on_loaded=on_avatar />
                    <TextField label="Name" draft=draft
                        get=|d: &ProfileOverviewDraft| d.name.clone()
                        set=|d: &mut ProfileOverviewDraft, v| d.name = v />
                    <TextField label="Title" draft=draft
                        get=|d: &ProfileOverviewDraft| d.title.clone()
                        set=|d: &mut ProfileOverviewDraft, v| d.title = v />
                    <TextField label="Location" draft=draft
                        get=|d: &ProfileOverviewDraft| d.location.clone()
                        set=|d: &mut ProfileOverviewDraft, v| d.location = v />
                    <TextField label="Member Since" draft=draft
                        get=|d: &ProfileOverviewDraft| d.join_date.clone()
                        set=|d: &mut ProfileOverviewDraft, v| d.join_date = v />
                    <TextField label="Total Projects" draft=draft input_type="number"
                        get=|d: &ProfileOverviewDraft| d.total_projects.clone()
                        set=|d: &mut ProfileOverviewDraft, v| d.total_projects = v />
                    <TextField label="Completion Rate (%)" draft=draft input_type="number"
                        get=|d: &ProfileOverviewDraft| d.completion_rate.clone()
                        set=|d: &mut ProfileOverviewDraft, v| d.completion_rate = v />
                    <TextField label="Rating" draft=draft input_type="number"
                        get=|d: &ProfileOverviewDraft| d.rating.clone()
                        set=|d: &mut ProfileOverviewDraft, v| d.rating = v />
                    <div class="flex gap-2">
                        <button class="btn btn-primary btn-sm" on:click=save>"Save"</button>
                        <button class="btn btn-ghost btn-sm" on:click=move |_| editing.set(false)>"Cancel"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
