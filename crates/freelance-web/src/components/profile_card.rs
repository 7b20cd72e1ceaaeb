use freelance_core::{Notice, NoticeLevel};
use freelance_core::profile::ProfileDraft;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

use crate::browser::read_as_data_url;
use crate::components::{Avatar, TextField};
use crate::state::use_app;

/// Hidden file input that reads the chosen image and hands back a data URL
#[component]
pub fn AvatarUpload(on_loaded: Callback<String>) -> impl IntoView {
    let app = use_app();

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        if let Err(e) = read_as_data_url(&file, move |data_url| on_loaded.run(data_url)) {
            log::error!("{}", e);
            app.notify(Notice::new(NoticeLevel::Error, "Upload failed").with_description(e));
        }
    };

    view! {
        <label class="btn btn-outline btn-sm">
            "Change photo"
            <input type="file" accept="image/*" class="hidden" on:change=on_change />
        </label>
    }
}

/// The freelancer's profile with inline editing
#[component]
pub fn ProfileCard() -> impl IntoView {
    let app = use_app();
    let profile = Memo::new(move |_| app.state.with(|s| s.profile().clone()));

    let editing = RwSignal::new(false);
    let draft = RwSignal::new(ProfileDraft::default());
    let pending_avatar = RwSignal::new(None::<String>);

    let start_edit = move |_| {
        draft.set(ProfileDraft::from(&profile.get_untracked()));
        pending_avatar.set(None);
        editing.set(true);
    };

    let cancel = move |_| {
        pending_avatar.set(None);
        editing.set(false);
    };

    let save = move |_| {
        let current = profile.get_untracked();
        let mut updated = match draft.with_untracked(|d| d.apply(&current)) {
            Ok(updated) => updated,
            Err(e) => {
                app.notify(Notice::from(e));
                return;
            }
        };
        if let Some(src) = pending_avatar.get_untracked() {
            updated.avatar_src = src;
        }
        if app.mutate(|s| s.set_profile(updated)) {
            app.notify(Notice::success("Profile updated"));
        }
        pending_avatar.set(None);
        editing.set(false);
    };

    let avatar_src = move || pending_avatar.get().unwrap_or_else(|| profile.with(|p| p.avatar_src.clone()));

    view! {
        <div class="card profile-card">
            <div class="flex items-center gap-3">
                {move || view! { <Avatar name=profile.with(|p| p.name.clone()) src=avatar_src() large=true /> }}
                <Show
                    when=move || editing.get()
                    fallback=move || view! {
                        <div class="flex-1">
                            <h2 class="card-title">{move || profile.with(|p| p.name.clone())}</h2>
                            <div class="muted">{move || profile.with(|p| p.profession.clone())}</div>
                            <div class="muted">{move || profile.with(|p| p.location.clone())}</div>
                            <div class="mt-1">
                                <strong>{move || profile.with(|p| p.total_projects)}</strong>
                                " projects completed"
                            </div>
                        </div>
                        <button class="btn btn-outline btn-sm" on:click=start_edit>"Edit"</button>
                    }
                >
                    <div class="flex-1 space-y-2">
                        <AvatarUpload on_loaded=Callback::new(move |src| pending_avatar.set(Some(src))) />
                        <TextField label="Name" draft=draft
                            get=|d: &ProfileDraft| d.name.clone()
                            set=|d: &mut ProfileDraft, v| d.name = v />
                        <TextField label="Profession" draft=draft
                            get=|d: &ProfileDraft| d.profession.clone()
                            set=|d: &mut ProfileDraft, v| d.profession = v />
                        <TextField label="Location" draft=draft
                            get=|d: &ProfileDraft| d.location.clone()
                            set=|d: &mut ProfileDraft, v| d.location = v />
                        <TextField label="Total Projects" draft=draft input_type="number"
                            get=|d: &ProfileDraft| d.total_projects.clone()
                            set=|d: &mut ProfileDraft, v| d.total_projects = v />
                        <div class="flex gap-2">
                            <button class="btn btn-primary btn-sm" on:click=save>"Save"</button>
                            <button class="btn btn-ghost btn-sm" on:click=cancel>"Cancel"</button>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
