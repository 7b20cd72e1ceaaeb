use freelance_core::settings::{Currency, PasswordChange, SettingsDraft, Timezone};
use freelance_core::Notice;
use leptos::prelude::*;

use crate::components::{SelectField, TextField, Toggle};
use crate::state::use_app;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Profile,
    Security,
    Notifications,
    Preferences,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Profile, Tab::Security, Tab::Notifications, Tab::Preferences];

    fn label(&self) -> &'static str {
        match self {
            Tab::Profile => "Profile",
            Tab::Security => "Security",
            Tab::Notifications => "Notifications",
            Tab::Preferences => "Preferences",
        }
    }
}

/// Account settings; nothing is written until "Save Changes"
#[component]
pub fn SettingsPage() -> impl IntoView {
    let app = use_app();
    let saved = app.state.with_untracked(|s| s.settings().clone());

    let tab = RwSignal::new(Tab::Profile);
    let draft = RwSignal::new(SettingsDraft::from(&saved));
    // Toggles and selects edit this copy; text fields go through `draft`
    let pending = RwSignal::new(saved);
    let password = RwSignal::new(PasswordChange::default());
    let show_password = RwSignal::new(false);

    let save = move |_| {
        let result = password
            .with_untracked(|p| if p.is_blank() { Ok(()) } else { p.validate() })
            .and_then(|()| pending.with_untracked(|current| draft.with_untracked(|d| d.apply(current))));

        match result {
            Ok(settings) => {
                pending.set(settings.clone());
                if app.mutate(|s| s.set_settings(settings)) {
                    password.set(PasswordChange::default());
                    app.notify(Notice::success("Settings saved").with_description("Your changes have been saved successfully"));
                }
            }
            Err(e) => app.notify(Notice::from(e)),
        }
    };

    let profile_tab = move || {
        view! {
            <div class="space-y-4">
                <TextField label="Full Name" draft=draft
                    get=|d: &SettingsDraft| d.name.clone()
                    set=|d: &mut SettingsDraft, v| d.name = v />
                <TextField label="Email" draft=draft input_type="email"
                    get=|d: &SettingsDraft| d.email.clone()
                    set=|d: &mut SettingsDraft, v| d.email = v />
                <TextField label="Profession" draft=draft
                    get=|d: &SettingsDraft| d.profession.clone()
                    set=|d: &mut SettingsDraft, v| d.profession = v />
                <TextField label="Hourly Rate ($)" draft=draft input_type="number"
                    get=|d: &SettingsDraft| d.hourly_rate.clone()
                    set=|d: &mut SettingsDraft, v| d.hourly_rate = v />
                <TextField label="Skills (comma separated)" draft=draft
                    get=|d: &SettingsDraft| d.skills.clone()
                    set=|d: &mut SettingsDraft, v| d.skills = v />
                <TextField label="Bio" draft=draft multiline=true
                    get=|d: &SettingsDraft| d.bio.clone()
                    set=|d: &mut SettingsDraft, v| d.bio = v />
            </div>
        }
        .into_any()
    };

    let security_tab = move || {
        let input_type = if show_password.get() { "text" } else { "password" };
        view! {
            <div class="space-y-4">
                <TextField label="Current Password" draft=password input_type=input_type
                    get=|p: &PasswordChange| p.current.clone()
                    set=|p: &mut PasswordChange, v| p.current = v />
                <TextField label="New Password" draft=password input_type=input_type
                    get=|p: &PasswordChange| p.new.clone()
                    set=|p: &mut PasswordChange, v| p.new = v />
                <TextField label="Confirm New Password" draft=password input_type=input_type
                    get=|p: &PasswordChange| p.confirm.clone()
                    set=|p: &mut PasswordChange, v| p.confirm = v />
                <button class="btn btn-ghost btn-sm" on:click=move |_| show_password.update(|s| *s = !*s)>
                    {if show_password.get() { "Hide passwords" } else { "Show passwords" }}
                </button>
            </div>
        }
        .into_any()
    };

    let notifications_tab = move || {
        view! {
            <div class="space-y-4">
                <Toggle
                    label="Project Updates"
                    description="Get notified when a project changes status"
                    checked=Signal::derive(move || pending.with(|s| s.notifications.project_updates))
                    on_toggle=Callback::new(move |on| pending.update(|s| s.notifications.project_updates = on))
                />
                <Toggle
                    label="Payment Alerts"
                    description="Get notified when a payment arrives"
                    checked=Signal::derive(move || pending.with(|s| s.notifications.payment_alerts))
                    on_toggle=Callback::new(move |on| pending.update(|s| s.notifications.payment_alerts = on))
                />
                <Toggle
                    label="Promotional Offers"
                    description="News and offers from FreelanceHub"
                    checked=Signal::derive(move || pending.with(|s| s.notifications.promotional_offers))
                    on_toggle=Callback::new(move |on| pending.update(|s| s.notifications.promotional_offers = on))
                />
            </div>
        }
        .into_any()
    };

    let preferences_tab = move || {
        let on_timezone = Callback::new(move |offset: String| match Timezone::from_offset(&offset) {
            Ok(tz) => pending.update(|s| s.timezone = tz),
            Err(e) => app.notify(Notice::from(e)),
        });
        let on_currency = Callback::new(move |code: String| match Currency::from_code(&code) {
            Ok(currency) => pending.update(|s| s.currency = currency),
            Err(e) => app.notify(Notice::from(e)),
        });

        view! {
            <div class="space-y-4">
                <Toggle
                    label="Dark Mode"
                    description="Use a dark colour scheme"
                    checked=Signal::derive(move || pending.with(|s| s.dark_mode))
                    on_toggle=Callback::new(move |on| pending.update(|s| s.dark_mode = on))
                />
                <SelectField
                    label="Timezone"
                    options=Timezone::ALL.into_iter().map(|tz| (tz.offset(), tz.label())).collect()
                    value=Signal::derive(move || pending.with(|s| s.timezone.offset().to_string()))
                    on_change=on_timezone
                />
                <SelectField
                    label="Default Currency"
                    options=Currency::ALL.into_iter().map(|c| (c.code(), c.label())).collect()
                    value=Signal::derive(move || pending.with(|s| s.currency.code().to_string()))
                    on_change=on_currency
                />
            </div>
        }
        .into_any()
    };

    view! {
        <main class="page">
            <h1 class="page-title mb-6">"Settings"</h1>

            <div class="tabs">
                {Tab::ALL
                    .into_iter()
                    .map(|t| view! {
                        <button
                            class=move || if tab.get() == t { "tab tab-active" } else { "tab" }
                            on:click=move |_| tab.set(t)
                        >
                            {t.label()}
                        </button>
                    })
                    .collect_view()}
            </div>

            <div class="card mb-6">
                {move || match tab.get() {
                    Tab::Profile => profile_tab(),
                    Tab::Security => security_tab(),
                    Tab::Notifications => notifications_tab(),
                    Tab::Preferences => preferences_tab(),
                }}
            </div>

            <button class="btn btn-primary" on:click=save>"Save Changes"</button>
        </main>
    }
}
