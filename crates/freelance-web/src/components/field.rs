//! Form controls bound to draft signals

use leptos::prelude::*;

/// Text input bound to one string field of a form draft
#[component]
pub fn TextField<D>(
    #[prop(into)] label: String,
    draft: RwSignal<D>,
    get: fn(&D) -> String,
    set: fn(&mut D, String),
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView
where
    D: Send + Sync + 'static,
{
    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        draft.update(|d| set(d, value));
    };

    let control = if multiline {
        view! { <textarea class="input" rows="3" prop:value=move || draft.with(get) on:input=on_input></textarea> }
            .into_any()
    } else {
        view! { <input type=input_type class="input" prop:value=move || draft.with(get) on:input=on_input /> }
            .into_any()
    };

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            {control}
        </label>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    options: Vec<(&'static str, &'static str)>,
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select
                class="input"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(key, text)| view! {
                        <option value=key selected=move || value.get() == key>{text}</option>
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Switch with a bold label and a muted description
#[component]
pub fn Toggle(
    #[prop(into)] label: String,
    #[prop(into)] description: String,
    checked: Signal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="toggle">
            <div>
                <div class="font-bold">{label}</div>
                <div class="muted">{description}</div>
            </div>
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
        </label>
    }
}
