use leptos::prelude::*;

use crate::state::use_app;

/// Stack of dismissible notifications, bottom right
#[component]
pub fn ToastHost() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="toast-stack" role="status">
            <For
                each=move || app.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let notice = toast.notice;
                    view! {
                        <div class=format!("toast toast-{}", notice.level.color_scheme())>
                            <div class="toast-text">
                                <strong>{notice.title}</strong>
                                {notice.description.map(|d| view! { <div>{d}</div> })}
                            </div>
                            <button class="toast-close" aria-label="Dismiss" on:click=move |_| app.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
