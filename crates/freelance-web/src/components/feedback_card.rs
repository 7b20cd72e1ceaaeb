use freelance_core::sample::Feedback;
use leptos::prelude::*;

use crate::components::StarRating;

#[component]
pub fn FeedbackCard(feedback: Feedback) -> impl IntoView {
    view! {
        <div class="card feedback-card">
            <p class="italic">"\u{201C}" {feedback.message} "\u{201D}"</p>
            <div class="flex justify-between mt-2">
                <strong>{feedback.client_name}</strong>
                <StarRating rating=feedback.rating />
            </div>
        </div>
    }
}
