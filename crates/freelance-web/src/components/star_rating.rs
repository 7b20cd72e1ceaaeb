use freelance_core::format::{Star, star_rating};
use leptos::prelude::*;

/// Five stars, half star for a fraction of .5 or more
#[component]
pub fn StarRating(rating: f64) -> impl IntoView {
    view! {
        <span class="stars" title=format!("{:.1} / 5", rating)>
            {star_rating(rating)
                .into_iter()
                .map(|star| {
                    let class = match star {
                        Star::Full => "star star-full",
                        Star::Half => "star star-half",
                        Star::Empty => "star star-empty",
                    };
                    view! { <span class=class>"★"</span> }
                })
                .collect_view()}
        </span>
    }
}
