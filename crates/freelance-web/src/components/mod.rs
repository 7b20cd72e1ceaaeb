mod avatar;
mod badge;
mod bar_chart;
mod client_card;
mod feedback_card;
mod field;
mod navbar;
mod profile_card;
mod profile_overview;
mod progress;
mod project_card;
mod section;
mod star_rating;
mod stat_card;
mod toast;

pub use avatar::Avatar;
pub use badge::Badge;
pub use bar_chart::BarChart;
pub use client_card::ClientCard;
pub use feedback_card::FeedbackCard;
pub use field::{SelectField, TextField, Toggle};
pub use navbar::Navbar;
pub use profile_card::{AvatarUpload, ProfileCard};
pub use profile_overview::ProfileOverviewCard;
pub use progress::ProgressBar;
pub use project_card::ProjectCard;
pub use section::Section;
pub use star_rating::StarRating;
pub use stat_card::StatCard;
pub use toast::ToastHost;
