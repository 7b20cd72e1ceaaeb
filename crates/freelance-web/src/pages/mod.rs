mod clients;
mod dashboard;
mod earnings;
mod projects;
mod settings;

pub use clients::ClientsPage;
pub use dashboard::DashboardPage;
pub use earnings::EarningsPage;
pub use projects::ProjectsPage;
pub use settings::SettingsPage;
