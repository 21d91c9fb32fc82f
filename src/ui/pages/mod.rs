pub mod dashboard;
pub mod details;
pub mod settings;

pub use dashboard::DashboardPage;
pub use details::DetailsPage;
pub use settings::SettingsPage;
