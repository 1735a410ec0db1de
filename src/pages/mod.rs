//! Routed pages

mod contact;
mod dashboard;
mod focus_area;
mod get_involved;
mod home;
mod news;
mod not_found;
mod projects;
mod team;

pub use contact::ContactPage;
pub use dashboard::DashboardPage;
pub use focus_area::FocusAreaPage;
pub use get_involved::GetInvolvedPage;
pub use home::HomePage;
pub use news::NewsPage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;
pub use team::TeamPage;
