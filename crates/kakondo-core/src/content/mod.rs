//! Content registry
//!
//! Every collection is rebuilt from literals on each call; callers own
//! the returned records.

pub mod news;
pub mod pages;
pub mod projects;
pub mod network;
pub mod team;

pub use network::{cbos, staff_contacts, STAFF_STATUS_CHOICES, WARDS, WARD_CHOICES};
pub use news::{latest_news, news_items, news_kind_choices, NEWS_CATEGORIES};
pub use projects::{projects, FeaturedProject, FEATURED_PROJECTS, PROJECT_CATEGORIES};
pub use team::{team_members, BOARD_OFFICERS, BOARD_TRIBAL_REPRESENTATIVES};

/// Image host for all site photography
pub(crate) const CDN: &str = "https://pub-cdn.sider.ai/u/U01AH8X8EKX/web-coder/6863bb0f235f86442e3a1440/resource";

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
