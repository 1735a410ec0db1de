//! News Entity
//!
//! News articles, publications and press releases.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::filter::Searchable;

/// Kind of news entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NewsKind {
    News,
    Publication,
    PressRelease,
}

impl NewsKind {
    pub const ALL: [NewsKind; 3] = [NewsKind::News, NewsKind::Publication, NewsKind::PressRelease];

    /// Slug used by the type filter
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsKind::News => "news",
            NewsKind::Publication => "publication",
            NewsKind::PressRelease => "press-release",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NewsKind::News => "News",
            NewsKind::Publication => "Publication",
            NewsKind::PressRelease => "Press Release",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == slug)
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            NewsKind::News => "badge badge-blue",
            NewsKind::Publication => "badge badge-green",
            NewsKind::PressRelease => "badge badge-purple",
        }
    }
}

/// A news entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub image: String,
    pub kind: NewsKind,
    pub download_url: Option<String>,
}

impl NewsItem {
    /// Long US-style date, e.g. "March 15, 2025"
    pub fn formatted_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    /// Month and year, e.g. "March 2025"
    pub fn month_label(&self) -> String {
        self.date.format("%B %Y").to_string()
    }
}

impl Entity for NewsItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Searchable for NewsItem {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn kind(&self) -> Option<&str> {
        Some(self.kind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(date: NaiveDate) -> NewsItem {
        NewsItem {
            id: "1".into(),
            title: "t".into(),
            description: "d".into(),
            category: "Research".into(),
            date,
            image: String::new(),
            kind: NewsKind::PressRelease,
            download_url: None,
        }
    }

    #[test]
    fn test_formatted_date() {
        let item = make_item(NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        assert_eq!(item.formatted_date(), "March 5, 2025");
        assert_eq!(item.month_label(), "March 2025");
    }

    #[test]
    fn test_kind_slugs() {
        assert_eq!(NewsKind::from_slug("press-release"), Some(NewsKind::PressRelease));
        assert_eq!(NewsKind::from_slug("blog"), None);
        assert_eq!(make_item(NaiveDate::MIN).kind(), Some("press-release"));
        let json = serde_json::to_string(&NewsKind::PressRelease).unwrap();
        assert_eq!(json, "\"press-release\"");
    }
}
