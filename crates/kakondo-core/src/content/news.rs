//! News and publications

use chrono::NaiveDate;

use super::CDN;
use crate::domain::{NewsItem, NewsKind};

pub const NEWS_CATEGORIES: &[&str] = &["all", "Conservation", "Agriculture", "Organization", "Training", "Research"];

/// Type filter choices, sentinel first
pub fn news_kind_choices() -> Vec<(&'static str, &'static str)> {
    std::iter::once(("all", "All Types"))
        .chain(NewsKind::ALL.iter().map(|kind| (kind.as_str(), kind.label())))
        .collect()
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Newest first
pub fn news_items() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: "1".into(),
            title: "Protected Area Deed Signing Progress".into(),
            description: "KPAM Inc. continues to work with CEPA and UNDP to finalize legal recognition as a regional protected area managed by indigenous communities.".into(),
            category: "Conservation".into(),
            date: day(2025, 3, 15),
            image: format!("{CDN}/0bb4b75e-fcbe-46e6-995d-830afac1c1e7.jpeg"),
            kind: NewsKind::News,
            download_url: None,
        },
        NewsItem {
            id: "2".into(),
            title: "Climate Resilience Model Farms Established".into(),
            description: "New model farms in Ward 6 of Chuave demonstrate climate-smart agriculture practices with initial PGK 3,500 grant from Simbu Provincial Department.".into(),
            category: "Agriculture".into(),
            date: day(2025, 3, 10),
            image: format!("{CDN}/8c60080a-568c-4859-921e-36e79fccc6db.jpg"),
            kind: NewsKind::News,
            download_url: None,
        },
        NewsItem {
            id: "3".into(),
            title: "KPAM Inc. Organizational Profile 2025".into(),
            description: "Comprehensive organizational profile detailing our history, mission, team, and strategic focus areas for sustainable development.".into(),
            category: "Organization".into(),
            date: day(2025, 3, 1),
            image: format!("{CDN}/e845fe06-0536-4a95-b5e7-a7f23da3a2a4.jpeg"),
            kind: NewsKind::Publication,
            download_url: Some("#".into()),
        },
        NewsItem {
            id: "4".into(),
            title: "NGO Registration Successfully Completed".into(),
            description: "KPAM Inc. officially registered as NGO under Investment Promotion Authority, marking a major milestone in organizational development.".into(),
            category: "Organization".into(),
            date: day(2025, 2, 17),
            image: format!("{CDN}/307ed65a-66c2-4362-9bb6-3352d5b96b2e.jpg"),
            kind: NewsKind::PressRelease,
            download_url: None,
        },
        NewsItem {
            id: "5".into(),
            title: "Community-Based Conservation Training Program".into(),
            description: "Training and capacity building programs launched to enhance skills of local communities in sustainable practices and natural resource management.".into(),
            category: "Training".into(),
            date: day(2025, 2, 1),
            image: format!("{CDN}/9866cecf-f116-4564-9a78-3b7427a6e765.jpeg"),
            kind: NewsKind::News,
            download_url: None,
        },
        NewsItem {
            id: "6".into(),
            title: "Ecosystem-Based Adaptation Research Publication".into(),
            description: "Contribution to Nature-Based Solutions handbook published by Springer, showcasing our climate adaptation strategies.".into(),
            category: "Research".into(),
            date: day(2024, 12, 15),
            image: format!("{CDN}/45b45a6c-2824-4f6a-a246-4967439922b4.jpg"),
            kind: NewsKind::Publication,
            download_url: Some("#".into()),
        },
    ]
}

/// Latest entries for the Home page teaser
pub fn latest_news(count: usize) -> Vec<NewsItem> {
    let mut items = news_items();
    items.sort_by(|a, b| b.date.cmp(&a.date));
    items.truncate(count);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Catalog, FilterCriteria, Selection};

    #[test]
    fn test_search_and_type_filters() {
        let catalog = Catalog::new(news_items());
        let criteria = FilterCriteria::new()
            .with_search("model farms")
            .with_kind(Selection::from_choice("news"));
        let view = catalog.filter(&criteria);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "2");

        let publications = catalog.filter(&FilterCriteria::new().with_kind(Selection::from_choice("publication")));
        let ids: Vec<&str> = publications.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "6"]);
    }

    #[test]
    fn test_search_matches_description() {
        let catalog = Catalog::new(news_items());
        let view = catalog.filter(&FilterCriteria::new().with_search("springer"));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].category, "Research");
    }

    #[test]
    fn test_no_results() {
        let catalog = Catalog::new(news_items());
        let criteria = FilterCriteria::new()
            .with_category(Selection::from_choice("Research"))
            .with_kind(Selection::from_choice("press-release"));
        assert!(catalog.filter(&criteria).is_empty());
    }

    #[test]
    fn test_seeded_dates_are_real() {
        // `day` falls back to the default date on a typo like month 13
        let items = news_items();
        assert!(!items.is_empty());
        for item in &items {
            assert_ne!(item.date, NaiveDate::default(), "news item {}", item.id);
        }
    }

    #[test]
    fn test_latest_news_is_newest_first() {
        let latest = latest_news(3);
        assert_eq!(latest.len(), 3);
        assert!(latest.windows(2).all(|pair| pair[0].date >= pair[1].date));
        assert_eq!(latest[0].formatted_date(), "March 15, 2025");
    }

    #[test]
    fn test_kind_choices() {
        let choices = news_kind_choices();
        assert_eq!(choices[0], ("all", "All Types"));
        assert_eq!(choices[3], ("press-release", "Press Release"));
    }
}
