//! Project Entity
//!
//! Conservation and development initiatives listed on the Projects page.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::aggregate::Tally;
use crate::filter::Searchable;

/// Lifecycle stage of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Completed,
    Ongoing,
    Planned,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::Ongoing => "ongoing",
            ProjectStatus::Planned => "planned",
        }
    }

    /// CSS modifier for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "badge badge-green",
            ProjectStatus::Ongoing => "badge badge-blue",
            ProjectStatus::Planned => "badge badge-yellow",
        }
    }
}

/// A project in the portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// One of `PROJECT_CATEGORIES` (minus the "all" sentinel)
    pub category: String,
    pub status: ProjectStatus,
    /// Free-form period, e.g. "2020-2022"
    pub year: String,
    pub location: String,
    pub beneficiaries: u64,
    pub budget: Option<String>,
    pub partners: Vec<String>,
    pub outcomes: Vec<String>,
    pub image: String,
    pub details: String,
}

impl Project {
    /// Outcomes shown on the summary card
    pub fn headline_outcomes(&self) -> &[String] {
        let end = self.outcomes.len().min(2);
        &self.outcomes[..end]
    }
}

impl Entity for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Searchable for Project {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn category(&self) -> &str {
        &self.category
    }
}

impl Tally for Project {
    type Status = ProjectStatus;

    fn status(&self) -> ProjectStatus {
        self.status
    }

    fn measure(&self) -> u64 {
        self.beneficiaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_project(outcomes: &[&str]) -> Project {
        Project {
            id: "p".into(),
            title: "Trail".into(),
            description: "Footpaths".into(),
            category: "Tourism".into(),
            status: ProjectStatus::Ongoing,
            year: "2024".into(),
            location: "Kakondo".into(),
            beneficiaries: 10,
            budget: None,
            partners: vec![],
            outcomes: outcomes.iter().map(|s| s.to_string()).collect(),
            image: String::new(),
            details: String::new(),
        }
    }

    #[test]
    fn test_headline_outcomes_caps_at_two() {
        assert_eq!(make_project(&["a", "b", "c"]).headline_outcomes().len(), 2);
        assert_eq!(make_project(&["a"]).headline_outcomes().len(), 1);
        assert!(make_project(&[]).headline_outcomes().is_empty());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ProjectStatus::Ongoing).unwrap();
        assert_eq!(json, "\"ongoing\"");
    }
}
