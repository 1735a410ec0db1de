//! Team Entities
//!
//! `TeamMember` is the public profile shown on the Team page.
//! `StaffContact` is the lighter roster row managed from the Dashboard.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::aggregate::Tally;

/// Role group of a team member
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Executive,
    Board,
    Volunteer,
    Program,
}

impl MemberKind {
    pub fn label(&self) -> &'static str {
        match self {
            MemberKind::Executive => "Executive Team",
            MemberKind::Board => "Board Member",
            MemberKind::Volunteer => "Volunteer",
            MemberKind::Program => "Program Staff",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            MemberKind::Executive => "badge badge-green",
            MemberKind::Board => "badge badge-blue",
            MemberKind::Volunteer => "badge badge-purple",
            MemberKind::Program => "badge badge-orange",
        }
    }
}

/// Public team profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub position: String,
    pub age: u32,
    pub gender: String,
    pub qualification: String,
    pub specialization: String,
    pub email: String,
    pub phone: String,
    pub background: String,
    pub kind: MemberKind,
    pub image: Option<String>,
}

impl Entity for TeamMember {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Tally for TeamMember {
    type Status = MemberKind;

    fn status(&self) -> MemberKind {
        self.kind
    }
}

/// Engagement of a dashboard roster entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StaffStatus {
    #[default]
    Active,
    Volunteer,
}

impl StaffStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffStatus::Active => "active",
            StaffStatus::Volunteer => "volunteer",
        }
    }

    /// Unknown or empty values read as `Active`
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "volunteer" => StaffStatus::Volunteer,
            _ => StaffStatus::Active,
        }
    }
}

/// Roster entry managed from the Dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffContact {
    pub id: String,
    pub name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub ward: String,
    pub status: StaffStatus,
}

impl Entity for StaffContact {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Tally for StaffContact {
    type Status = StaffStatus;

    fn status(&self) -> StaffStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_status_parse() {
        assert_eq!(StaffStatus::parse_lenient("volunteer"), StaffStatus::Volunteer);
        assert_eq!(StaffStatus::parse_lenient("active"), StaffStatus::Active);
        assert_eq!(StaffStatus::parse_lenient(""), StaffStatus::Active);
        assert_eq!(StaffStatus::parse_lenient("retired"), StaffStatus::Active);
    }

    #[test]
    fn test_member_kind_labels() {
        assert_eq!(MemberKind::Program.label(), "Program Staff");
        assert_eq!(MemberKind::Executive.label(), "Executive Team");
    }
}
