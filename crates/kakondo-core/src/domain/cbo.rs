//! CBO Entity
//!
//! Community-based organizations affiliated with KPAM.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use crate::aggregate::Tally;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CboStatus {
    #[default]
    Active,
    Inactive,
}

impl CboStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CboStatus::Active => "active",
            CboStatus::Inactive => "inactive",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            CboStatus::Active => CboStatus::Inactive,
            CboStatus::Inactive => CboStatus::Active,
        }
    }
}

/// A community-based organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cbo {
    pub id: String,
    pub name: String,
    pub location: String,
    pub ward: String,
    pub members: u64,
    pub contact: String,
    pub status: CboStatus,
    pub established: String,
    pub activities: Vec<String>,
}

impl Cbo {
    /// New CBO registered from the dashboard; id is assigned by the repository
    pub fn new(name: String, location: String, ward: String, contact: String) -> Self {
        Self {
            id: String::new(),
            name,
            location,
            ward,
            members: 0,
            contact,
            status: CboStatus::Active,
            established: String::new(),
            activities: Vec::new(),
        }
    }
}

impl Entity for Cbo {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Tally for Cbo {
    type Status = CboStatus;

    fn status(&self) -> CboStatus {
        self.status
    }

    fn measure(&self) -> u64 {
        self.members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cbo_creation() {
        let cbo = Cbo::new("Gaten".into(), "Dumun".into(), "Ward 11".into(), String::new());
        assert!(cbo.id().is_empty());
        assert_eq!(cbo.status, CboStatus::Active);
        assert_eq!(cbo.members, 0);
    }

    #[test]
    fn test_status_toggle() {
        assert_eq!(CboStatus::Active.toggled(), CboStatus::Inactive);
        assert_eq!(CboStatus::Inactive.toggled(), CboStatus::Active);
    }
}
