//! Affiliated CBOs and the dashboard staff roster (seed data)

use super::pages::Choice;
use super::strings;
use crate::domain::{Cbo, CboStatus, StaffContact, StaffStatus};

/// Wards offered when registering a CBO
pub const WARDS: &[&str] = &["Ward 9", "Ward 10", "Ward 11", "Ward 12", "Ward 14"];

/// Ward select options; the stored value is the ward label
pub const WARD_CHOICES: &[Choice] = &[
    ("Ward 9", "Ward 9"),
    ("Ward 10", "Ward 10"),
    ("Ward 11", "Ward 11"),
    ("Ward 12", "Ward 12"),
    ("Ward 14", "Ward 14"),
];

pub const STAFF_STATUS_CHOICES: &[Choice] = &[("active", "Active"), ("volunteer", "Volunteer")];

#[allow(clippy::too_many_arguments)]
fn cbo(
    id: &str,
    name: &str,
    location: &str,
    ward: &str,
    members: u64,
    contact: &str,
    established: &str,
    activities: &[&str],
) -> Cbo {
    Cbo {
        id: id.into(),
        name: name.into(),
        location: location.into(),
        ward: ward.into(),
        members,
        contact: contact.into(),
        status: CboStatus::Active,
        established: established.into(),
        activities: strings(activities),
    }
}

pub fn cbos() -> Vec<Cbo> {
    vec![
        cbo(
            "1",
            "Gaten Nature Park",
            "Dumun Village",
            "Ward 11",
            45,
            "+675 7123 4567",
            "2020",
            &["Forest Conservation", "Ecotourism", "Community Development"],
        ),
        cbo(
            "2",
            "Mailbobo Wildlife and Nature Conservation",
            "Mailbobo",
            "Ward 9",
            38,
            "+675 7234 5678",
            "2020",
            &["Wildlife Protection", "Habitat Restoration"],
        ),
        cbo(
            "3",
            "Whoty Nature Conservation",
            "Whoty",
            "Ward 10",
            32,
            "+675 7345 6789",
            "2021",
            &["Forest Conservation", "Community Training"],
        ),
        cbo(
            "4",
            "Eveneku Natural Resource Management",
            "Eveneku",
            "Ward 12",
            28,
            "+675 7456 7890",
            "2021",
            &["Resource Management", "Sustainable Development"],
        ),
        cbo(
            "5",
            "Keto Irafa Wildlife and Nature Conservation",
            "Keto Irafa",
            "Ward 14",
            35,
            "+675 7567 8901",
            "2020",
            &["Wildlife Conservation", "Ecotourism Development"],
        ),
    ]
}

pub fn staff_contacts() -> Vec<StaffContact> {
    let row = |id: &str, name: &str, position: &str, email: &str, phone: &str, ward: &str, status| StaffContact {
        id: id.into(),
        name: name.into(),
        position: position.into(),
        email: email.into(),
        phone: phone.into(),
        ward: ward.into(),
        status,
    };
    vec![
        row(
            "1",
            "Mauro Okrupa",
            "Chairman & Executive Director",
            "mauro.okrupa@nari.gov.pg",
            "+675 7182 9634",
            "Ward 11",
            StaffStatus::Active,
        ),
        row(
            "2",
            "Karl Kama",
            "Strategic Advisor",
            "karl.kama@nari.gov.pg",
            "+675 8170 0969",
            "Ward 11",
            StaffStatus::Active,
        ),
        row(
            "3",
            "Paul Rudolph",
            "Sustainable Development Program Manager",
            "paul.rudolph@pumaenergy.com",
            "+675 7318 3614",
            "Ward 14",
            StaffStatus::Volunteer,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Catalog;

    #[test]
    fn test_member_total_is_178() {
        let catalog = Catalog::new(cbos());
        let members: Vec<u64> = catalog.records().iter().map(|c| c.members).collect();
        assert_eq!(members, vec![45, 38, 32, 28, 35]);

        let stats = catalog.aggregate();
        assert_eq!(stats.sum, 178);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.count(CboStatus::Active), 5);
    }

    #[test]
    fn test_staff_roster() {
        let stats = Catalog::new(staff_contacts()).aggregate();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count(StaffStatus::Volunteer), 1);
    }

    #[test]
    fn test_seed_wards_are_offered() {
        for cbo in cbos() {
            assert!(WARDS.iter().any(|w| *w == cbo.ward));
        }
    }

    #[test]
    fn test_ward_choices_store_labels() {
        let values: Vec<&str> = WARD_CHOICES.iter().map(|(value, _)| *value).collect();
        assert_eq!(values, WARDS);
        assert!(WARD_CHOICES.iter().all(|(value, label)| value == label));
    }
}
