//! Dashboard drafts to repository records

use super::draft::Draft;
use crate::domain::{Cbo, StaffContact, StaffStatus};

fn trimmed(draft: &Draft, field: &str) -> String {
    draft.text(field).trim().to_string()
}

/// New CBO from an `ADD_CBO` draft; the repository assigns the id
pub fn cbo_from_draft(draft: &Draft) -> Cbo {
    Cbo::new(
        trimmed(draft, "name"),
        trimmed(draft, "location"),
        trimmed(draft, "ward"),
        trimmed(draft, "contact"),
    )
}

/// New roster entry from an `ADD_STAFF` draft
pub fn staff_from_draft(draft: &Draft) -> StaffContact {
    StaffContact {
        id: String::new(),
        name: trimmed(draft, "name"),
        position: trimmed(draft, "position"),
        email: trimmed(draft, "email"),
        phone: trimmed(draft, "phone"),
        ward: trimmed(draft, "ward"),
        status: StaffStatus::parse_lenient(draft.text("status")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CboStatus;
    use crate::form::schema::{ADD_CBO, ADD_STAFF};
    use crate::form::{reduce, FormAction};

    #[test]
    fn test_cbo_from_draft() {
        let draft = [
            FormAction::set("name", " Kaubasis Mothers Group "),
            FormAction::set("location", "Kaubasis"),
            FormAction::set("ward", "Ward 12"),
        ]
        .into_iter()
        .fold(Draft::new(&ADD_CBO), |d, a| reduce(&d, a));

        let cbo = cbo_from_draft(&draft);
        assert_eq!(cbo.name, "Kaubasis Mothers Group");
        assert_eq!(cbo.ward, "Ward 12");
        assert_eq!(cbo.contact, "");
        assert_eq!(cbo.members, 0);
        assert_eq!(cbo.status, CboStatus::Active);
        assert!(cbo.id.is_empty());
    }

    #[test]
    fn test_staff_status_defaults_to_active() {
        let draft = Draft::new(&ADD_STAFF).set_field("name", "Peter Mire".into());
        assert_eq!(staff_from_draft(&draft).status, StaffStatus::Active);

        let draft = draft.set_field("status", "volunteer".into());
        assert_eq!(staff_from_draft(&draft).status, StaffStatus::Volunteer);
    }
}
