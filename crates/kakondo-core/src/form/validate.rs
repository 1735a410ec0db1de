//! Required-field validation

use super::draft::Draft;
use super::error::ValidationError;

/// Check every required field, collecting all that are missing
pub fn validate(draft: &Draft) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = draft
        .schema()
        .required_fields()
        .filter(|spec| !draft.get(spec.name).is_some_and(|value| value.is_filled()))
        .map(|spec| spec.name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::draft::FieldValue;
    use crate::form::schema::{FieldKind, FormSchema, ADD_CBO, ADD_STAFF, CONTACT, GET_INVOLVED, NEWSLETTER};

    fn complete_application() -> Draft {
        Draft::new(&GET_INVOLVED)
            .set_field("name", "Jane".into())
            .set_field("email", "jane@example.com".into())
            .set_field("motivation", "help".into())
            .set_field("agreed_to_terms", true.into())
    }

    #[test]
    fn test_complete_draft_is_valid() {
        assert_eq!(validate(&complete_application()), Ok(()));
    }

    #[test]
    fn test_empty_draft_reports_every_missing_field() {
        let err = validate(&Draft::new(&GET_INVOLVED)).unwrap_err();
        assert_eq!(err.missing, vec!["name", "email", "motivation", "agreed_to_terms"]);
    }

    #[test]
    fn test_one_field_missing() {
        let draft = complete_application().set_field("agreed_to_terms", false.into());
        let err = validate(&draft).unwrap_err();
        assert_eq!(err.missing, vec!["agreed_to_terms"]);
        assert!(err.is_missing("agreed_to_terms"));
        assert_eq!(err.to_string(), "Missing required fields: agreed_to_terms");
    }

    #[test]
    fn test_whitespace_is_empty() {
        let draft = Draft::new(&NEWSLETTER).set_field("email", "   ".into());
        assert!(validate(&draft).is_err());

        let draft = Draft::new(&ADD_CBO)
            .set_field("name", "Kaubasis".into())
            .set_field("location", " Kaubasis ".into())
            .set_field("ward", "Ward 12".into());
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn test_each_required_field_is_reported_alone() {
        let schemas: [&'static FormSchema; 5] = [&CONTACT, &GET_INVOLVED, &NEWSLETTER, &ADD_CBO, &ADD_STAFF];
        for schema in schemas {
            let filled = schema.required_fields().fold(Draft::new(schema), |draft, spec| {
                let value = match spec.kind {
                    FieldKind::Text => "x".into(),
                    FieldKind::Flag => true.into(),
                    FieldKind::Choices => FieldValue::Choices(["x".to_string()].into()),
                };
                draft.set_field(spec.name, value)
            });
            assert_eq!(validate(&filled), Ok(()), "{}", schema.id);

            for spec in schema.required_fields() {
                let draft = filled.set_field(spec.name, FieldValue::zero(spec.kind));
                let err = validate(&draft).unwrap_err();
                assert_eq!(err.missing, vec![spec.name], "{}", schema.id);
            }
        }
    }
}
