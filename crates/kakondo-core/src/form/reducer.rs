//! Single entry point for draft updates

use super::draft::{Draft, FieldValue};

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Set { field: &'static str, value: FieldValue },
    Toggle { field: &'static str, item: String, included: bool },
    Reset,
}

impl FormAction {
    pub fn set(field: &'static str, value: impl Into<FieldValue>) -> Self {
        FormAction::Set { field, value: value.into() }
    }

    pub fn toggle(field: &'static str, item: impl Into<String>, included: bool) -> Self {
        FormAction::Toggle { field, item: item.into(), included }
    }
}

pub fn reduce(draft: &Draft, action: FormAction) -> Draft {
    match action {
        FormAction::Set { field, value } => draft.set_field(field, value),
        FormAction::Toggle { field, item, included } => draft.toggle(field, &item, included),
        FormAction::Reset => Draft::new(draft.schema()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::schema::GET_INVOLVED;

    #[test]
    fn test_actions() {
        let draft = Draft::new(&GET_INVOLVED);
        let draft = reduce(&draft, FormAction::set("name", "Jane"));
        let draft = reduce(&draft, FormAction::toggle("interests", "Climate Change", true));
        let draft = reduce(&draft, FormAction::set("agreed_to_terms", true));

        assert_eq!(draft.text("name"), "Jane");
        assert!(draft.contains("interests", "Climate Change"));
        assert!(draft.flag("agreed_to_terms"));

        let reset = reduce(&draft, FormAction::Reset);
        assert!(reset.is_pristine());
        assert_eq!(reset.schema().id, "get-involved");
    }
}
