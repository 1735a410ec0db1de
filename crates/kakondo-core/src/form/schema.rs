//! Form schemas
//!
//! Each form is a static list of fields in declaration order. Validation
//! reports missing fields in this order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, select or radio value
    Text,
    /// Checkbox
    Flag,
    /// Multi-select checkbox group
    Choices,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    const fn text(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Text, required: false }
    }

    const fn flag(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Flag, required: false }
    }

    const fn choices(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Choices, required: false }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct FormSchema {
    pub id: &'static str,
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Label for a field name, the name itself when unknown
    pub fn label<'a>(&self, name: &'a str) -> &'a str {
        self.field(name).map(|f| f.label).unwrap_or(name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields.iter().filter(|f| f.required)
    }
}

pub static CONTACT: FormSchema = FormSchema {
    id: "contact",
    fields: &[
        FieldSpec::text("name", "Full Name").required(),
        FieldSpec::text("email", "Email Address").required(),
        FieldSpec::text("phone", "Phone Number"),
        FieldSpec::text("inquiry_type", "Inquiry Type"),
        FieldSpec::text("subject", "Subject"),
        FieldSpec::text("message", "Message").required(),
        FieldSpec::flag("volunteer", "I'm interested in volunteering with Kakondo Protected Area Management Inc."),
        FieldSpec::flag("agreed_to_terms", "I agree to the terms and conditions and privacy policy").required(),
        FieldSpec::flag("human_check", "I'm not a robot (CAPTCHA verification)").required(),
    ],
};

pub static GET_INVOLVED: FormSchema = FormSchema {
    id: "get-involved",
    fields: &[
        FieldSpec::text("name", "Full Name").required(),
        FieldSpec::text("email", "Email Address").required(),
        FieldSpec::text("phone", "Phone Number"),
        FieldSpec::text("location", "Location"),
        FieldSpec::text("involvement_type", "How would you like to get involved?"),
        FieldSpec::choices("interests", "Areas of Interest (Select all that apply)"),
        FieldSpec::text("skills", "Relevant Skills & Qualifications"),
        FieldSpec::text("experience", "Previous Experience"),
        FieldSpec::text("availability", "Availability"),
        FieldSpec::text("motivation", "Why do you want to get involved?").required(),
        FieldSpec::flag(
            "agreed_to_terms",
            "I agree to the terms and conditions and consent to being contacted",
        )
        .required(),
    ],
};

pub static NEWSLETTER: FormSchema = FormSchema {
    id: "newsletter",
    fields: &[FieldSpec::text("email", "Email Address").required()],
};

pub static ADD_CBO: FormSchema = FormSchema {
    id: "add-cbo",
    fields: &[
        FieldSpec::text("name", "CBO Name").required(),
        FieldSpec::text("location", "Location").required(),
        FieldSpec::text("ward", "Ward").required(),
        FieldSpec::text("contact", "Contact Number"),
    ],
};

pub static ADD_STAFF: FormSchema = FormSchema {
    id: "add-staff",
    fields: &[
        FieldSpec::text("name", "Full Name").required(),
        FieldSpec::text("position", "Position").required(),
        FieldSpec::text("email", "Email").required(),
        FieldSpec::text("phone", "Phone"),
        FieldSpec::text("ward", "Ward"),
        FieldSpec::text("status", "Status"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_in_declaration_order() {
        let required: Vec<&str> = GET_INVOLVED.required_fields().map(|f| f.name).collect();
        assert_eq!(required, vec!["name", "email", "motivation", "agreed_to_terms"]);

        let required: Vec<&str> = CONTACT.required_fields().map(|f| f.name).collect();
        assert_eq!(required, vec!["name", "email", "message", "agreed_to_terms", "human_check"]);
    }

    #[test]
    fn test_field_lookup() {
        assert_eq!(ADD_CBO.field("ward").map(|f| f.kind), Some(FieldKind::Text));
        assert_eq!(GET_INVOLVED.field("interests").map(|f| f.kind), Some(FieldKind::Choices));
        assert!(NEWSLETTER.field("name").is_none());
        assert_eq!(ADD_STAFF.label("position"), "Position");
        assert_eq!(ADD_STAFF.label("unknown"), "unknown");
    }
}
