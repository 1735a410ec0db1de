//! UI Components
//!
//! Reusable Leptos components.

mod choice_buttons;
mod confirm_button;
mod form;
mod layout;
mod stat_card;

pub use choice_buttons::ChoiceButtons;
pub use confirm_button::ConfirmButton;
pub use form::{
    use_form, CheckboxField, ChoicesField, FormHandle, FormNotice, RadioField, SelectField, SubmitButton,
    TextAreaField, TextField,
};
pub use layout::{SiteFooter, SiteHeader};
pub use stat_card::StatCard;
