use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// Unanchored: something@something.something anywhere in the value.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Phone,
    Email,
    Message,
    PreferredTime,
    AgreeToContact,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Phone,
        FormField::Email,
        FormField::Message,
        FormField::PreferredTime,
        FormField::AgreeToContact,
    ];

    /// DOM id and `name` attribute of the input.
    pub fn id(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::Email => "email",
            FormField::Message => "message",
            FormField::PreferredTime => "preferredTime",
            FormField::AgreeToContact => "agreeToContact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Phone => "Phone",
            FormField::Email => "Email",
            FormField::Message => "What brings you here?",
            FormField::PreferredTime => "Preferred time to reach you",
            FormField::AgreeToContact => "I agree to be contacted by Dr. Blake regarding my inquiry",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Your full name",
            FormField::Phone => "Your phone number",
            FormField::Email => "your.email@example.com",
            FormField::Message => "Please tell us about your concerns and what you hope to achieve through therapy...",
            FormField::PreferredTime => "e.g., Weekdays after 5 PM, Weekends, etc.",
            FormField::AgreeToContact => "",
        }
    }

    /// HTML input type. The message field renders as a textarea instead.
    pub fn input_type(self) -> &'static str {
        match self {
            FormField::Phone => "tel",
            FormField::Email => "email",
            FormField::AgreeToContact => "checkbox",
            _ => "text",
        }
    }
}

/// A single change coming from one form control.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldInput {
    Text(FormField, String),
    Checked(bool),
}

impl FieldInput {
    pub fn field(&self) -> FormField {
        match self {
            FieldInput::Text(field, _) => *field,
            FieldInput::Checked(_) => FormField::AgreeToContact,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormState {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub preferred_time: String,
    pub agree_to_contact: bool,
}

impl ContactFormState {
    pub fn text(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
            FormField::PreferredTime => &self.preferred_time,
            FormField::AgreeToContact => "",
        }
    }

    /// Applies one control change. A text value aimed at the checkbox is ignored.
    pub fn apply(&mut self, input: FieldInput) {
        match input {
            FieldInput::Text(FormField::Name, value) => self.name = value,
            FieldInput::Text(FormField::Phone, value) => self.phone = value,
            FieldInput::Text(FormField::Email, value) => self.email = value,
            FieldInput::Text(FormField::Message, value) => self.message = value,
            FieldInput::Text(FormField::PreferredTime, value) => self.preferred_time = value,
            FieldInput::Text(FormField::AgreeToContact, _) => {}
            FieldInput::Checked(checked) => self.agree_to_contact = checked,
        }
    }
}

/// Inline error messages keyed by the field that produced them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn clear(&mut self, field: FormField) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: FormField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks every field independently and returns the full error set.
pub fn validate(form: &ContactFormState) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if is_blank(&form.name) {
        errors.insert(FormField::Name, "Name is required");
    }
    if is_blank(&form.phone) {
        errors.insert(FormField::Phone, "Phone is required");
    }
    if is_blank(&form.email) {
        errors.insert(FormField::Email, "Email is required");
    } else if !EMAIL_PATTERN.is_match(&form.email) {
        errors.insert(FormField::Email, "Please enter a valid email");
    }
    if is_blank(&form.message) {
        errors.insert(FormField::Message, "Please tell us what brings you here");
    }
    if is_blank(&form.preferred_time) {
        errors.insert(FormField::PreferredTime, "Preferred time is required");
    }
    if !form.agree_to_contact {
        errors.insert(FormField::AgreeToContact, "You must agree to be contacted");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled() -> ContactFormState {
        ContactFormState {
            name: "Ada Lovelace".to_string(),
            phone: "(323) 555-0100".to_string(),
            email: "ada@example.com".to_string(),
            message: "Trouble sleeping lately".to_string(),
            preferred_time: "Weekdays after 5 PM".to_string(),
            agree_to_contact: true,
        }
    }

    #[test]
    fn complete_form_has_no_errors() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn each_empty_text_field_reports_only_itself() {
        let cases = [
            (FormField::Name, "Name is required"),
            (FormField::Phone, "Phone is required"),
            (FormField::Email, "Email is required"),
            (FormField::Message, "Please tell us what brings you here"),
            (FormField::PreferredTime, "Preferred time is required"),
        ];
        for (field, expected) in cases {
            let mut form = filled();
            form.apply(FieldInput::Text(field, String::new()));
            let errors = validate(&form);
            assert_eq!(errors.len(), 1, "field {:?}", field);
            assert_eq!(errors.get(field), Some(expected));
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.name = "   \t".to_string();
        assert_eq!(validate(&form).get(FormField::Name), Some("Name is required"));
    }

    #[test]
    fn email_format_rules() {
        let mut form = filled();

        form.email = "not-an-email".to_string();
        assert_eq!(validate(&form).get(FormField::Email), Some("Please enter a valid email"));

        form.email = String::new();
        assert_eq!(validate(&form).get(FormField::Email), Some("Email is required"));

        form.email = "a@b.co".to_string();
        assert_eq!(validate(&form).get(FormField::Email), None);

        form.email = "a@b".to_string();
        assert_eq!(validate(&form).get(FormField::Email), Some("Please enter a valid email"));
    }

    #[test]
    fn missing_agreement_is_the_only_error() {
        let mut form = filled();
        form.apply(FieldInput::Checked(false));
        let errors = validate(&form);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![FormField::AgreeToContact]);
        assert_eq!(errors.get(FormField::AgreeToContact), Some("You must agree to be contacted"));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate(&ContactFormState::default());
        assert_eq!(errors.fields().collect::<Vec<_>>(), FormField::ALL.to_vec());
    }

    #[test]
    fn field_ids_are_unique() {
        let ids: std::collections::HashSet<_> = FormField::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(ids.len(), FormField::ALL.len());
        assert_eq!(FormField::PreferredTime.id(), "preferredTime");
    }

    #[test]
    fn text_aimed_at_checkbox_is_ignored() {
        let mut form = ContactFormState::default();
        form.apply(FieldInput::Text(FormField::AgreeToContact, "on".to_string()));
        assert_eq!(form, ContactFormState::default());
    }

    #[test]
    fn serializes_with_browser_field_names() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["preferredTime"], "Weekdays after 5 PM");
        assert_eq!(json["agreeToContact"], true);
    }

    proptest! {
        #[test]
        fn blank_text_is_always_required(blank in "[ \t\n]{0,8}") {
            let mut form = filled();
            form.name = blank.clone();
            form.preferred_time = blank;
            let errors = validate(&form);
            prop_assert_eq!(errors.get(FormField::Name), Some("Name is required"));
            prop_assert_eq!(errors.get(FormField::PreferredTime), Some("Preferred time is required"));
            prop_assert_eq!(errors.len(), 2);
        }

        #[test]
        fn local_at_domain_dot_tld_is_accepted(
            local in "[a-z0-9._%+-]{1,12}",
            domain in "[a-z0-9-]{1,12}",
            tld in "[a-z]{1,6}",
        ) {
            let mut form = filled();
            form.email = format!("{}@{}.{}", local, domain, tld);
            prop_assert!(validate(&form).is_empty());
        }

        #[test]
        fn email_without_at_sign_is_rejected(email in "[a-z0-9.]{1,20}") {
            let mut form = filled();
            form.email = email;
            let errors = validate(&form);
            prop_assert_eq!(errors.get(FormField::Email), Some("Please enter a valid email"));
        }
    }
}
