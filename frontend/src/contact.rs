use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Venue,
    Studio,
    Corporate,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Venue,
        Category::Studio,
        Category::Corporate,
        Category::Other,
    ];

    /// Value used by the `<select>` option.
    pub fn value(self) -> &'static str {
        match self {
            Category::Venue => "venue",
            Category::Studio => "studio",
            Category::Corporate => "corporate",
            Category::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Venue => "Venue / Social Club",
            Category::Studio => "Studio / Wellness Space",
            Category::Corporate => "Corporate / Workplace",
            Category::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Organization,
    Role,
    Category,
}

impl Field {
    pub fn is_required(self) -> bool {
        matches!(self, Field::Name | Field::Email | Field::Organization)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email",
            Field::Organization => "Organization / Venue",
            Field::Role => "Role",
            Field::Category => "Type",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing required fields: {}", join_labels(.0))]
    MissingFields(Vec<Field>),
}

fn join_labels(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub role: String,
    pub category: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Organization => &self.organization,
            Field::Role => &self.role,
            Field::Category => &self.category,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Organization => self.organization = value,
            Field::Role => self.role = value,
            Field::Category => self.category = value,
        }
    }

    pub fn missing_fields(&self) -> Vec<Field> {
        [Field::Name, Field::Email, Field::Organization]
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn to_record(&self) -> Result<ContactRecord, ContactError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ContactError::MissingFields(missing));
        }
        Ok(ContactRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            organization: self.organization.clone(),
            role: (!self.role.is_empty()).then(|| self.role.clone()),
            category: Category::from_value(&self.category),
        })
    }
}

/// An accepted contact request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub organization: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// Client-side contact form. Nothing leaves the page; a successful submit
/// only flips the form into its thank-you state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    submitted: Option<ContactRecord>,
}

impl ContactForm {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn submitted(&self) -> Option<&ContactRecord> {
        self.submitted.as_ref()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted.is_some()
    }

    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitted() && self.draft.is_complete()
    }

    pub fn update(&mut self, field: Field, value: String) {
        if self.submitted.is_none() {
            self.draft.set(field, value);
        }
    }

    /// A rejected submit leaves the form untouched and editable.
    pub fn submit(&mut self) -> Result<&ContactRecord, ContactError> {
        let record = match self.submitted.take() {
            Some(record) => record,
            None => self.draft.to_record()?,
        };
        Ok(self.submitted.insert(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(name: &str, email: &str, organization: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.update(Field::Name, name.to_string());
        form.update(Field::Email, email.to_string());
        form.update(Field::Organization, organization.to_string());
        form
    }

    #[test]
    fn missing_email_is_rejected_then_accepted_once_filled() {
        let mut form = form_with("Ada", "", "Acme");
        assert!(!form.can_submit());
        assert_eq!(
            form.submit(),
            Err(ContactError::MissingFields(vec![Field::Email]))
        );
        assert!(!form.is_submitted());

        form.update(Field::Email, "a@b.com".to_string());
        assert!(form.can_submit());
        let record = form.submit().cloned();
        assert_eq!(
            record,
            Ok(ContactRecord {
                name: "Ada".to_string(),
                email: "a@b.com".to_string(),
                organization: "Acme".to_string(),
                role: None,
                category: None,
            })
        );
        assert!(form.is_submitted());
        assert!(!form.can_submit());
    }

    #[test]
    fn empty_form_lists_every_required_field() {
        let mut form = ContactForm::default();
        let err = form.submit().unwrap_err();
        assert_eq!(
            err,
            ContactError::MissingFields(vec![Field::Name, Field::Email, Field::Organization])
        );
        assert_eq!(
            err.to_string(),
            "missing required fields: Full Name, Email, Organization / Venue"
        );
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let form = form_with(" ", " ", " ");
        assert!(form.can_submit());
    }

    #[test]
    fn optional_fields_are_carried_when_present() {
        let mut form = form_with("Ada", "a@b.com", "Acme");
        form.update(Field::Role, "Director".to_string());
        form.update(Field::Category, "studio".to_string());
        let record = form.submit().cloned().unwrap();
        assert_eq!(record.role.as_deref(), Some("Director"));
        assert_eq!(record.category, Some(Category::Studio));
    }

    #[test]
    fn unknown_category_value_is_dropped() {
        let mut form = form_with("Ada", "a@b.com", "Acme");
        form.update(Field::Category, "bogus".to_string());
        assert_eq!(form.submit().unwrap().category, None);
    }

    #[test]
    fn edits_after_submit_are_ignored() {
        let mut form = form_with("Ada", "a@b.com", "Acme");
        form.submit().unwrap();
        form.update(Field::Name, String::new());
        assert_eq!(form.draft().name, "Ada");
        assert_eq!(form.submitted().map(|r| r.name.as_str()), Some("Ada"));
    }

    #[test]
    fn record_serializes_without_empty_optionals() {
        let mut form = form_with("Ada", "a@b.com", "Acme");
        form.update(Field::Category, "corporate".to_string());
        let json = serde_json::to_string(form.submit().unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Ada","email":"a@b.com","organization":"Acme","category":"corporate"}"#
        );
    }

    #[test]
    fn category_values_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_value(category.value()), Some(category));
        }
        assert_eq!(Category::from_value(""), None);
    }

    #[test]
    fn only_identity_fields_are_required() {
        assert!(Field::Name.is_required());
        assert!(Field::Email.is_required());
        assert!(Field::Organization.is_required());
        assert!(!Field::Role.is_required());
        assert!(!Field::Category.is_required());
    }
}
