//! Request-body validation that runs before any store call.
//!
//! Three passes over an incoming JSON object:
//! 1. required fields of insert shapes must be present and non-null
//! 2. typed decoding (types, dates, non-negative ids)
//! 3. semantic checks on the decoded value (non-blank names, no nulls for required fields)

use crate::domain::model::{
    ClientPatch, ContactPatch, MachinePatch, NewClient, NewContact, NewMachine, NewReminder,
    ReminderPatch,
};
use crate::transport::http::types::FieldError;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// Field name used for errors that concern the whole body.
pub const BODY_FIELD: &str = "<body>";

pub trait Validate: DeserializeOwned {
    /// Wire names of fields that must be present and non-null.
    const REQUIRED: &'static [&'static str] = &[];

    fn check(&self, errors: &mut Vec<FieldError>);
}

pub fn decode<T: Validate>(body: JsonValue) -> Result<T, Vec<FieldError>> {
    let Some(obj) = body.as_object() else {
        return Err(vec![FieldError::new(BODY_FIELD, "expected a JSON object")]);
    };

    let mut errors: Vec<FieldError> = T::REQUIRED
        .iter()
        .filter(|field| obj.get(**field).map_or(true, JsonValue::is_null))
        .map(|field| FieldError::new(*field, "Required"))
        .collect();
    if !errors.is_empty() {
        return Err(errors);
    }

    let value: T = serde_json::from_value(body)
        .map_err(|e| vec![FieldError::new(BODY_FIELD, e.to_string())])?;

    value.check(&mut errors);
    if errors.is_empty() {
        Ok(value)
    } else {
        Err(errors)
    }
}

fn non_blank(field: &str, value: &str, errors: &mut Vec<FieldError>) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
    }
}

fn not_null<T>(field: &str, value: &Option<Option<T>>, errors: &mut Vec<FieldError>) {
    if matches!(value, Some(None)) {
        errors.push(FieldError::new(field, "must not be null"));
    }
}

fn patch_non_blank(field: &str, value: &Option<Option<String>>, errors: &mut Vec<FieldError>) {
    not_null(field, value, errors);
    if let Some(Some(s)) = value {
        non_blank(field, s, errors);
    }
}

impl Validate for NewClient {
    const REQUIRED: &'static [&'static str] = &["name"];

    fn check(&self, errors: &mut Vec<FieldError>) {
        non_blank("name", &self.name, errors);
    }
}

impl Validate for ClientPatch {
    fn check(&self, errors: &mut Vec<FieldError>) {
        patch_non_blank("name", &self.name, errors);
        not_null("status", &self.status, errors);
    }
}

impl Validate for NewContact {
    const REQUIRED: &'static [&'static str] = &["clientId", "name"];

    fn check(&self, errors: &mut Vec<FieldError>) {
        non_blank("name", &self.name, errors);
    }
}

impl Validate for ContactPatch {
    fn check(&self, errors: &mut Vec<FieldError>) {
        not_null("clientId", &self.client_id, errors);
        patch_non_blank("name", &self.name, errors);
    }
}

impl Validate for NewMachine {
    const REQUIRED: &'static [&'static str] = &["clientId", "model", "serialNumber"];

    fn check(&self, errors: &mut Vec<FieldError>) {
        non_blank("model", &self.model, errors);
        non_blank("serialNumber", &self.serial_number, errors);
    }
}

impl Validate for MachinePatch {
    fn check(&self, errors: &mut Vec<FieldError>) {
        not_null("clientId", &self.client_id, errors);
        patch_non_blank("model", &self.model, errors);
        patch_non_blank("serialNumber", &self.serial_number, errors);
    }
}

impl Validate for NewReminder {
    const REQUIRED: &'static [&'static str] = &["clientId", "type", "dueDate"];

    fn check(&self, errors: &mut Vec<FieldError>) {
        non_blank("type", &self.kind, errors);
    }
}

impl Validate for ReminderPatch {
    fn check(&self, errors: &mut Vec<FieldError>) {
        not_null("clientId", &self.client_id, errors);
        patch_non_blank("type", &self.kind, errors);
        not_null("dueDate", &self.due_date, errors);
        not_null("isOverdue", &self.is_overdue, errors);
        not_null("completed", &self.completed, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn missing_required_fields_are_listed() {
        let errors = decode::<NewMachine>(json!({ "clientId": 1 })).unwrap_err();
        assert_eq!(fields(&errors), vec!["model", "serialNumber"]);
    }

    #[test]
    fn null_counts_as_missing_on_insert() {
        let errors = decode::<NewClient>(json!({ "name": null })).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("name", "Required")]);
    }

    #[test]
    fn blank_name_is_rejected() {
        let errors = decode::<NewContact>(json!({ "clientId": 1, "name": "  " })).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("name", "must not be empty")]);
    }

    #[test]
    fn bad_date_is_a_body_error() {
        let errors = decode::<NewReminder>(json!({
            "clientId": 1,
            "type": "Follow-up",
            "dueDate": "next tuesday"
        }))
        .unwrap_err();
        assert_eq!(fields(&errors), vec![BODY_FIELD]);
    }

    #[test]
    fn non_object_body_is_rejected() {
        let errors = decode::<ClientPatch>(json!([1, 2, 3])).unwrap_err();
        assert_eq!(errors[0].field, BODY_FIELD);
    }

    #[test]
    fn patch_allows_clearing_optional_fields_only() {
        let patch = decode::<ClientPatch>(json!({ "industry": null })).unwrap();
        assert_eq!(patch.industry, Some(None));

        let errors = decode::<ReminderPatch>(json!({ "completed": null, "type": "" })).unwrap_err();
        assert_eq!(fields(&errors), vec!["type", "completed"]);
    }

    #[test]
    fn empty_patch_is_valid() {
        assert!(decode::<MachinePatch>(json!({})).is_ok());
        assert!(decode::<ContactPatch>(json!({ "id": 5, "createdAt": "x" })).is_ok());
    }
}
