//! Domain model definitions for the CRM entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

pub mod client;
pub mod contact;
pub mod machine;
pub mod reminder;
pub mod sample;

pub use client::{Client, ClientPatch, ClientWithDetails, NewClient};
pub use contact::{Contact, ContactPatch, NewContact};
pub use machine::{Machine, MachinePatch, NewMachine};
pub use reminder::{NewReminder, Reminder, ReminderPatch};

/// Process-assigned identifier, unique per entity type.
pub type EntityId = u64;

/// Trait that defines the contract for any stored entity.
///
/// The store works with any record through this trait without knowing its fields.
/// Each entity provides:
/// - the insert shape the caller supplies on create
/// - the partial shape used for updates
/// - how to build a record from an insert and how to merge a patch into it
pub trait Record: Clone + Send + Sync + 'static {
    /// Fields supplied by the caller on create (everything except id and createdAt).
    type Insert;

    /// Partial fields for update. Absent fields leave the record untouched.
    type Patch;

    /// Human readable entity name, used in log lines and error messages.
    const KIND: &'static str;

    fn id(&self) -> EntityId;

    /// Builds the stored record from caller fields plus server-assigned id and timestamp.
    fn from_insert(id: EntityId, created_at: DateTime<Utc>, insert: Self::Insert) -> Self;

    /// Shallow merge: fields present in the patch overwrite, the rest are kept.
    /// Implementations must never touch `id` or `createdAt`.
    fn apply_patch(&mut self, patch: Self::Patch);
}

/// Records that belong to a client through `clientId`.
pub trait ClientOwned {
    fn client_id(&self) -> EntityId;
}

/// Distinguishes "field absent" (`None`) from "field sent as null" (`Some(None)`).
///
/// Use together with `#[serde(default)]` so that a missing key stays `None`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Overwrites `slot` when a value was sent for a nullable field.
pub(crate) fn merge_nullable<T>(slot: &mut Option<T>, value: Option<Option<T>>) {
    if let Some(v) = value {
        *slot = v;
    }
}

/// Overwrites `slot` when a non-null value was sent for a required field.
///
/// Explicit nulls for required fields are rejected by the validation layer; if one
/// slips through it is treated as absent.
pub(crate) fn merge_required<T>(slot: &mut T, value: Option<Option<T>>) {
    if let Some(Some(v)) = value {
        *slot = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "present")]
        field: Option<Option<String>>,
    }

    #[test]
    fn present_distinguishes_missing_from_null() {
        let missing: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.field, None);

        let null: Probe = serde_json::from_str(r#"{"field":null}"#).unwrap();
        assert_eq!(null.field, Some(None));

        let set: Probe = serde_json::from_str(r#"{"field":"x"}"#).unwrap();
        assert_eq!(set.field, Some(Some("x".to_string())));
    }

    #[test]
    fn merge_helpers_respect_absence() {
        let mut nullable = Some("a".to_string());
        merge_nullable(&mut nullable, None);
        assert_eq!(nullable.as_deref(), Some("a"));
        merge_nullable(&mut nullable, Some(None));
        assert_eq!(nullable, None);

        let mut required = "a".to_string();
        merge_required(&mut required, Some(None));
        assert_eq!(required, "a");
        merge_required(&mut required, Some(Some("b".to_string())));
        assert_eq!(required, "b");
    }
}
