use super::{merge_required, present, EntityId, Record};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A dated follow-up for a client.
///
/// `isOverdue` is a stored flag set by the caller; it is never recomputed from
/// `dueDate`, so a reminder only moves between the overdue and upcoming views when
/// it is explicitly updated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: EntityId,
    pub client_id: EntityId,
    #[serde(rename = "type")]
    pub kind: String,
    pub due_date: NaiveDate,
    pub is_overdue: bool,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewReminder {
    pub client_id: EntityId,
    #[serde(rename = "type")]
    pub kind: String,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub is_overdue: Option<bool>,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReminderPatch {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<u64>)]
    pub client_id: Option<Option<EntityId>>,
    #[serde(rename = "type", default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub kind: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<bool>)]
    pub is_overdue: Option<Option<bool>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<bool>)]
    pub completed: Option<Option<bool>>,
}

impl Reminder {
    pub fn is_open(&self) -> bool {
        !self.completed
    }
}

impl Record for Reminder {
    type Insert = NewReminder;
    type Patch = ReminderPatch;

    const KIND: &'static str = "Reminder";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_insert(id: EntityId, created_at: DateTime<Utc>, insert: NewReminder) -> Self {
        Self {
            id,
            client_id: insert.client_id,
            kind: insert.kind,
            due_date: insert.due_date,
            is_overdue: insert.is_overdue.unwrap_or(false),
            completed: insert.completed.unwrap_or(false),
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: ReminderPatch) {
        merge_required(&mut self.client_id, patch.client_id);
        merge_required(&mut self.kind, patch.kind);
        merge_required(&mut self.due_date, patch.due_date);
        merge_required(&mut self.is_overdue, patch.is_overdue);
        merge_required(&mut self.completed, patch.completed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_is_renamed_on_the_wire() {
        let insert: NewReminder = serde_json::from_value(serde_json::json!({
            "clientId": 1,
            "type": "AMC Renewal",
            "dueDate": "2024-12-15"
        }))
        .unwrap();
        let reminder = Reminder::from_insert(7, Utc::now(), insert);
        assert_eq!(reminder.kind, "AMC Renewal");
        assert!(!reminder.is_overdue);
        assert!(!reminder.completed);

        let json = serde_json::to_value(&reminder).unwrap();
        assert_eq!(json["type"], "AMC Renewal");
        assert_eq!(json["dueDate"], "2024-12-15");
    }

    #[test]
    fn patch_keeps_created_at_and_id() {
        let created_at = Utc::now();
        let mut reminder = Reminder::from_insert(
            3,
            created_at,
            NewReminder {
                client_id: 1,
                kind: "Follow-up".to_string(),
                due_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                is_overdue: Some(true),
                completed: None,
            },
        );
        let patch: ReminderPatch =
            serde_json::from_str(r#"{"completed":true,"id":99,"createdAt":"2000-01-01T00:00:00Z"}"#)
                .unwrap();
        reminder.apply_patch(patch);
        assert!(reminder.completed);
        assert!(reminder.is_overdue);
        assert_eq!(reminder.id, 3);
        assert_eq!(reminder.created_at, created_at);
    }
}
