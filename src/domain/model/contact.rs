use super::{merge_nullable, merge_required, present, ClientOwned, EntityId, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: EntityId,
    pub client_id: EntityId,
    pub name: String,
    pub position: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub client_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPatch {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<u64>)]
    pub client_id: Option<Option<EntityId>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub position: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
}

impl ClientOwned for Contact {
    fn client_id(&self) -> EntityId {
        self.client_id
    }
}

impl Record for Contact {
    type Insert = NewContact;
    type Patch = ContactPatch;

    const KIND: &'static str = "Contact";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_insert(id: EntityId, created_at: DateTime<Utc>, insert: NewContact) -> Self {
        Self {
            id,
            client_id: insert.client_id,
            name: insert.name,
            position: insert.position,
            email: insert.email,
            phone: insert.phone,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: ContactPatch) {
        merge_required(&mut self.client_id, patch.client_id);
        merge_required(&mut self.name, patch.name);
        merge_nullable(&mut self.position, patch.position);
        merge_nullable(&mut self.email, patch.email);
        merge_nullable(&mut self.phone, patch.phone);
    }
}
