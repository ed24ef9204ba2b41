use super::{merge_nullable, merge_required, present, ClientOwned, EntityId, Record};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A piece of equipment sold to a client.
///
/// `warrantyStatus` and `amcStatus` are free text ("Under Warranty", "Expiring Soon",
/// "Expired", ...); nothing interprets them server-side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    pub id: EntityId,
    pub client_id: EntityId,
    pub model: String,
    pub serial_number: String,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_status: Option<String>,
    pub amc_status: Option<String>,
    pub insurance_valid_until: Option<NaiveDate>,
    pub last_contacted: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMachine {
    pub client_id: EntityId,
    pub model: String,
    pub serial_number: String,
    #[serde(default)]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default)]
    pub warranty_status: Option<String>,
    #[serde(default)]
    pub amc_status: Option<String>,
    #[serde(default)]
    pub insurance_valid_until: Option<NaiveDate>,
    #[serde(default)]
    pub last_contacted: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MachinePatch {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<u64>)]
    pub client_id: Option<Option<EntityId>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub model: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub serial_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, format = Date)]
    pub purchase_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub warranty_status: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub amc_status: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, format = Date)]
    pub insurance_valid_until: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, format = Date)]
    pub last_contacted: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

impl ClientOwned for Machine {
    fn client_id(&self) -> EntityId {
        self.client_id
    }
}

impl Record for Machine {
    type Insert = NewMachine;
    type Patch = MachinePatch;

    const KIND: &'static str = "Machine";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_insert(id: EntityId, created_at: DateTime<Utc>, insert: NewMachine) -> Self {
        Self {
            id,
            client_id: insert.client_id,
            model: insert.model,
            serial_number: insert.serial_number,
            purchase_date: insert.purchase_date,
            warranty_status: insert.warranty_status,
            amc_status: insert.amc_status,
            insurance_valid_until: insert.insurance_valid_until,
            last_contacted: insert.last_contacted,
            notes: insert.notes,
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: MachinePatch) {
        merge_required(&mut self.client_id, patch.client_id);
        merge_required(&mut self.model, patch.model);
        merge_required(&mut self.serial_number, patch.serial_number);
        merge_nullable(&mut self.purchase_date, patch.purchase_date);
        merge_nullable(&mut self.warranty_status, patch.warranty_status);
        merge_nullable(&mut self.amc_status, patch.amc_status);
        merge_nullable(&mut self.insurance_valid_until, patch.insurance_valid_until);
        merge_nullable(&mut self.last_contacted, patch.last_contacted);
        merge_nullable(&mut self.notes, patch.notes);
    }
}
