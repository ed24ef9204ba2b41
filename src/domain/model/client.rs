use super::{merge_nullable, merge_required, present, Contact, EntityId, Machine, Record};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status assigned to a client created without one.
pub const DEFAULT_CLIENT_STATUS: &str = "Active";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    pub industry: Option<String>,
    pub last_contacted: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub last_contacted: Option<NaiveDate>,
    /// Defaults to "Active" when absent or null.
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientPatch {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub industry: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>, format = Date)]
    pub last_contacted: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub status: Option<Option<String>>,
}

/// A client joined with every contact and machine that references it.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ClientWithDetails {
    #[serde(flatten)]
    pub client: Client,
    pub contacts: Vec<Contact>,
    pub machines: Vec<Machine>,
}

impl Client {
    /// Case-insensitive substring match on name or industry.
    pub fn matches_search(&self, needle_lowercase: &str) -> bool {
        self.name.to_lowercase().contains(needle_lowercase)
            || self
                .industry
                .as_deref()
                .is_some_and(|industry| industry.to_lowercase().contains(needle_lowercase))
    }
}

impl Record for Client {
    type Insert = NewClient;
    type Patch = ClientPatch;

    const KIND: &'static str = "Client";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_insert(id: EntityId, created_at: DateTime<Utc>, insert: NewClient) -> Self {
        Self {
            id,
            name: insert.name,
            industry: insert.industry,
            last_contacted: insert.last_contacted,
            status: insert
                .status
                .unwrap_or_else(|| DEFAULT_CLIENT_STATUS.to_string()),
            created_at,
        }
    }

    fn apply_patch(&mut self, patch: ClientPatch) {
        merge_required(&mut self.name, patch.name);
        merge_nullable(&mut self.industry, patch.industry);
        merge_nullable(&mut self.last_contacted, patch.last_contacted);
        merge_required(&mut self.status, patch.status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Client {
        Client::from_insert(
            1,
            Utc::now(),
            NewClient {
                name: "Acme".to_string(),
                industry: Some("Tech".to_string()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn status_defaults_to_active() {
        assert_eq!(acme().status, "Active");
    }

    #[test]
    fn search_matches_name_or_industry_ignoring_case() {
        let client = acme();
        assert!(client.matches_search("acm"));
        assert!(client.matches_search("tech"));
        assert!(!client.matches_search("steel"));
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_value(acme()).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("lastContacted").unwrap().is_null());
    }
}
