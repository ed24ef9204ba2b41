//! The CRM entity store.
//!
//! Sole owner of in-memory entity state. It is responsible for:
//! 1.  Holding the Client, Contact, Machine and Reminder collections.
//! 2.  Assigning ids and creation timestamps.
//! 3.  Deriving the relational and reminder views (client details, overdue/upcoming).
//!
//! Relationships are by convention only: `clientId` is never checked on write and
//! deleting a client leaves its contacts, machines and reminders in place.

use crate::domain::model::sample;
use crate::domain::model::{
    Client, ClientOwned, ClientWithDetails, Contact, EntityId, Machine, Record, Reminder,
};
use crate::storage::Table;
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

/// Counters shown on the dashboard.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_clients: usize,
    /// Every machine on record; status fields are free text and not interpreted.
    pub active_machines: usize,
    pub overdue_follow_ups: usize,
    pub upcoming_follow_ups: usize,
}

/// Maps an entity type to its table inside the store.
pub trait Stored: Record {
    fn table(store: &EntityStore) -> &Table<Self>;
    fn table_mut(store: &mut EntityStore) -> &mut Table<Self>;
}

macro_rules! stored {
    ($ty:ty, $field:ident) => {
        impl Stored for $ty {
            fn table(store: &EntityStore) -> &Table<Self> {
                &store.$field
            }

            fn table_mut(store: &mut EntityStore) -> &mut Table<Self> {
                &mut store.$field
            }
        }
    };
}

stored!(Client, clients);
stored!(Contact, contacts);
stored!(Machine, machines);
stored!(Reminder, reminders);

#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    clients: Table<Client>,
    contacts: Table<Contact>,
    machines: Table<Machine>,
    reminders: Table<Reminder>,
}

impl EntityStore {
    /// An empty store; every id counter starts at 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the fixed sample rows.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        for client in sample::sample_clients() {
            store.create::<Client>(client);
        }
        for contact in sample::sample_contacts() {
            store.create::<Contact>(contact);
        }
        for machine in sample::sample_machines() {
            store.create::<Machine>(machine);
        }
        for reminder in sample::sample_reminders() {
            store.create::<Reminder>(reminder);
        }
        tracing::info!(
            clients = store.clients.len(),
            contacts = store.contacts.len(),
            machines = store.machines.len(),
            reminders = store.reminders.len(),
            "seeded entity store with sample data"
        );
        store
    }

    /// Every record of `T`, in insertion order.
    pub fn list<T: Stored>(&self) -> Vec<T> {
        T::table(self).list()
    }

    pub fn get<T: Stored>(&self, id: EntityId) -> Option<T> {
        T::table(self).get(id)
    }

    pub fn len<T: Stored>(&self) -> usize {
        T::table(self).len()
    }

    /// Assigns the next id, stamps `createdAt` with the current time and stores the record.
    pub fn create<T: Stored>(&mut self, insert: T::Insert) -> T {
        let row = T::table_mut(self).insert(insert, Utc::now());
        tracing::debug!(kind = T::KIND, id = row.id(), "created");
        row
    }

    /// Shallow-merges `patch` into the record; `None` when the id is unknown.
    pub fn update<T: Stored>(&mut self, id: EntityId, patch: T::Patch) -> Option<T> {
        let updated = T::table_mut(self).update(id, patch);
        tracing::debug!(kind = T::KIND, id, found = updated.is_some(), "updated");
        updated
    }

    /// Hard delete without cascade; `false` when the id is unknown.
    pub fn delete<T: Stored>(&mut self, id: EntityId) -> bool {
        let removed = T::table_mut(self).remove(id);
        tracing::debug!(kind = T::KIND, id, removed, "deleted");
        removed
    }

    /// Records whose `clientId` equals `client_id`. The client itself is not looked up.
    pub fn list_by_client<T: Stored + ClientOwned>(&self, client_id: EntityId) -> Vec<T> {
        T::table(self).filter(|row| row.client_id() == client_id)
    }

    pub fn client_with_details(&self, id: EntityId) -> Option<ClientWithDetails> {
        let client = self.clients.get(id)?;
        Some(ClientWithDetails {
            client,
            contacts: self.list_by_client(id),
            machines: self.list_by_client(id),
        })
    }

    /// Clients whose name or industry contains `term`, ignoring case.
    /// A blank term matches every client.
    pub fn search_clients(&self, term: &str) -> Vec<Client> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.clients.list();
        }
        self.clients.filter(|client| client.matches_search(&needle))
    }

    /// Open reminders flagged overdue.
    pub fn overdue_reminders(&self) -> Vec<Reminder> {
        self.reminders.filter(|r| r.is_open() && r.is_overdue)
    }

    /// Open reminders not flagged overdue.
    pub fn upcoming_reminders(&self) -> Vec<Reminder> {
        self.reminders.filter(|r| r.is_open() && !r.is_overdue)
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        DashboardStats {
            total_clients: self.clients.len(),
            active_machines: self.machines.len(),
            overdue_follow_ups: self.reminders.count(|r| r.is_open() && r.is_overdue),
            upcoming_follow_ups: self.reminders.count(|r| r.is_open() && !r.is_overdue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{NewClient, NewContact, NewMachine, NewReminder, ReminderPatch};
    use chrono::NaiveDate;

    fn reminder(client_id: EntityId, is_overdue: bool, completed: bool) -> NewReminder {
        NewReminder {
            client_id,
            kind: "Follow-up".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            is_overdue: Some(is_overdue),
            completed: Some(completed),
        }
    }

    #[test]
    fn sample_data_matches_seed_sizes() {
        let store = EntityStore::with_sample_data();
        assert_eq!(store.len::<Client>(), 6);
        assert_eq!(store.len::<Contact>(), 4);
        assert_eq!(store.len::<Machine>(), 4);
        assert_eq!(store.len::<Reminder>(), 6);
        assert_eq!(store.overdue_reminders().len(), 3);
        assert_eq!(store.upcoming_reminders().len(), 3);

        let techcorp = store.client_with_details(1).unwrap();
        assert_eq!(techcorp.contacts.len(), 2);
        assert_eq!(techcorp.machines.len(), 2);
    }

    #[test]
    fn views_partition_open_reminders() {
        let mut store = EntityStore::new();
        store.create::<Reminder>(reminder(1, true, false));
        store.create::<Reminder>(reminder(1, false, false));
        store.create::<Reminder>(reminder(2, true, true));
        store.create::<Reminder>(reminder(2, false, true));

        let overdue: Vec<EntityId> = store.overdue_reminders().iter().map(|r| r.id).collect();
        let upcoming: Vec<EntityId> = store.upcoming_reminders().iter().map(|r| r.id).collect();
        assert_eq!(overdue, vec![1]);
        assert_eq!(upcoming, vec![2]);
    }

    #[test]
    fn overdue_flag_is_not_derived_from_due_date() {
        let mut store = EntityStore::new();
        let past_due = store.create::<Reminder>(reminder(1, false, false));
        assert!(store.overdue_reminders().is_empty());
        assert_eq!(store.upcoming_reminders()[0].id, past_due.id);

        let patch = ReminderPatch {
            is_overdue: Some(Some(true)),
            ..Default::default()
        };
        store.update::<Reminder>(past_due.id, patch).unwrap();
        assert_eq!(store.overdue_reminders()[0].id, past_due.id);
    }

    #[test]
    fn deleting_a_client_does_not_cascade() {
        let mut store = EntityStore::new();
        let client = store.create::<Client>(NewClient {
            name: "Acme".to_string(),
            ..Default::default()
        });
        store.create::<Contact>(NewContact {
            client_id: client.id,
            name: "Jane".to_string(),
            ..Default::default()
        });
        store.create::<Machine>(NewMachine {
            client_id: client.id,
            model: "X200".to_string(),
            serial_number: "SN-1".to_string(),
            ..Default::default()
        });

        assert!(store.delete::<Client>(client.id));
        assert!(store.client_with_details(client.id).is_none());
        assert_eq!(store.list_by_client::<Contact>(client.id).len(), 1);
        assert_eq!(store.list_by_client::<Machine>(client.id).len(), 1);
    }

    #[test]
    fn search_is_case_insensitive_and_blank_matches_all() {
        let store = EntityStore::with_sample_data();
        let hits: Vec<String> = store
            .search_clients("MANUFACTURING")
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            hits,
            vec!["TechCorp Solutions", "Global Manufacturing", "Dynamic Systems"]
        );
        assert_eq!(store.search_clients("   ").len(), 6);
        assert!(store.search_clients("zzz").is_empty());
    }

    #[test]
    fn dashboard_counts_follow_store_contents() {
        let mut store = EntityStore::with_sample_data();
        let patch = ReminderPatch {
            completed: Some(Some(true)),
            ..Default::default()
        };
        store.update::<Reminder>(1, patch).unwrap();

        assert_eq!(
            store.dashboard_stats(),
            DashboardStats {
                total_clients: 6,
                active_machines: 4,
                overdue_follow_ups: 2,
                upcoming_follow_ups: 3,
            }
        );
    }
}
