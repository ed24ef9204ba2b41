//! Ordered in-memory table with a monotonic id counter.

use crate::domain::model::{EntityId, Record};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// One entity collection.
///
/// Ids are handed out from `next_id` and never reused, so ascending key order in the
/// map is also insertion order.
#[derive(Debug, Clone)]
pub struct Table<T: Record> {
    rows: BTreeMap<EntityId, T>,
    next_id: EntityId,
}

impl<T: Record> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// All rows in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    pub fn get(&self, id: EntityId) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    /// Rows matching `pred`, in insertion order.
    pub fn filter<F>(&self, mut pred: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        self.rows.values().filter(|row| pred(row)).cloned().collect()
    }

    pub fn count<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.rows.values().filter(|row| pred(row)).count()
    }

    pub fn insert(&mut self, insert: T::Insert, created_at: DateTime<Utc>) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = T::from_insert(id, created_at, insert);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn update(&mut self, id: EntityId, patch: T::Patch) -> Option<T> {
        let row = self.rows.get_mut(&id)?;
        row.apply_patch(patch);
        Some(row.clone())
    }

    pub fn remove(&mut self, id: EntityId) -> bool {
        self.rows.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The id the next insert will receive.
    pub fn next_id(&self) -> EntityId {
        self.next_id
    }
}

impl<T: Record> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Contact, ContactPatch, NewContact};

    fn contact(client_id: EntityId, name: &str) -> NewContact {
        NewContact {
            client_id,
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn ids_start_at_one_and_are_not_reused() {
        let mut table: Table<Contact> = Table::new();
        let a = table.insert(contact(1, "a"), Utc::now());
        let b = table.insert(contact(1, "b"), Utc::now());
        assert_eq!((a.id, b.id), (1, 2));

        assert!(table.remove(b.id));
        let c = table.insert(contact(1, "c"), Utc::now());
        assert_eq!(c.id, 3);
        assert_eq!(table.next_id(), 4);
    }

    #[test]
    fn list_keeps_insertion_order_after_updates() {
        let mut table: Table<Contact> = Table::new();
        for name in ["first", "second", "third"] {
            table.insert(contact(1, name), Utc::now());
        }
        let patch = ContactPatch {
            name: Some(Some("FIRST".to_string())),
            ..Default::default()
        };
        table.update(1, patch).unwrap();

        let names: Vec<String> = table.list().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["FIRST", "second", "third"]);
    }

    #[test]
    fn unknown_ids_are_absent_not_errors() {
        let mut table: Table<Contact> = Table::new();
        table.insert(contact(1, "a"), Utc::now());

        assert!(table.get(42).is_none());
        assert!(table.update(42, ContactPatch::default()).is_none());
        assert!(!table.remove(42));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn empty_patch_leaves_row_identical() {
        let mut table: Table<Contact> = Table::new();
        let created = table.insert(contact(5, "Jane"), Utc::now());
        let updated = table.update(created.id, ContactPatch::default()).unwrap();
        assert_eq!(created, updated);
    }

    #[test]
    fn filter_and_count_agree() {
        let mut table: Table<Contact> = Table::new();
        table.insert(contact(1, "a"), Utc::now());
        table.insert(contact(2, "b"), Utc::now());
        table.insert(contact(1, "c"), Utc::now());

        let owned = table.filter(|c| c.client_id == 1);
        assert_eq!(owned.len(), table.count(|c| c.client_id == 1));
        assert_eq!(owned.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 3]);
    }
}
