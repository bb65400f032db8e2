//! In-memory store implementing every repository trait.
//!
//! Backs unit tests, server tests and doc examples. Each family has its own
//! table with its own id sequence so ids stay predictable per family.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use models::{
    buyer, carrier, employee, inbound_order, locality, product, product_batch, product_record, product_type, province,
    purchase_order, section, seller, warehouse,
};

use crate::errors::ServiceError;

pub(crate) struct Table<M> {
    rows: BTreeMap<i64, M>,
    last_id: i64,
}

impl<M> Default for Table<M> {
    fn default() -> Self { Self { rows: BTreeMap::new(), last_id: 0 } }
}

impl<M: Clone> Table<M> {
    /// Assign the next id (never reused) and store the row built from it.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(i64) -> M) -> M {
        self.last_id += 1;
        let row = build(self.last_id);
        self.rows.insert(self.last_id, row.clone());
        row
    }

    pub(crate) fn get(&self, id: i64) -> Option<M> { self.rows.get(&id).cloned() }

    pub(crate) fn contains(&self, id: i64) -> bool { self.rows.contains_key(&id) }

    pub(crate) fn any(&self, pred: impl Fn(&M) -> bool) -> bool { self.rows.values().any(pred) }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &M> { self.rows.values() }

    pub(crate) fn list(&self) -> Vec<M> { self.rows.values().cloned().collect() }

    /// Overwrite an existing row; `None` when the id is not live.
    pub(crate) fn replace(&mut self, id: i64, row: M) -> Option<M> {
        let slot = self.rows.get_mut(&id)?;
        *slot = row.clone();
        Some(row)
    }

    pub(crate) fn remove(&mut self, id: i64) -> bool { self.rows.remove(&id).is_some() }
}

#[derive(Default)]
pub(crate) struct Tables {
    pub(crate) provinces: Table<province::Model>,
    pub(crate) product_types: Table<product_type::Model>,
    pub(crate) localities: Table<locality::Model>,
    pub(crate) warehouses: Table<warehouse::Model>,
    pub(crate) sections: Table<section::Model>,
    pub(crate) sellers: Table<seller::Model>,
    pub(crate) products: Table<product::Model>,
    pub(crate) product_batches: Table<product_batch::Model>,
    pub(crate) product_records: Table<product_record::Model>,
    pub(crate) carriers: Table<carrier::Model>,
    pub(crate) buyers: Table<buyer::Model>,
    pub(crate) employees: Table<employee::Model>,
    pub(crate) inbound_orders: Table<inbound_order::Model>,
    pub(crate) purchase_orders: Table<purchase_order::Model>,
}

/// Shared in-process tables behind one mutex.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    unavailable: Mutex<bool>,
}

impl MemoryStore {
    pub fn new() -> Self { Self::default() }

    /// Store pre-populated with the same provinces and product types the
    /// schema migration seeds.
    pub fn seeded() -> Self {
        let store = Self::new();
        if let Ok(mut t) = store.tables.lock() {
            for (name, country) in SEED_PROVINCES {
                t.provinces.insert_with(|id| province::Model {
                    id,
                    province_name: name.to_string(),
                    country_name: country.to_string(),
                });
            }
            for description in SEED_PRODUCT_TYPES {
                t.product_types.insert_with(|id| product_type::Model { id, description: description.to_string() });
            }
        }
        store
    }

    pub fn add_province(&self, province_name: &str, country_name: &str) -> Result<province::Model, ServiceError> {
        let mut t = self.tables()?;
        Ok(t.provinces.insert_with(|id| province::Model {
            id,
            province_name: province_name.to_string(),
            country_name: country_name.to_string(),
        }))
    }

    pub fn add_product_type(&self, description: &str) -> Result<product_type::Model, ServiceError> {
        let mut t = self.tables()?;
        Ok(t.product_types.insert_with(|id| product_type::Model { id, description: description.to_string() }))
    }

    /// Make every subsequent access fail with `Storage`, like a lost connection.
    pub fn set_unavailable(&self, down: bool) {
        if let Ok(mut flag) = self.unavailable.lock() {
            *flag = down;
        }
    }

    pub(crate) fn tables(&self) -> Result<MutexGuard<'_, Tables>, ServiceError> {
        let down = self.unavailable.lock().map(|f| *f).map_err(ServiceError::storage)?;
        if down {
            return Err(ServiceError::storage("memory store unavailable"));
        }
        self.tables.lock().map_err(ServiceError::storage)
    }
}

const SEED_PROVINCES: [(&str, &str); 6] = [
    ("Buenos Aires", "Argentina"),
    ("Cordoba", "Argentina"),
    ("Santa Fe", "Argentina"),
    ("Mendoza", "Argentina"),
    ("Sao Paulo", "Brasil"),
    ("Antioquia", "Colombia"),
];

const SEED_PRODUCT_TYPES: [&str; 4] = ["frozen", "refrigerated", "fresh", "dry"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut table: Table<String> = Table::default();
        let a = table.insert_with(|id| format!("row-{id}"));
        assert!(table.remove(1));
        let b = table.insert_with(|id| format!("row-{id}"));
        assert_eq!((a.as_str(), b.as_str()), ("row-1", "row-2"));
        assert!(!table.contains(1));
    }

    #[test]
    fn replace_requires_live_row() {
        let mut table: Table<i32> = Table::default();
        assert_eq!(table.replace(1, 5), None);
        table.insert_with(|_| 1);
        assert_eq!(table.replace(1, 5), Some(5));
        assert_eq!(table.get(1), Some(5));
    }

    #[test]
    fn unavailable_store_fails_with_storage() {
        let store = MemoryStore::seeded();
        store.set_unavailable(true);
        assert!(matches!(store.tables(), Err(ServiceError::Storage(_))));
        store.set_unavailable(false);
        assert_eq!(store.tables().map(|t| t.provinces.list().len()).ok(), Some(6));
    }
}
