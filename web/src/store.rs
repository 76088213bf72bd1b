#[cfg(feature = "ssr")]
use serde_json::{Map, Value};
#[cfg(feature = "ssr")]
use shared_types::CustomerRecord;
#[cfg(feature = "ssr")]
use std::collections::HashMap;
#[cfg(feature = "ssr")]
use std::sync::{OnceLock, RwLock};

#[cfg(feature = "ssr")]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("customer {0} not found")]
    NotFound(i64),
    #[error("store already initialized")]
    AlreadyInitialized,
    #[error("rejected field data: {0}")]
    InvalidChange(#[from] serde_json::Error),
}

#[cfg(feature = "ssr")]
static STORE: OnceLock<RwLock<HashMap<i64, CustomerRecord>>> = OnceLock::new();

/// Seeds the record store. Called once from `main` before the server starts
/// taking requests.
#[cfg(feature = "ssr")]
pub fn init_store() -> Result<(), StoreError> {
    let mut records = HashMap::new();
    for record in seed_records() {
        records.insert(record.id, record);
    }

    STORE
        .set(RwLock::new(records))
        .map_err(|_| StoreError::AlreadyInitialized)
}

#[cfg(feature = "ssr")]
fn get_store() -> &'static RwLock<HashMap<i64, CustomerRecord>> {
    STORE
        .get()
        .expect("Record store not initialized. Call init_store() first.")
}

#[cfg(feature = "ssr")]
fn seed_records() -> Vec<CustomerRecord> {
    vec![
        CustomerRecord {
            id: 1,
            name: "María López".to_string(),
            email: "maria.lopez@example.com".to_string(),
            phone: "4555-0101".to_string(),
            vehicle: "Fiat Duna".to_string(),
            vehicle_year: 1994,
            notes: "Brakes due at next service".to_string(),
        },
        CustomerRecord {
            id: 2,
            name: "Jorge Paz".to_string(),
            email: "jorge.paz@example.com".to_string(),
            phone: "4555-0137".to_string(),
            vehicle: "Ford Falcon".to_string(),
            vehicle_year: 1979,
            notes: String::new(),
        },
        CustomerRecord {
            id: 3,
            name: "Marta Díaz".to_string(),
            email: "marta.diaz@example.com".to_string(),
            phone: "4555-0192".to_string(),
            vehicle: "Renault Clio".to_string(),
            vehicle_year: 1998,
            notes: "Prefers morning appointments".to_string(),
        },
    ]
}

#[cfg(feature = "ssr")]
pub fn list_customers() -> Vec<CustomerRecord> {
    let records = get_store().read().expect("record store lock poisoned");
    let mut customers: Vec<CustomerRecord> = records.values().cloned().collect();
    customers.sort_by_key(|record| record.id);
    customers
}

#[cfg(feature = "ssr")]
pub fn fetch_customer(id: i64) -> Result<CustomerRecord, StoreError> {
    let records = get_store().read().expect("record store lock poisoned");
    records.get(&id).cloned().ok_or(StoreError::NotFound(id))
}

/// Merges an allow-listed change map into a stored record and returns the
/// updated row. Keys outside `CustomerRecord::EDITABLE_FIELDS` are dropped
/// rather than rejected, so a stale client cannot fail the whole save.
#[cfg(feature = "ssr")]
pub fn update_customer_fields(
    id: i64,
    changes: &Map<String, Value>,
) -> Result<CustomerRecord, StoreError> {
    let mut records = get_store().write().expect("record store lock poisoned");
    let record = records.get_mut(&id).ok_or(StoreError::NotFound(id))?;

    let updated = merge_record(record, changes)?;
    *record = updated.clone();
    Ok(updated)
}

#[cfg(feature = "ssr")]
fn merge_record(
    record: &CustomerRecord,
    changes: &Map<String, Value>,
) -> Result<CustomerRecord, StoreError> {
    let mut value = serde_json::to_value(record)?;
    let fields = value
        .as_object_mut()
        .expect("record serializes to an object");

    for (key, change) in changes {
        if CustomerRecord::EDITABLE_FIELDS.contains(&key.as_str()) {
            fields.insert(key.clone(), change.clone());
        }
    }

    Ok(serde_json::from_value(value)?)
}
