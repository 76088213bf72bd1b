use leptos::prelude::*;
use leptos::server;
use serde_json::{Map, Value};
use shared_types::CustomerRecord;

#[server]
pub async fn get_customers() -> Result<Vec<CustomerRecord>, ServerFnError> {
    Ok(crate::store::list_customers())
}

#[server]
pub async fn get_customer(id: i64) -> Result<CustomerRecord, ServerFnError> {
    match crate::store::fetch_customer(id) {
        Ok(record) => Ok(record),
        Err(e) => Err(ServerFnError::new(format!("Store error: {}", e))),
    }
}

/// Applies a partial update to a customer record. `changes` carries only the
/// fields the client detected as changed, keyed by field name.
#[server]
pub async fn update_customer(
    id: i64,
    changes: Map<String, Value>,
) -> Result<CustomerRecord, ServerFnError> {
    tracing::info!("updating customer {} ({} field(s))", id, changes.len());

    match crate::store::update_customer_fields(id, &changes) {
        Ok(record) => Ok(record),
        Err(e) => Err(ServerFnError::new(format!("Store error: {}", e))),
    }
}
