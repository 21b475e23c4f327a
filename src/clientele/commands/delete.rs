use tracing::debug;

use crate::error::Result;
use crate::model::{Customer, CustomerId};
use crate::store::DataStore;

/// Remove a customer and return the removed record.
///
/// Deletion is unconditional: a customer goes away together with however
/// many addresses it owns. Note the asymmetry with
/// [`addresses::remove`](super::addresses::remove), which refuses to delete
/// a customer's last address. Both behaviors are kept as observed, pending
/// product clarification.
pub fn run<S: DataStore>(store: &mut S, id: CustomerId) -> Result<Customer> {
    let customer = store.get_customer(id)?;
    store.delete_customer(id)?;
    debug!(id, "deleted customer");
    Ok(customer)
}
