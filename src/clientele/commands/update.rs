use tracing::debug;

use crate::commands::CustomerPatch;
use crate::error::{Result, StoreError};
use crate::model::Customer;
use crate::store::DataStore;

use super::helpers::{check_unique_address, check_unique_contact};

pub fn run<S: DataStore>(store: &mut S, patch: CustomerPatch) -> Result<Customer> {
    let mut customer = store.get_customer(patch.id)?;

    // Re-check uniqueness against everyone else before touching the record
    let email = patch.email.as_deref().unwrap_or(&customer.email);
    let phone = patch.phone.as_deref().unwrap_or(&customer.phone);
    check_unique_contact(store, email, phone, Some(patch.id))?;

    // A replacement address list must uphold the same rules the address
    // operations enforce: never empty, no two entries at one location
    if let Some(addresses) = &patch.addresses {
        if addresses.is_empty() {
            return Err(StoreError::LastAddress(patch.id));
        }
        for (i, address) in addresses.iter().enumerate() {
            check_unique_address(&addresses[..i], address, None)?;
        }
    }

    if let Some(first_name) = patch.first_name {
        customer.first_name = first_name;
    }
    if let Some(last_name) = patch.last_name {
        customer.last_name = last_name;
    }
    if let Some(email) = patch.email {
        customer.email = email;
    }
    if let Some(phone) = patch.phone {
        customer.phone = phone;
    }
    if let Some(addresses) = patch.addresses {
        customer.addresses = addresses;
    }

    store.save_customer(&customer)?;
    debug!(id = customer.id, "updated customer");
    Ok(customer)
}
