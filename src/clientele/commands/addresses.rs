use tracing::debug;

use crate::commands::{AddressDraft, AddressPatch};
use crate::error::{Result, StoreError};
use crate::ids::IdGen;
use crate::model::{Address, AddressId, CustomerId};
use crate::store::DataStore;

use super::helpers::{check_unique_address, find_owner};

pub fn list<S: DataStore>(store: &S, customer_id: CustomerId) -> Result<Vec<Address>> {
    Ok(store.get_customer(customer_id)?.addresses)
}

pub fn get<S: DataStore>(store: &S, address_id: AddressId) -> Result<Address> {
    let owner = find_owner(store, address_id)?;
    owner
        .addresses
        .into_iter()
        .find(|a| a.id == address_id)
        .ok_or(StoreError::AddressNotFound(address_id))
}

pub fn add<S: DataStore>(
    store: &mut S,
    ids: &IdGen,
    customer_id: CustomerId,
    draft: AddressDraft,
) -> Result<Address> {
    let mut customer = store.get_customer(customer_id)?;
    let address = draft.into_address(ids.next_id());
    check_unique_address(&customer.addresses, &address, None)?;

    customer.addresses.push(address.clone());
    store.save_customer(&customer)?;
    debug!(customer_id, address_id = address.id, "added address");
    Ok(address)
}

pub fn update<S: DataStore>(
    store: &mut S,
    address_id: AddressId,
    patch: AddressPatch,
) -> Result<Address> {
    let mut customer = find_owner(store, address_id)?;
    let position = customer
        .addresses
        .iter()
        .position(|a| a.id == address_id)
        .ok_or(StoreError::AddressNotFound(address_id))?;

    let mut merged = customer.addresses[position].clone();
    if let Some(street) = patch.street {
        merged.street = street;
    }
    if let Some(street2) = patch.street2 {
        merged.street2 = Some(street2);
    }
    if let Some(city) = patch.city {
        merged.city = city;
    }
    if let Some(state) = patch.state {
        merged.state = state;
    }
    if let Some(pincode) = patch.pincode {
        merged.pincode = pincode;
    }
    if let Some(country) = patch.country {
        merged.country = country;
    }

    check_unique_address(&customer.addresses, &merged, Some(address_id))?;

    customer.addresses[position] = merged.clone();
    store.save_customer(&customer)?;
    debug!(customer_id = customer.id, address_id, "updated address");
    Ok(merged)
}

/// Remove an address, unless it is the owner's last one: every customer
/// keeps at least one address.
pub fn remove<S: DataStore>(store: &mut S, address_id: AddressId) -> Result<()> {
    let mut customer = find_owner(store, address_id)?;
    if customer.addresses.len() == 1 {
        return Err(StoreError::LastAddress(customer.id));
    }

    customer.addresses.retain(|a| a.id != address_id);
    store.save_customer(&customer)?;
    debug!(customer_id = customer.id, address_id, "removed address");
    Ok(())
}
