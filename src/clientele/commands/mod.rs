use serde::Deserialize;

use crate::model::{Address, AddressId, CustomerId};

pub mod addresses;
pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod search;
pub mod update;

/// Input for creating a customer. The store assigns id and creation time;
/// a draft without addresses gets a single empty placeholder so the
/// at-least-one-address rule holds from birth.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub addresses: Vec<AddressDraft>,
}

/// Partial update for a customer. Absent fields keep their current value;
/// a present address list replaces the whole list and must be non-empty
/// and free of same-location duplicates.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    pub id: CustomerId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub addresses: Option<Vec<Address>>,
}

/// Input for a new address; the store assigns the id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDraft {
    pub street: String,
    pub street2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub country: String,
}

impl AddressDraft {
    pub fn into_address(self, id: AddressId) -> Address {
        Address {
            id,
            street: self.street,
            street2: self.street2,
            city: self.city,
            state: self.state,
            pincode: self.pincode,
            country: self.country,
        }
    }
}

/// Partial update for an address. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPatch {
    pub street: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub country: Option<String>,
}
