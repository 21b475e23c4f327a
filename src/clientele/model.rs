use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

pub type CustomerId = u64;
pub type AddressId = u64;

/// A postal address, embedded in its owning customer. Addresses never exist
/// on their own; every address-level operation locates the owner first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub street2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub country: String,
}

impl Address {
    /// True when both addresses name the same location. Street2 and country
    /// are deliberately excluded: duplicate detection keys on
    /// (street, city, state, pincode) only.
    pub fn same_location(&self, other: &Address) -> bool {
        self.street == other.street
            && self.city == other.city
            && self.state == other.state
            && self.pincode == other.pincode
    }
}

/// A customer record. `numAddresses` is derived from the address list and is
/// emitted on serialization, never stored; there is no way for it to drift
/// from the live count.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub addresses: Vec<Address>,
}

impl Customer {
    pub fn num_addresses(&self) -> usize {
        self.addresses.len()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Serialize for Customer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Customer", 8)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("firstName", &self.first_name)?;
        state.serialize_field("lastName", &self.last_name)?;
        state.serialize_field("email", &self.email)?;
        state.serialize_field("phone", &self.phone)?;
        state.serialize_field("numAddresses", &self.num_addresses())?;
        state.serialize_field("createdAt", &self.created_at)?;
        state.serialize_field("addresses", &self.addresses)?;
        state.end()
    }
}
