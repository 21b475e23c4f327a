use super::DataStore;
use crate::error::{Result, StoreError};
use crate::model::{Customer, CustomerId};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    customers: HashMap<CustomerId, Customer>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_customer(&mut self, customer: &Customer) -> Result<()> {
        self.customers.insert(customer.id, customer.clone());
        Ok(())
    }

    fn get_customer(&self, id: CustomerId) -> Result<Customer> {
        self.customers
            .get(&id)
            .cloned()
            .ok_or(StoreError::CustomerNotFound(id))
    }

    fn list_customers(&self) -> Result<Vec<Customer>> {
        Ok(self.customers.values().cloned().collect())
    }

    fn delete_customer(&mut self, id: CustomerId) -> Result<()> {
        if self.customers.remove(&id).is_none() {
            return Err(StoreError::CustomerNotFound(id));
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Address;
    use chrono::{DateTime, Utc};

    fn at(ts: &str) -> DateTime<Utc> {
        ts.parse().unwrap()
    }

    fn addr(
        id: u64,
        street: &str,
        street2: Option<&str>,
        city: &str,
        state: &str,
        pincode: &str,
    ) -> Address {
        Address {
            id,
            street: street.into(),
            street2: street2.map(Into::into),
            city: city.into(),
            state: state.into(),
            pincode: pincode.into(),
            country: "USA".into(),
        }
    }

    fn customer(
        id: u64,
        first: &str,
        last: &str,
        phone: &str,
        email: &str,
        created: &str,
        addresses: Vec<Address>,
    ) -> Customer {
        Customer {
            id,
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            phone: phone.into(),
            created_at: at(created),
            addresses,
        }
    }

    /// The canonical five-customer demo data set.
    pub fn demo_customers() -> Vec<Customer> {
        vec![
            customer(
                1,
                "John",
                "Doe",
                "1234567890",
                "john.doe@example.com",
                "2024-01-15T10:30:00Z",
                vec![
                    addr(1, "123 Main St", Some("Apt 4B"), "New York", "NY", "10001"),
                    addr(2, "456 Oak Ave", None, "Brooklyn", "NY", "11201"),
                ],
            ),
            customer(
                2,
                "Jane",
                "Smith",
                "0987654321",
                "jane.smith@example.com",
                "2024-01-16T11:20:00Z",
                vec![addr(3, "789 Pine Rd", None, "Los Angeles", "CA", "90001")],
            ),
            customer(
                3,
                "Robert",
                "Johnson",
                "5551234567",
                "robert.j@example.com",
                "2024-01-17T09:15:00Z",
                vec![
                    addr(4, "101 Maple St", Some("Suite 200"), "Chicago", "IL", "60601"),
                    addr(5, "202 Birch Ln", None, "Evanston", "IL", "60201"),
                ],
            ),
            customer(
                4,
                "Maria",
                "Garcia",
                "5559876543",
                "maria.g@example.com",
                "2024-01-18T14:45:00Z",
                vec![addr(6, "303 Cedar Ave", Some("Apt 5C"), "Miami", "FL", "33101")],
            ),
            customer(
                5,
                "David",
                "Wilson",
                "5554567890",
                "david.w@example.com",
                "2024-01-19T16:30:00Z",
                vec![
                    addr(7, "404 Elm St", None, "Boston", "MA", "02101"),
                    addr(8, "505 Oak Dr", Some("Unit B"), "Cambridge", "MA", "02138"),
                    addr(9, "606 Pine Cir", None, "Quincy", "MA", "02169"),
                ],
            ),
        ]
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// A store seeded with the demo data set.
        pub fn seeded() -> Self {
            let mut fixture = Self::new();
            for customer in demo_customers() {
                fixture.store.save_customer(&customer).unwrap();
            }
            fixture
        }
    }
}
