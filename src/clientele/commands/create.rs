use chrono::Utc;
use tracing::debug;

use crate::commands::{AddressDraft, CustomerDraft};
use crate::error::Result;
use crate::ids::IdGen;
use crate::model::{Address, Customer};
use crate::store::DataStore;

use super::helpers::check_unique_contact;

pub fn run<S: DataStore>(store: &mut S, ids: &IdGen, draft: CustomerDraft) -> Result<Customer> {
    check_unique_contact(store, &draft.email, &draft.phone, None)?;

    let mut addresses: Vec<Address> = draft
        .addresses
        .into_iter()
        .map(|a| a.into_address(ids.next_id()))
        .collect();
    if addresses.is_empty() {
        // A customer must always own at least one address
        addresses.push(AddressDraft::default().into_address(ids.next_id()));
    }

    let customer = Customer {
        id: ids.next_id(),
        first_name: draft.first_name,
        last_name: draft.last_name,
        email: draft.email,
        phone: draft.phone,
        created_at: Utc::now(),
        addresses,
    };
    store.save_customer(&customer)?;
    debug!(id = customer.id, "created customer");
    Ok(customer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn draft(email: &str, phone: &str) -> CustomerDraft {
        CustomerDraft {
            first_name: "Alan".into(),
            last_name: "Turing".into(),
            email: email.into(),
            phone: phone.into(),
            addresses: Vec::new(),
        }
    }

    #[test]
    fn assigns_id_and_creation_time() {
        let mut store = InMemoryStore::new();
        let ids = IdGen::starting_at(100);
        let created = run(&mut store, &ids, draft("alan@example.com", "5551112222")).unwrap();
        assert_eq!(created.id, 101);
        assert_eq!(store.get_customer(101).unwrap().email, "alan@example.com");
    }

    #[test]
    fn empty_draft_gets_a_placeholder_address() {
        let mut store = InMemoryStore::new();
        let ids = IdGen::starting_at(1);
        let created = run(&mut store, &ids, draft("alan@example.com", "5551112222")).unwrap();
        assert_eq!(created.num_addresses(), 1);
        assert!(created.addresses[0].street.is_empty());
    }

    #[test]
    fn supplied_addresses_get_ids() {
        let mut store = InMemoryStore::new();
        let ids = IdGen::starting_at(10);
        let mut d = draft("alan@example.com", "5551112222");
        d.addresses = vec![
            AddressDraft {
                street: "1 Bletchley Park".into(),
                city: "Milton Keynes".into(),
                ..AddressDraft::default()
            },
            AddressDraft {
                street: "2 King's Parade".into(),
                city: "Cambridge".into(),
                ..AddressDraft::default()
            },
        ];
        let created = run(&mut store, &ids, d).unwrap();
        assert_eq!(created.num_addresses(), 2);
        assert_eq!(created.addresses[0].id, 10);
        assert_eq!(created.addresses[1].id, 11);
    }

    #[test]
    fn duplicate_email_is_rejected_without_mutation() {
        let mut fixture = StoreFixture::seeded();
        let ids = IdGen::starting_at(100);
        let err = run(
            &mut fixture.store,
            &ids,
            draft("Jane.Smith@Example.com", "5550009999"),
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail(_)));
        assert_eq!(fixture.store.list_customers().unwrap().len(), 5);
    }

    #[test]
    fn duplicate_phone_is_rejected_without_mutation() {
        let mut fixture = StoreFixture::seeded();
        let ids = IdGen::starting_at(100);
        let err = run(
            &mut fixture.store,
            &ids,
            draft("fresh@example.com", "1234567890"),
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::DuplicatePhone(_)));
        assert_eq!(fixture.store.list_customers().unwrap().len(), 5);
    }
}
