use crate::error::Result;
use crate::model::{Customer, CustomerId};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: CustomerId) -> Result<Customer> {
    store.get_customer(id)
}
