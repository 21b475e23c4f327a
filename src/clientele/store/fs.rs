use super::DataStore;
use crate::error::{Result, StoreError};
use crate::model::{Customer, CustomerId};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

const DATA_FILENAME: &str = "customers.json";

/// File-backed storage: the whole collection lives in one customers.json.
///
/// The collection is small by design, so read-modify-write of the full file
/// keeps every save atomic at the record level without an index file.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StoreError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<HashMap<CustomerId, Customer>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(data_file).map_err(StoreError::Io)?;
        let customers: HashMap<CustomerId, Customer> =
            serde_json::from_str(&content).map_err(StoreError::Serialization)?;
        Ok(customers)
    }

    fn persist(&self, customers: &HashMap<CustomerId, Customer>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(customers).map_err(StoreError::Serialization)?;
        fs::write(self.data_file(), content).map_err(StoreError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn save_customer(&mut self, customer: &Customer) -> Result<()> {
        let mut customers = self.load()?;
        customers.insert(customer.id, customer.clone());
        self.persist(&customers)?;
        debug!(id = customer.id, "saved customer");
        Ok(())
    }

    fn get_customer(&self, id: CustomerId) -> Result<Customer> {
        self.load()?
            .remove(&id)
            .ok_or(StoreError::CustomerNotFound(id))
    }

    fn list_customers(&self) -> Result<Vec<Customer>> {
        Ok(self.load()?.into_values().collect())
    }

    fn delete_customer(&mut self, id: CustomerId) -> Result<()> {
        let mut customers = self.load()?;
        if customers.remove(&id).is_none() {
            return Err(StoreError::CustomerNotFound(id));
        }
        self.persist(&customers)?;
        debug!(id, "deleted customer");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Address;
    use chrono::Utc;

    fn sample(id: CustomerId) -> Customer {
        Customer {
            id,
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: format!("grace{}@example.com", id),
            phone: format!("555000{:04}", id),
            created_at: Utc::now(),
            addresses: vec![Address {
                id: id * 10,
                street: "1 Navy Way".into(),
                city: "Arlington".into(),
                state: "VA".into(),
                pincode: "22202".into(),
                country: "USA".into(),
                ..Address::default()
            }],
        }
    }

    #[test]
    fn save_and_reload_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save_customer(&sample(1)).unwrap();

        // A fresh instance over the same directory sees the record
        let reopened = FileStore::new(dir.path().to_path_buf());
        let loaded = reopened.get_customer(1).unwrap();
        assert_eq!(loaded.email, "grace1@example.com");
        assert_eq!(loaded.num_addresses(), 1);
    }

    #[test]
    fn list_on_empty_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nothing-here"));
        assert!(store.list_customers().unwrap().is_empty());
    }

    #[test]
    fn delete_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save_customer(&sample(1)).unwrap();
        store.save_customer(&sample(2)).unwrap();
        store.delete_customer(1).unwrap();

        let reopened = FileStore::new(dir.path().to_path_buf());
        assert!(reopened.get_customer(1).is_err());
        assert_eq!(reopened.list_customers().unwrap().len(), 1);
    }

    #[test]
    fn delete_missing_customer_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(
            store.delete_customer(42),
            Err(StoreError::CustomerNotFound(42))
        ));
    }
}
