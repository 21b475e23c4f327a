//! # Storage Layer
//!
//! This module defines the storage abstraction for clientele. The
//! [`DataStore`] trait allows the application to work with different storage
//! backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (database, remote service) without changing
//!   the command layer or the operation/error contract
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole collection lives in one `customers.json` file
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!   - Ships fixtures with the canonical five-customer demo data set
//!
//! ## What the Store Does NOT Do
//!
//! Stores persist and retrieve whole customer records; they know nothing
//! about uniqueness, pagination, or the at-least-one-address rule. All
//! invariant enforcement lives in `commands/`, so every backend gets it
//! for free.

use crate::error::Result;
use crate::model::{Customer, CustomerId};

pub mod fs;
pub mod memory;

/// Abstract interface for customer storage.
///
/// Addresses are embedded in their owning customer, so the trait only deals
/// in whole customer records; address-level edits save the owner back.
pub trait DataStore {
    /// Save a customer (create or update)
    fn save_customer(&mut self, customer: &Customer) -> Result<()>;

    /// Get a customer by ID
    fn get_customer(&self, id: CustomerId) -> Result<Customer>;

    /// List all customers
    fn list_customers(&self) -> Result<Vec<Customer>>;

    /// Delete a customer permanently
    fn delete_customer(&mut self, id: CustomerId) -> Result<()>;
}
