//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as
//! the single entry point for all clientele operations, regardless of the UI
//! being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Folds** every `Result` into an [`Envelope`], so success and domain
//!   rejection reach callers through the same shape
//! - **Applies** the configured simulated latency, if any
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or file formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! `CustomerApi<S: DataStore>` is generic over the storage backend:
//! - Production: `CustomerApi<FileStore>`
//! - Testing: `CustomerApi<InMemoryStore>`
//!
//! ## Write Serialization
//!
//! Mutating methods take `&mut self`, so a shared API must sit behind a
//! mutex or a single-writer queue. That keeps each uniqueness check and its
//! mutation atomic from the caller's point of view.

use std::time::Duration;

use crate::commands;
use crate::envelope::Envelope;
use crate::ids::IdGen;
use crate::model::{Address, AddressId, Customer, CustomerId};
use crate::query::{Page, PageRequest, SortDir, SortField};
use crate::store::DataStore;

pub use crate::commands::search::AddressFilter;
pub use crate::commands::{AddressDraft, AddressPatch, CustomerDraft, CustomerPatch};

/// The main API facade for clientele operations.
///
/// Generic over `DataStore` to allow different storage backends.
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct CustomerApi<S: DataStore> {
    store: S,
    ids: IdGen,
    latency: Option<Duration>,
}

impl<S: DataStore> CustomerApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            ids: IdGen::new(),
            latency: None,
        }
    }

    /// Use a fixed id sequence instead of the time-seeded one. Tests use
    /// this for predictable ids.
    pub fn with_ids(mut self, ids: IdGen) -> Self {
        self.ids = ids;
        self
    }

    /// Sleep for the given duration before every operation, imitating a
    /// remote backend. Off by default.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            std::thread::sleep(latency);
        }
    }

    pub fn list(
        &self,
        req: PageRequest,
        field: SortField,
        dir: SortDir,
    ) -> Envelope<Page<Customer>> {
        self.simulate_latency();
        commands::list::run(&self.store, req, field, dir).into()
    }

    pub fn get(&self, id: CustomerId) -> Envelope<Customer> {
        self.simulate_latency();
        commands::get::run(&self.store, id).into()
    }

    pub fn create(&mut self, draft: CustomerDraft) -> Envelope<Customer> {
        self.simulate_latency();
        commands::create::run(&mut self.store, &self.ids, draft).into()
    }

    pub fn update(&mut self, patch: CustomerPatch) -> Envelope<Customer> {
        self.simulate_latency();
        commands::update::run(&mut self.store, patch).into()
    }

    pub fn delete(&mut self, id: CustomerId) -> Envelope<Customer> {
        self.simulate_latency();
        commands::delete::run(&mut self.store, id).into()
    }

    pub fn search(
        &self,
        term: &str,
        req: PageRequest,
        field: SortField,
        dir: SortDir,
    ) -> Envelope<Page<Customer>> {
        self.simulate_latency();
        commands::search::run(&self.store, term, req, field, dir).into()
    }

    pub fn search_by_address(
        &self,
        filter: &AddressFilter,
        req: PageRequest,
        field: SortField,
        dir: SortDir,
    ) -> Envelope<Page<Customer>> {
        self.simulate_latency();
        commands::search::by_address(&self.store, filter, req, field, dir).into()
    }

    pub fn addresses(&self, customer_id: CustomerId) -> Envelope<Vec<Address>> {
        self.simulate_latency();
        commands::addresses::list(&self.store, customer_id).into()
    }

    pub fn address(&self, address_id: AddressId) -> Envelope<Address> {
        self.simulate_latency();
        commands::addresses::get(&self.store, address_id).into()
    }

    pub fn add_address(
        &mut self,
        customer_id: CustomerId,
        draft: AddressDraft,
    ) -> Envelope<Address> {
        self.simulate_latency();
        commands::addresses::add(&mut self.store, &self.ids, customer_id, draft).into()
    }

    pub fn update_address(
        &mut self,
        address_id: AddressId,
        patch: AddressPatch,
    ) -> Envelope<Address> {
        self.simulate_latency();
        commands::addresses::update(&mut self.store, address_id, patch).into()
    }

    pub fn delete_address(&mut self, address_id: AddressId) -> Envelope<()> {
        self.simulate_latency();
        commands::addresses::remove(&mut self.store, address_id).into()
    }
}
