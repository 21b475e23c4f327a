//! # Clientele Architecture
//!
//! Clientele is a **UI-agnostic customer directory library**. This is not a CLI
//! application that happens to have some library code—it's a library that happens
//! to have a CLI client.
//!
//! This distinction drives the entire architecture and should guide all development.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, print.rs, wired by main.rs)            │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Wraps every result into an Envelope (code + message)     │
//! │  - Applies the configured simulated latency, if any         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Envelope Contract
//!
//! Domain rejections (duplicate email, missing customer, last-address guard)
//! are data, not faults. Commands return `Result<T, StoreError>` internally,
//! and the API layer folds that into [`envelope::Envelope`], so every caller
//! can branch on `errorCode`/`success` uniformly. Only infrastructure
//! failures (I/O, serialization) surface as `INTERNAL_SERVER_ERROR`.
//!
//! ## Domain Invariants
//!
//! The command layer is the sole enforcer of three rules:
//!
//! 1. Every customer keeps at least one address at all times (a customer
//!    created without addresses gets an empty placeholder; deleting the last
//!    address is rejected).
//! 2. Email (case-insensitive) and phone are unique across the collection.
//! 3. No two addresses of one customer share (street, city, state, pincode).
//!
//! Deleting a *customer* is intentionally unconditional even though deleting
//! its last *address* is not. That asymmetry mirrors the observed behavior of
//! the system this library models and is kept until product says otherwise.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>` / `Envelope<T>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a REST API, a browser app, or any
//! other UI.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests of business logic
//!    against `InMemoryStore`. This is where the lion's share of testing lives.
//! 2. **API** (`api.rs`): Tests that results fold into the right envelope.
//! 3. **CLI**: End-to-end tests under `tests/` driving the binary against a
//!    temporary data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation family
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Customer`, `Address`)
//! - [`query`]: Sorting and pagination types
//! - [`envelope`]: The uniform result envelope
//! - [`ids`]: Time-based monotonic id generation
//! - [`config`]: Configuration management
//! - [`error`]: Error types and the result-code taxonomy

pub mod api;
pub mod commands;
pub mod config;
pub mod envelope;
pub mod error;
pub mod ids;
pub mod model;
pub mod query;
pub mod store;
