//! # Homestock Architecture
//!
//! Homestock is a **UI-agnostic household inventory library**: items stored
//! per room, food expiry tracking, low-stock detection and a derived shopping
//! list. The `homestock` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders view models, exit codes        │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (display indexes → item ids)           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (inventory.rs + status, stock, filter, aggregate,     │
//! │  shopping)                                                  │
//! │  - InventoryStore owns the collection, engines are pure     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust arguments and returns Rust types.
//! It never writes to stdout/stderr, never calls `std::process::exit`, and
//! reads "today" only through a [`clock::Clock`], so every date-dependent
//! rule is testable with a [`clock::FixedClock`].
//!
//! ## Testing Strategy
//!
//! 1. **Engines and commands**: unit tests next to the code, using
//!    `InMemoryStore` fixtures and proptest for the engine invariants.
//! 2. **API**: dispatch and selector resolution.
//! 3. **CLI**: rendering functions are tested on strings; `tests/` drives
//!    the binary end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`inventory`]: The collection owner
//! - [`status`], [`stock`], [`filter`], [`aggregate`], [`shopping`]: Pure engines
//! - [`model`]: `Item`, `Room`, `ItemType`, `Status`, `Amount`
//! - [`index`]: Display indexes
//! - [`store`]: Storage abstraction and implementations
//! - [`config`], [`init`], [`logging`]: Configuration, context setup, tracing
//! - [`error`]: Error types

pub mod aggregate;
pub mod api;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod index;
pub mod init;
pub mod inventory;
pub mod logging;
pub mod model;
pub mod shopping;
pub mod status;
pub mod stock;
pub mod store;
