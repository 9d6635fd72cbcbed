//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic inventory library** with a command-line client on top. It
//! tracks products and categories in a small local store and derives summary
//! statistics from them on demand.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, validates form input, formats output   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Filtering, counting, messages                            │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - InventoryStore: collections, defaults, write-through     │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! Every mutation follows the same path: UI → API → command → store operation →
//! collection rebuilt → whole collection written to its storage key → collection
//! swapped into memory → result handed back to the UI for rendering.
//!
//! ## Testing Strategy
//!
//! 1. **Store** (`store/`): CRUD semantics, defaults, write failures, backup round-trips,
//!    all against `MemBackend`.
//! 2. **Commands** (`commands/*.rs`): filters, counts and the messages each path produces.
//! 3. **API** (`api.rs`): dispatch and configured defaults.
//! 4. **Binary** (`tests/`): end-to-end runs against a temporary data directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and the inventory store
//! - [`model`]: Core data types (`Product`, `Category`)
//! - [`stats`]: Derived figures (`InventoryStats`, recent and low-stock views)
//! - [`backup`]: Export/import document format
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod backup;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod stats;
pub mod store;
