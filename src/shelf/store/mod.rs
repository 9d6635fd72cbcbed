//! # Storage Layer
//!
//! This module defines how shelf keeps its data between runs.
//!
//! ## Two Layers
//!
//! - [`backend::StorageBackend`]: a dumb key-value medium. It stores opaque strings under
//!   string keys and knows nothing about products.
//! - [`InventoryStore`]: owns the two collections in memory, decides what goes under each
//!   key, seeds defaults, and computes statistics.
//!
//! ## Keys
//!
//! | Key | Value |
//! |-----|-------|
//! | `inventory_products` | JSON array of products, insertion order |
//! | `inventory_categories` | JSON array of categories, insertion order |
//!
//! Every mutation re-serializes the whole affected collection. There is no delta
//! persistence and no locking: two processes writing the same directory race, and the
//! last writer wins.
//!
//! ## Write-Through, Memory Last
//!
//! A mutation builds the next collection, writes it, and only then swaps it into memory.
//! If the backend write fails the error is returned and nothing changed, in memory or on
//! disk.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production, one `<key>.json` file per key, atomic writes.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── inventory_products.json
//! ├── inventory_categories.json
//! └── shelf.json                # Configuration
//! ```

pub mod backend;
pub mod fs_backend;
pub mod inventory_store;
pub mod mem_backend;

pub use inventory_store::{InventoryStore, CATEGORIES_KEY, PRODUCTS_KEY};

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::mem_backend::MemBackend;
    use super::InventoryStore;
    use crate::model::{NewCategory, NewProduct};
    use rust_decimal::Decimal;

    /// Form data for a product priced at 1.00 with the given stock figures.
    pub fn product_data(sku: &str, quantity: u32, min_stock: u32) -> NewProduct {
        NewProduct {
            name: format!("Product {}", sku),
            sku: sku.to_string(),
            category: String::new(),
            quantity,
            min_stock,
            price: Decimal::ONE,
            description: String::new(),
        }
    }

    pub struct StoreFixture {
        pub store: InventoryStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InventoryStore::open(MemBackend::new())
                    .expect("empty backend always loads"),
            }
        }

        pub fn with_product(mut self, sku: &str, quantity: u32, min_stock: u32) -> Self {
            self.store
                .add_product(product_data(sku, quantity, min_stock))
                .unwrap();
            self
        }

        pub fn with_product_in(
            mut self,
            sku: &str,
            category: &str,
            quantity: u32,
            min_stock: u32,
        ) -> Self {
            let mut data = product_data(sku, quantity, min_stock);
            data.category = category.to_string();
            self.store.add_product(data).unwrap();
            self
        }

        pub fn with_category(mut self, name: &str) -> Self {
            self.store.add_category(NewCategory::named(name)).unwrap();
            self
        }
    }
}
