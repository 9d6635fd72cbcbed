//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all shelf operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the [`InventoryStore`] and the configuration for one data directory
//! - **Dispatches** to the appropriate command function
//! - **Fills in** configured defaults (dashboard size)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or output formatting
//! - **Validation of form input**: The UI checks required fields before calling in
//!
//! ## Generic Over StorageBackend
//!
//! `InventoryApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `InventoryApi<FsBackend>`
//! - Testing: `InventoryApi<MemBackend>`

use crate::commands;
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::model::{CategoryPatch, NewCategory, NewProduct, ProductPatch};
use crate::store::backend::StorageBackend;
use crate::store::InventoryStore;
use std::path::{Path, PathBuf};

/// The main API facade for shelf operations.
///
/// All UI clients (CLI, web, etc.) should interact through this API.
pub struct InventoryApi<B: StorageBackend> {
    store: InventoryStore<B>,
    config: ShelfConfig,
    config_dir: PathBuf,
}

impl<B: StorageBackend> InventoryApi<B> {
    /// Load the inventory from `backend`. Fails if the stored data cannot be parsed.
    pub fn open(backend: B, config: ShelfConfig, config_dir: PathBuf) -> Result<Self> {
        let store = InventoryStore::open(backend)?;
        Ok(Self {
            store,
            config,
            config_dir,
        })
    }

    pub fn store(&self) -> &InventoryStore<B> {
        &self.store
    }

    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    /// Directory holding `shelf.json`. The CLI keeps it next to the inventory data.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn add_product(&mut self, data: NewProduct) -> Result<commands::CmdResult> {
        commands::products::add(&mut self.store, data)
    }

    pub fn update_product(
        &mut self,
        id: &str,
        patch: ProductPatch,
    ) -> Result<commands::CmdResult> {
        commands::products::update(&mut self.store, id, patch)
    }

    pub fn delete_product(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::products::delete(&mut self.store, id)
    }

    pub fn get_product(&self, id: &str) -> Result<commands::CmdResult> {
        commands::products::get(&self.store, id)
    }

    pub fn list_products(&self, filter: &ProductFilter) -> Result<commands::CmdResult> {
        commands::products::list(&self.store, filter)
    }

    pub fn add_category(&mut self, data: NewCategory) -> Result<commands::CmdResult> {
        commands::categories::add(&mut self.store, data)
    }

    pub fn update_category(
        &mut self,
        id: &str,
        patch: CategoryPatch,
    ) -> Result<commands::CmdResult> {
        commands::categories::update(&mut self.store, id, patch)
    }

    pub fn delete_category(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::categories::delete(&mut self.store, id)
    }

    pub fn list_categories(&self) -> Result<commands::CmdResult> {
        commands::categories::list(&self.store)
    }

    pub fn dashboard(&self) -> Result<commands::CmdResult> {
        commands::dashboard::run(&self.store, self.config.dashboard_limit)
    }

    pub fn stats(&self) -> Result<commands::CmdResult> {
        commands::dashboard::stats(&self.store)
    }

    pub fn export(&self, dir: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, dir)
    }

    pub fn import(&mut self, path: &Path) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, path)
    }

    pub fn clear(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.store)
    }

    /// Clear `backend` without opening it. The recovery path when stored data no longer loads.
    pub fn clear_storage(backend: &B) -> Result<commands::CmdResult> {
        commands::clear::wipe(backend)
    }

    pub fn configure(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        self.config = ShelfConfig::load(&self.config_dir)?;
        Ok(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CategorySummary, CmdMessage, CmdResult, Dashboard, MessageLevel, ProductFilter,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::product_data;
    use crate::store::mem_backend::MemBackend;

    fn make_api(config: ShelfConfig) -> (tempfile::TempDir, InventoryApi<MemBackend>) {
        let dir = tempfile::tempdir().unwrap();
        let api = InventoryApi::open(MemBackend::new(), config, dir.path().to_path_buf()).unwrap();
        (dir, api)
    }

    #[test]
    fn add_then_list_dispatches_to_store() {
        let (_dir, mut api) = make_api(ShelfConfig::default());
        let res = api.add_product(product_data("A", 1, 1)).unwrap();
        let id = res.affected_products[0].id.clone();

        let listed = api.list_products(&ProductFilter::default()).unwrap();
        assert_eq!(listed.listed_products.len(), 1);
        assert_eq!(api.get_product(&id).unwrap().listed_products[0].sku, "A");
        assert_eq!(api.store().products().len(), 1);
    }

    #[test]
    fn dashboard_uses_configured_limit() {
        let config = ShelfConfig {
            dashboard_limit: 1,
            ..Default::default()
        };
        let (_dir, mut api) = make_api(config);
        api.add_product(product_data("A", 1, 1)).unwrap();
        api.add_product(product_data("B", 1, 1)).unwrap();

        let dash = api.dashboard().unwrap().dashboard.unwrap();
        assert_eq!(dash.recent_products.len(), 1);
        assert_eq!(dash.low_stock_products.len(), 1);
        assert_eq!(dash.stats.total_products, 2);
    }

    #[test]
    fn configure_refreshes_loaded_config() {
        let (_dir, mut api) = make_api(ShelfConfig::default());
        api.configure(ConfigAction::Set("dashboard-limit".into(), "2".into()))
            .unwrap();
        assert_eq!(api.config().dashboard_limit, 2);
    }

    #[test]
    fn category_calls_round_through_store() {
        let (_dir, mut api) = make_api(ShelfConfig::default());
        let res = api.add_category(NewCategory::named("Tools")).unwrap();
        let id = res.affected_categories[0].id.clone();
        assert_eq!(api.list_categories().unwrap().listed_categories.len(), 5);

        api.delete_category(&id).unwrap();
        assert_eq!(api.stats().unwrap().stats.unwrap().categories, 4);
    }

    #[test]
    fn clear_storage_needs_no_loadable_store() {
        use crate::store::{backend::StorageBackend, PRODUCTS_KEY};

        let backend = MemBackend::new().with_entry(PRODUCTS_KEY, "{broken");
        let dir = tempfile::tempdir().unwrap();
        InventoryApi::<MemBackend>::clear_storage(&backend).unwrap();
        assert!(!backend.contains(PRODUCTS_KEY).unwrap());

        let api = InventoryApi::open(backend, ShelfConfig::default(), dir.path().to_path_buf())
            .unwrap();
        assert!(api.store().products().is_empty());
    }
}
