use super::backend::StorageBackend;
use crate::backup::{ExportDocument, ImportPayload, ImportSummary};
use crate::error::Result;
use crate::model::{
    default_categories, new_id, Category, CategoryPatch, NewCategory, NewProduct, Product,
    ProductPatch,
};
use crate::stats::InventoryStats;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

/// Storage key holding the product array.
pub const PRODUCTS_KEY: &str = "inventory_products";
/// Storage key holding the category array.
pub const CATEGORIES_KEY: &str = "inventory_categories";

pub struct InventoryStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl<B: StorageBackend> InventoryStore<B> {
    /// Open a store over `backend` and load both collections.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self {
            backend,
            products: Vec::new(),
            categories: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Re-read both collections from the backend.
    ///
    /// A missing product key yields no products; a missing category key yields the
    /// default categories. Malformed stored JSON is returned as an error and leaves the
    /// in-memory state as it was.
    pub fn load(&mut self) -> Result<()> {
        let products: Vec<Product> = self.read_collection(PRODUCTS_KEY)?.unwrap_or_default();
        let categories = self
            .read_collection(CATEGORIES_KEY)?
            .unwrap_or_else(default_categories);

        info!(
            products = products.len(),
            categories = categories.len(),
            location = %self.backend.location().display(),
            "Loaded inventory"
        );
        self.products = products;
        self.categories = categories;
        Ok(())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn stats(&self) -> InventoryStats {
        InventoryStats::compute(&self.products, &self.categories)
    }

    // --- Products ---

    pub fn add_product(&mut self, data: NewProduct) -> Result<Product> {
        let mut product = Product::new(data);
        while self.product(&product.id).is_some() {
            product.id = new_id();
        }
        debug!(id = %product.id, sku = %product.sku, "Adding product");

        let mut next = self.products.clone();
        next.push(product.clone());
        self.commit_products(next)?;
        Ok(product)
    }

    /// Merge `patch` into the product with `id`. Unknown ids are a no-op and return `None`.
    pub fn update_product(&mut self, id: &str, patch: ProductPatch) -> Result<Option<Product>> {
        let Some(pos) = self.products.iter().position(|p| p.id == id) else {
            debug!(id = %id, "Update skipped, no such product");
            return Ok(None);
        };
        debug!(id = %id, "Updating product");

        let mut next = self.products.clone();
        next[pos].apply(patch);
        let updated = next[pos].clone();
        self.commit_products(next)?;
        Ok(Some(updated))
    }

    /// Remove the product with `id`. Unknown ids are a no-op and return `None`.
    pub fn delete_product(&mut self, id: &str) -> Result<Option<Product>> {
        let Some(pos) = self.products.iter().position(|p| p.id == id) else {
            debug!(id = %id, "Delete skipped, no such product");
            return Ok(None);
        };
        debug!(id = %id, "Deleting product");

        let mut next = self.products.clone();
        let removed = next.remove(pos);
        self.commit_products(next)?;
        Ok(Some(removed))
    }

    // --- Categories ---

    pub fn add_category(&mut self, data: NewCategory) -> Result<Category> {
        let mut category = Category::new(data);
        while self.category(&category.id).is_some() {
            category.id = new_id();
        }
        debug!(id = %category.id, name = %category.name, "Adding category");

        let mut next = self.categories.clone();
        next.push(category.clone());
        self.commit_categories(next)?;
        Ok(category)
    }

    pub fn update_category(
        &mut self,
        id: &str,
        patch: CategoryPatch,
    ) -> Result<Option<Category>> {
        let Some(pos) = self.categories.iter().position(|c| c.id == id) else {
            debug!(id = %id, "Update skipped, no such category");
            return Ok(None);
        };
        debug!(id = %id, "Updating category");

        let mut next = self.categories.clone();
        next[pos].apply(patch);
        let updated = next[pos].clone();
        self.commit_categories(next)?;
        Ok(Some(updated))
    }

    /// Remove the category with `id`. Products labelled with its name keep their label.
    pub fn delete_category(&mut self, id: &str) -> Result<Option<Category>> {
        let Some(pos) = self.categories.iter().position(|c| c.id == id) else {
            debug!(id = %id, "Delete skipped, no such category");
            return Ok(None);
        };
        debug!(id = %id, "Deleting category");

        let mut next = self.categories.clone();
        let removed = next.remove(pos);
        self.commit_categories(next)?;
        Ok(Some(removed))
    }

    // --- Backup ---

    /// Snapshot both collections, stamped with the current time.
    pub fn export_document(&self) -> ExportDocument {
        ExportDocument::new(self.products.clone(), self.categories.clone())
    }

    /// Overwrite the keys present in `raw` wholesale, then reload.
    ///
    /// Collections absent from the document keep their stored value. Every record is read
    /// before anything is written, so a document the model cannot read leaves storage as it
    /// was.
    pub fn import_document(&mut self, raw: &str) -> Result<ImportSummary> {
        let payload = ImportPayload::parse(raw)?;

        let mut summary = ImportSummary::default();
        if let Some(products) = &payload.products {
            self.write_collection(PRODUCTS_KEY, products)?;
            summary.products = Some(products.len());
        }
        if let Some(categories) = &payload.categories {
            self.write_collection(CATEGORIES_KEY, categories)?;
            summary.categories = Some(categories.len());
        }
        info!(
            products = ?summary.products,
            categories = ?summary.categories,
            "Imported backup"
        );

        self.load()?;
        Ok(summary)
    }

    /// Remove both keys from storage and reload, leaving a fresh inventory.
    pub fn clear(&mut self) -> Result<()> {
        Self::remove_all(&self.backend)?;
        self.load()
    }

    /// Remove both keys from `backend` without reading them, so data that no longer loads
    /// can still be cleared.
    pub fn remove_all(backend: &B) -> Result<()> {
        backend.remove(PRODUCTS_KEY)?;
        backend.remove(CATEGORIES_KEY)?;
        info!(location = %backend.location().display(), "Cleared inventory data");
        Ok(())
    }

    // --- Persistence ---

    // Storage is written before memory is swapped, so a failed write leaves both untouched.
    fn commit_products(&mut self, next: Vec<Product>) -> Result<()> {
        self.write_collection(PRODUCTS_KEY, &next)?;
        self.products = next;
        Ok(())
    }

    fn commit_categories(&mut self, next: Vec<Category>) -> Result<()> {
        self.write_collection(CATEGORIES_KEY, &next)?;
        self.categories = next;
        Ok(())
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        match self.backend.read(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.write(key, &raw)?;
        debug!(key = %key, count = items.len(), bytes = raw.len(), "Persisted collection");
        Ok(())
    }
}
