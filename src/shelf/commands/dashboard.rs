use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Product;
use crate::stats::{low_stock_products, recent_products, InventoryStats};
use crate::store::backend::StorageBackend;
use crate::store::InventoryStore;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: InventoryStats,
    /// Newest first.
    pub recent_products: Vec<Product>,
    /// Stored order.
    pub low_stock_products: Vec<Product>,
}

pub fn run<B: StorageBackend>(store: &InventoryStore<B>, limit: usize) -> Result<CmdResult> {
    let dashboard = Dashboard {
        stats: store.stats(),
        recent_products: recent_products(store.products(), limit),
        low_stock_products: low_stock_products(store.products(), limit),
    };
    Ok(CmdResult {
        dashboard: Some(dashboard),
        ..Default::default()
    })
}

pub fn stats<B: StorageBackend>(store: &InventoryStore<B>) -> Result<CmdResult> {
    Ok(CmdResult {
        stats: Some(store.stats()),
        ..Default::default()
    })
}
