//! # Command Layer
//!
//! This module contains the **core business logic** of shelf. Each command lives in its
//! own submodule and implements plain Rust functions over an
//! [`InventoryStore`](crate::store::InventoryStore).
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Call the store's operations and shape what they return
//! - Filter, sort and count for the list and dashboard views
//! - Return structured `CmdResult` with affected records and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: No stdout, stderr or colors
//! - **Form validation**: Required fields and number parsing are checked by the UI
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Unknown Ids
//!
//! The store treats updates and deletes of unknown ids as silent no-ops. Commands keep
//! that contract (no `Err`) but attach a warning message so a UI can tell the user
//! nothing happened.
//!
//! ## Command Modules
//!
//! - [`products`]: Add, update, delete, show and list products
//! - [`categories`]: Add, update, delete and list categories with product counts
//! - [`dashboard`]: Statistics, recent products and low-stock alerts
//! - [`export`]: Write a backup document to disk
//! - [`import`]: Restore collections from a backup document
//! - [`clear`]: Remove all stored data
//! - [`config`]: Show and change settings

use crate::model::{Category, Product};
use crate::stats::InventoryStats;
use serde::Serialize;
use std::path::PathBuf;

pub mod categories;
pub mod clear;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod import;
pub mod products;

pub use categories::CategorySummary;
pub use dashboard::Dashboard;
pub use products::ProductFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected_products: Vec<Product>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_products: Vec<Product>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected_categories: Vec<Category>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_categories: Vec<CategorySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<InventoryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<Dashboard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_affected_categories(mut self, categories: Vec<Category>) -> Self {
        self.affected_categories = categories;
        self
    }

    /// Whether any message is a warning or an error.
    pub fn has_problems(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
