use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use shelf::model::{category_color, DEFAULT_CATEGORY_COLOR};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "Local inventory tracker: products, categories and stock levels", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the inventory data (overrides SHELF_DATA)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text, help_heading = "Options")]
    pub output: OutputFormat,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show totals, recent products and low-stock alerts
    #[command(alias = "d")]
    Dashboard,

    /// Show inventory statistics
    Stats,

    /// Manage products
    #[command(alias = "p")]
    Product {
        #[command(subcommand)]
        action: ProductCommands,
    },

    /// Manage categories
    #[command(alias = "c")]
    Category {
        #[command(subcommand)]
        action: CategoryCommands,
    },

    /// Write a dated JSON backup of all data
    Export {
        /// Directory to write the backup into (defaults to the current directory)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Restore products and/or categories from a JSON backup
    Import {
        /// Backup file to read
        file: PathBuf,
    },

    /// Remove all products and reset categories to the defaults
    Clear {
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (default-min-stock, dashboard-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// Add a product
    #[command(alias = "a")]
    Add {
        #[arg(long, value_parser = parse_required)]
        name: String,

        #[arg(long, value_parser = parse_required)]
        sku: String,

        /// Unit price, e.g. 19.99
        #[arg(long, value_parser = parse_price)]
        price: Decimal,

        /// Units in stock
        #[arg(long)]
        quantity: u32,

        /// Low-stock threshold (defaults to the configured default-min-stock)
        #[arg(long)]
        min_stock: Option<u32>,

        /// Category name
        #[arg(long, default_value = "")]
        category: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Change fields of a product
    #[command(alias = "u")]
    Update {
        /// Product id (a unique prefix is enough)
        id: String,

        #[arg(long, value_parser = parse_required)]
        name: Option<String>,

        #[arg(long, value_parser = parse_required)]
        sku: Option<String>,

        #[arg(long, value_parser = parse_price)]
        price: Option<Decimal>,

        #[arg(long)]
        quantity: Option<u32>,

        #[arg(long)]
        min_stock: Option<u32>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        /// Product id (a unique prefix is enough)
        id: String,
    },

    /// Show one product
    #[command(alias = "v")]
    Show {
        /// Product id (a unique prefix is enough)
        id: String,
    },

    /// List products
    #[command(alias = "ls")]
    List {
        /// Match name, SKU or category (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Only products in this category (exact name)
        #[arg(short, long)]
        category: Option<String>,

        /// Only products at or below their minimum stock
        #[arg(long)]
        low_stock: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Add a category
    #[command(alias = "a")]
    Add {
        #[arg(long, value_parser = parse_required)]
        name: String,

        /// Preset number 1-8 or a color token
        #[arg(long, default_value = DEFAULT_CATEGORY_COLOR, value_parser = parse_color)]
        color: String,
    },

    /// Rename or recolor a category
    #[command(alias = "u")]
    Update {
        /// Category id (a unique prefix is enough)
        id: String,

        #[arg(long, value_parser = parse_required)]
        name: Option<String>,

        /// Preset number 1-8 or a color token
        #[arg(long, value_parser = parse_color)]
        color: Option<String>,
    },

    /// Delete a category (products keep their category label)
    #[command(alias = "rm")]
    Delete {
        /// Category id (a unique prefix is enough)
        id: String,
    },

    /// List categories with product counts
    #[command(alias = "ls")]
    List,
}

/// Trimmed, non-empty text.
pub fn parse_required(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("value cannot be empty".to_string());
    }
    Ok(trimmed.to_string())
}

/// Category color, expanding preset numbers to their token.
pub fn parse_color(s: &str) -> Result<String, String> {
    parse_required(s).map(|color| category_color(&color))
}

/// Non-negative decimal price.
pub fn parse_price(s: &str) -> Result<Decimal, String> {
    let price = Decimal::from_str(s.trim()).map_err(|_| format!("invalid price: {}", s))?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err("price cannot be negative".to_string());
    }
    Ok(price)
}
