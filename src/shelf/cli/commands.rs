use super::print::{
    print_categories, print_dashboard, print_messages, print_product_detail, print_products,
    print_stats,
};
use super::setup::{CategoryCommands, Cli, Commands, OutputFormat, ProductCommands};
use clap::Parser;
use directories::ProjectDirs;
use rust_decimal::Decimal;
use shelf::api::{CmdResult, ConfigAction, InventoryApi, ProductFilter};
use shelf::config::ShelfConfig;
use shelf::error::{Result, ShelfError};
use shelf::model::{CategoryPatch, NewCategory, NewProduct, ProductPatch};
use shelf::store::fs_backend::FsBackend;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the data directory when `--data-dir` is not given.
pub const DATA_DIR_ENV: &str = "SHELF_DATA";

struct AppContext {
    api: InventoryApi<FsBackend>,
    output: OutputFormat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    match cli.command {
        // Clearing must not depend on the stored data being readable.
        Some(Commands::Clear { yes }) => handle_clear(&data_dir, cli.output, yes),
        command => {
            let mut ctx = init_context(data_dir, cli.output)?;
            dispatch(&mut ctx, command)
        }
    }
}

fn dispatch(ctx: &mut AppContext, command: Option<Commands>) -> Result<()> {
    match command {
        Some(Commands::Dashboard) | None => handle_dashboard(ctx),
        Some(Commands::Stats) => handle_stats(ctx),
        Some(Commands::Product { action }) => handle_product(ctx, action),
        Some(Commands::Category { action }) => handle_category(ctx, action),
        Some(Commands::Export { dir }) => handle_export(ctx, dir),
        Some(Commands::Import { file }) => handle_import(ctx, &file),
        Some(Commands::Clear { yes }) => handle_clear(ctx.api.config_dir(), ctx.output, yes),
        Some(Commands::Config { key, value }) => handle_config(ctx, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "shelf=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(data_dir: PathBuf, output: OutputFormat) -> Result<AppContext> {
    debug!(data_dir = %data_dir.display(), "opening inventory");

    let config = ShelfConfig::load(&data_dir)?;
    let api = InventoryApi::open(FsBackend::new(data_dir.clone()), config, data_dir)?;

    Ok(AppContext { api, output })
}

fn resolve_data_dir(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ShelfError::Store("Could not determine data directory".into()))
}

/// Expand a unique id prefix to the full id. Anything else is passed through unchanged.
fn resolve_id<'a>(input: &str, ids: impl Iterator<Item = &'a str>) -> String {
    if input.is_empty() {
        return String::new();
    }
    let mut candidates = Vec::new();
    for id in ids {
        if id == input {
            return id.to_string();
        }
        if id.starts_with(input) {
            candidates.push(id);
        }
    }
    match candidates.as_slice() {
        [only] => only.to_string(),
        _ => input.to_string(),
    }
}

fn product_id(ctx: &AppContext, input: &str) -> String {
    let products = ctx.api.store().products();
    resolve_id(input, products.iter().map(|p| p.id.as_str()))
}

fn category_id(ctx: &AppContext, input: &str) -> String {
    let categories = ctx.api.store().categories();
    resolve_id(input, categories.iter().map(|c| c.id.as_str()))
}

/// Print the result as JSON, or hand it to `render` for text output.
fn emit(output: OutputFormat, result: &CmdResult, render: impl FnOnce(&CmdResult)) -> Result<()> {
    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result).map_err(ShelfError::Serialization)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            render(result);
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_dashboard(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.dashboard()?;
    emit(ctx.output, &result, |r| {
        if let Some(dashboard) = &r.dashboard {
            print_dashboard(dashboard);
        }
    })
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    emit(ctx.output, &result, |r| {
        if let Some(stats) = &r.stats {
            print_stats(stats);
        }
    })
}

fn handle_product(ctx: &mut AppContext, action: ProductCommands) -> Result<()> {
    match action {
        ProductCommands::Add {
            name,
            sku,
            price,
            quantity,
            min_stock,
            category,
            description,
        } => {
            let data = NewProduct {
                name,
                sku,
                category: category.trim().to_string(),
                quantity,
                min_stock: min_stock.unwrap_or(ctx.api.config().default_min_stock),
                price,
                description: description.trim().to_string(),
            };
            let result = ctx.api.add_product(data)?;
            emit(ctx.output, &result, |_| {})
        }
        ProductCommands::Update {
            id,
            name,
            sku,
            price,
            quantity,
            min_stock,
            category,
            description,
        } => {
            let id = product_id(ctx, &id);
            let patch = product_patch(
                name,
                sku,
                price,
                quantity,
                min_stock,
                category,
                description,
            );
            let result = ctx.api.update_product(&id, patch)?;
            emit(ctx.output, &result, |_| {})
        }
        ProductCommands::Delete { id } => {
            let id = product_id(ctx, &id);
            let result = ctx.api.delete_product(&id)?;
            emit(ctx.output, &result, |_| {})
        }
        ProductCommands::Show { id } => {
            let id = product_id(ctx, &id);
            let result = ctx.api.get_product(&id)?;
            emit(ctx.output, &result, |r| {
                for product in &r.listed_products {
                    print_product_detail(product);
                }
            })
        }
        ProductCommands::List {
            search,
            category,
            low_stock,
        } => {
            let filter = ProductFilter {
                search,
                category,
                low_stock_only: low_stock,
            };
            let result = ctx.api.list_products(&filter)?;
            emit(ctx.output, &result, |r| print_products(&r.listed_products))
        }
    }
}

fn product_patch(
    name: Option<String>,
    sku: Option<String>,
    price: Option<Decimal>,
    quantity: Option<u32>,
    min_stock: Option<u32>,
    category: Option<String>,
    description: Option<String>,
) -> ProductPatch {
    ProductPatch {
        name,
        sku,
        category: category.map(|c| c.trim().to_string()),
        quantity,
        min_stock,
        price,
        description: description.map(|d| d.trim().to_string()),
    }
}

fn handle_category(ctx: &mut AppContext, action: CategoryCommands) -> Result<()> {
    match action {
        CategoryCommands::Add { name, color } => {
            let result = ctx.api.add_category(NewCategory { name, color })?;
            emit(ctx.output, &result, |_| {})
        }
        CategoryCommands::Update { id, name, color } => {
            let id = category_id(ctx, &id);
            let result = ctx.api.update_category(&id, CategoryPatch { name, color })?;
            emit(ctx.output, &result, |_| {})
        }
        CategoryCommands::Delete { id } => {
            let id = category_id(ctx, &id);
            let result = ctx.api.delete_category(&id)?;
            emit(ctx.output, &result, |_| {})
        }
        CategoryCommands::List => {
            let result = ctx.api.list_categories()?;
            emit(ctx.output, &result, |r| print_categories(&r.listed_categories))
        }
    }
}

fn handle_export(ctx: &AppContext, dir: Option<PathBuf>) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(ShelfError::Io)?,
    };
    let result = ctx.api.export(&dir)?;
    emit(ctx.output, &result, |_| {})
}

fn handle_import(ctx: &mut AppContext, file: &Path) -> Result<()> {
    let result = ctx.api.import(file)?;
    emit(ctx.output, &result, |_| {})
}

fn handle_clear(data_dir: &Path, output: OutputFormat, yes: bool) -> Result<()> {
    if !yes {
        return Err(ShelfError::Api(
            "Refusing to delete all data without --yes. This cannot be undone.".into(),
        ));
    }
    debug!(data_dir = %data_dir.display(), "clearing inventory");

    let result = InventoryApi::clear_storage(&FsBackend::new(data_dir.to_path_buf()))?;
    emit(output, &result, |_| {})
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let result = ctx.api.configure(action)?;
    emit(ctx.output, &result, |_| {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_id_prefers_exact_match() {
        let ids = ["1", "12", "abc"];
        assert_eq!(resolve_id("1", ids.iter().copied()), "1");
        assert_eq!(resolve_id("ab", ids.iter().copied()), "abc");
    }

    #[test]
    fn resolve_id_passes_through_ambiguous_or_unknown() {
        let ids = ["abc1", "abc2"];
        assert_eq!(resolve_id("abc", ids.iter().copied()), "abc");
        assert_eq!(resolve_id("zzz", ids.iter().copied()), "zzz");
    }

    #[test]
    fn resolve_id_never_expands_empty_input() {
        assert_eq!(resolve_id("", ["only-one"].iter().copied()), "");
    }

    #[test]
    fn data_dir_flag_wins() {
        let dir = resolve_data_dir(Some(Path::new("/tmp/inventory"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/inventory"));
    }

    #[test]
    fn patch_trims_free_text() {
        let patch = product_patch(
            None,
            None,
            None,
            Some(3),
            None,
            Some(" Tools ".into()),
            Some(" spare ".into()),
        );
        assert_eq!(patch.category.as_deref(), Some("Tools"));
        assert_eq!(patch.description.as_deref(), Some("spare"));
        assert_eq!(patch.quantity, Some(3));
        assert!(patch.name.is_none());
    }
}
