use chrono::{DateTime, Utc};
use colored::Colorize;
use rust_decimal::Decimal;
use shelf::api::{CategorySummary, CmdMessage, Dashboard, MessageLevel};
use shelf::model::Product;
use shelf::stats::InventoryStats;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 8;
const NAME_WIDTH: usize = 28;
const SKU_WIDTH: usize = 12;
const CATEGORY_WIDTH: usize = 18;
const TIME_WIDTH: usize = 16;
const LOW_MARKER: &str = "▼";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_products(products: &[Product]) {
    if products.is_empty() {
        return;
    }

    println!(
        "{}",
        format!(
            "  {} {} {} {} {:>11} {:>10}",
            pad_to_width("ID", ID_WIDTH),
            pad_to_width("NAME", NAME_WIDTH),
            pad_to_width("SKU", SKU_WIDTH),
            pad_to_width("CATEGORY", CATEGORY_WIDTH),
            "STOCK/MIN",
            "PRICE"
        )
        .dimmed()
    );
    for product in products {
        println!("{}", product_row(product));
    }
}

fn product_row(product: &Product) -> String {
    let marker = if product.is_low_stock() {
        LOW_MARKER.red().to_string()
    } else {
        " ".to_string()
    };
    let stock = format!("{:>5}/{:<5}", product.quantity, product.min_stock);
    let stock = if product.is_low_stock() {
        stock.red().to_string()
    } else {
        stock
    };
    format!(
        "{} {} {} {} {} {} {:>10}",
        marker,
        short_id(&product.id).yellow(),
        pad_to_width(&product.name, NAME_WIDTH),
        pad_to_width(&product.sku, SKU_WIDTH).dimmed(),
        pad_to_width(&product.category, CATEGORY_WIDTH),
        stock,
        format_price(product.price)
    )
}

pub(super) fn print_product_detail(product: &Product) {
    println!("{} {}", short_id(&product.id).yellow(), product.name.bold());
    println!("--------------------------------");
    println!("{:<12}{}", "id", product.id);
    println!("{:<12}{}", "sku", product.sku);
    println!("{:<12}{}", "category", display_or_dash(&product.category));
    let stock = format!("{} (min {})", product.quantity, product.min_stock);
    if product.is_low_stock() {
        println!("{:<12}{} {}", "stock", stock.red(), "low stock".red());
    } else {
        println!("{:<12}{}", "stock", stock);
    }
    println!("{:<12}{}", "price", format_price(product.price));
    println!("{:<12}{}", "value", format_price(product.stock_value()));
    println!("{:<12}{}", "created", product.created_at.to_rfc3339());
    println!("{:<12}{}", "updated", product.updated_at.to_rfc3339());
    if !product.description.is_empty() {
        println!();
        println!("{}", product.description);
    }
}

pub(super) fn print_categories(categories: &[CategorySummary]) {
    for summary in categories {
        let count = match summary.product_count {
            1 => "1 product".to_string(),
            n => format!("{} products", n),
        };
        println!(
            "  {} {} {}  {}",
            short_id(&summary.category.id).yellow(),
            pad_to_width(&summary.category.name, NAME_WIDTH),
            pad_to_width(&count, 12),
            summary.category.color.dimmed()
        );
    }
}

pub(super) fn print_stats(stats: &InventoryStats) {
    println!("{:<18}{}", "Total products", stats.total_products.to_string().bold());
    println!("{:<18}{}", "Total value", format_price(stats.total_value).bold());
    let low = stats.low_stock_items.to_string();
    if stats.low_stock_items > 0 {
        println!("{:<18}{}", "Low stock", low.red().bold());
    } else {
        println!("{:<18}{}", "Low stock", low.green());
    }
    println!("{:<18}{}", "Categories", stats.categories.to_string().bold());
}

pub(super) fn print_dashboard(dashboard: &Dashboard) {
    print_stats(&dashboard.stats);

    println!();
    println!("{}", "Recent products".bold());
    if dashboard.recent_products.is_empty() {
        println!("{}", "  No products yet. Add your first product!".dimmed());
    }
    for product in &dashboard.recent_products {
        println!(
            "  {} {} {}",
            short_id(&product.id).yellow(),
            pad_to_width(&product.name, NAME_WIDTH + SKU_WIDTH),
            format_time_ago(product.created_at).dimmed()
        );
    }

    println!();
    println!("{}", "Low stock alerts".bold());
    if dashboard.low_stock_products.is_empty() {
        println!("{}", "  All items are well stocked!".green());
    }
    for product in &dashboard.low_stock_products {
        println!(
            "  {} {} {}",
            short_id(&product.id).yellow(),
            pad_to_width(&product.name, NAME_WIDTH + SKU_WIDTH),
            format!("{} left (min {})", product.quantity, product.min_stock).red()
        );
    }
}

fn short_id(id: &str) -> String {
    pad_to_width(&id.chars().take(ID_WIDTH).collect::<String>(), ID_WIDTH)
}

fn display_or_dash(s: &str) -> &str {
    if s.is_empty() {
        "-"
    } else {
        s
    }
}

fn format_price(price: Decimal) -> String {
    format!("${:.2}", price)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);

    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
