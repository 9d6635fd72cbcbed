//! # shelf
//!
//! Command-line client for the shelf inventory library. All business logic lives in the
//! library crate; this binary parses arguments, calls
//! [`InventoryApi`](shelf::api::InventoryApi) and renders the returned `CmdResult`.
//!
//! Development flows **inside-out**: implement and test store and command logic, expose
//! it via the API facade, and only then wire up CLI parsing and rendering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
