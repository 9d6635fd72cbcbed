//! # CLI Layer
//!
//! This module is **one possible UI client** for shelf. It is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing and form validation
//! - Formats output for human consumption
//!
//! ## Data Directory
//!
//! The inventory lives in one directory, picked in this order:
//!
//! 1. `--data-dir DIR`
//! 2. the `SHELF_DATA` environment variable
//! 3. the platform data directory (`directories::ProjectDirs`)
//!
//! ## Ids
//!
//! Every command taking an id also accepts a unique prefix of it. Tables print the
//! first eight characters, which is almost always enough.
//!
//! ## Output
//!
//! `--output text` (default) renders tables and colored messages. `--output json`
//! prints the whole `CmdResult` instead, for scripting.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `print`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
