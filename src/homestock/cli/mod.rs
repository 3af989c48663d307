//! # CLI Layer
//!
//! One possible UI client for homestock. This is the only place that:
//! - Parses shell arguments (clap)
//! - Writes to stdout/stderr and prompts the user
//! - Installs the tracing subscriber
//!
//! ## Structure
//!
//! - [`setup`]: clap definitions and grouped help
//! - [`commands`]: `run()` plus one `handle_*()` per subcommand
//! - [`render`]: turns `CmdResult` views into terminal text
//!
//! Render functions return `String`s so they can be tested without a
//! terminal. Business rules are tested in the library, not here.

mod commands;
mod render;
mod setup;

pub use commands::run;
