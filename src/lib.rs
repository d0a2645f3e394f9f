//! Library crate root re-exporting the launcher, configuration and shared modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod config;
pub mod launcher;
