//! Bookshelf application library
//!
//! Application modules plus the bootstrap shared by the server binary and
//! the CLI.

pub mod bootstrap;
pub mod modules;

pub use bootstrap::App;
