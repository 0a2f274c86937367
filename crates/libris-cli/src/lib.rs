//! Library components of the `libris` command-line client.

pub mod config;
pub mod input;
pub mod list;
pub mod logging;
pub mod render;
