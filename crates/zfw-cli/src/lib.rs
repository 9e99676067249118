//! Max ZFW checker CLI library.
//!
//! Command handlers, terminal styling and output formatting for the `zfw-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
