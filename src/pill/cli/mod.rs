//! # CLI Layer
//!
//! This module is **one possible UI client** for pill. It is the only place
//! that knows about stdout, stderr and exit codes.
//!
//! ## Structure
//!
//! - `setup`: clap argument definitions
//! - `commands`: `run()` dispatch, context setup and per-command handlers
//! - `render`: turns a `CmdResult` into terminal text

mod commands;
mod render;
mod setup;

pub use commands::run;
