//! `stockbook-cli` — the interactive menu frontend.
//!
//! Everything here is I/O glue: argument parsing, prompting, output
//! formatting, demo seeding. The catalog and its audit trail are only ever
//! touched through their public operations, and operator input that fails to
//! parse is handled here (re-prompt or keep-current), never passed down.

pub mod args;
pub mod format;
pub mod menu;
pub mod seed;
