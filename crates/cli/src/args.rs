//! Command-line arguments.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "stockbook",
    version,
    about = "In-memory inventory tracker with an audit trail"
)]
pub struct Cli {
    /// Start with an empty catalog instead of the demo products.
    #[arg(long)]
    pub no_demo: bool,

    /// Render catalog and history output as JSON documents.
    #[arg(long)]
    pub json: bool,
}
