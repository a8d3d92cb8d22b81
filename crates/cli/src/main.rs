use std::io;

use clap::Parser;

use stockbook_catalog::CatalogStore;
use stockbook_cli::args::Cli;
use stockbook_cli::format::OutputMode;
use stockbook_cli::menu::MenuSession;
use stockbook_cli::seed;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    stockbook_observability::init();

    let mut store = CatalogStore::new();
    if !cli.no_demo {
        seed::seed_demo_products(&mut store);
    }

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    MenuSession::new(store, mode, stdin, stdout).run()
}
