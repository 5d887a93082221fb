mod config;
mod db;
mod error;
mod ledger;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;

use crate::db::{Database, KeyValueStore, MemoryStore};

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().collect();
    let in_memory = take_flag(&mut args, "--memory");

    let config = config::Config::from_env()?;
    logging::init_logging(&config)?;

    let store: Box<dyn KeyValueStore> = if in_memory {
        tracing::info!("using in-memory store");
        Box::new(MemoryStore::new())
    } else {
        Box::new(Database::open(&config.db_path)?)
    };
    let ledger = ledger::Ledger::open(store);

    match args.len() {
        1 => run::as_tui(ledger),
        _ => run::as_cli(&args, ledger),
    }
}

/// Remove every occurrence of `flag` from `args`, reporting whether it was present.
fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}
