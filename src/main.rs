//! Contact Book - Main entry point
//!
//! Opens the configured contact database and prints every stored contact.

use anyhow::Result;
use contact_book::{Config, ContactRepository, JsonFileStore};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only, contacts go to stdout)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Opening contact database at {}", config.db_path.display());

    let store = match JsonFileStore::open_table(config.db_path.clone(), config.table.as_str()) {
        Ok(store) => store,
        Err(e) => {
            error!("Failed to open contact database: {}", e);
            return Err(e.into());
        }
    };

    let repo = ContactRepository::new(store);
    let contacts = repo.list_all()?;
    info!("Loaded {} contacts", contacts.len());

    let listing: Vec<String> = contacts.iter().map(|c| c.to_string()).collect();
    if !listing.is_empty() {
        println!("{}", listing.join("\n\n"));
    }

    Ok(())
}
