//! Address Book - demonstration entry point
//!
//! Builds a small address book, edits and deletes entries, and prints the
//! listings to stdout.

use address_book::{AddressBook, Config, OutputFormat, Record};
use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr so stdout only carries the listings
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(output = ?config.output_format, "Configuration loaded successfully");

    if let Err(e) = run(&config) {
        error!("Demo failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}

fn run(config: &Config) -> Result<()> {
    let mut book = AddressBook::new();

    let mut andriy = Record::new("Andriy");
    andriy.add_phone("0981234567")?;
    andriy.add_phone("0509876543")?;
    book.add_record(andriy);

    let mut maria = Record::new("Maria");
    maria.add_phone("0675554433")?;
    book.add_record(maria);

    print_book("--- All contacts in the address book ---", &book, config)?;

    if let Some(andriy) = book.find_mut("Andriy") {
        andriy.edit_phone("0981234567", "0631112233")?;
        println!("\n--- Andriy after phone edit ---");
        print_record(andriy, config)?;

        let found = andriy
            .find_phone("0509876543")
            .context("phone 0509876543 missing after edit")?;
        println!("\nFound phone in {}: {}", andriy.name(), found);
    }

    book.delete("Maria");

    println!();
    print_book("--- Address book after deleting Maria ---", &book, config)?;
    Ok(())
}

fn print_book(title: &str, book: &AddressBook, config: &Config) -> Result<()> {
    println!("{}", title);
    match config.output_format {
        OutputFormat::Text => {
            for record in book.names().into_iter().filter_map(|n| book.find(n)) {
                println!("{}", record);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(book)?),
    }
    Ok(())
}

fn print_record(record: &Record, config: &Config) -> Result<()> {
    match config.output_format {
        OutputFormat::Text => println!("{}", record),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(record)?),
    }
    Ok(())
}
