//! custreg: interactive customer registry
//!
//! Loads the customer file, then hands control to the menu loop until the
//! operator exits.

use anyhow::Result;
use clap::Parser;
use custreg::{menu, Args, Console, CustomerStore};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    if args.verbose {
        println!("custreg - Customer Registry");
        println!("===========================\n");
    }

    // A missing or malformed file ends the program before the menu starts
    let store = CustomerStore::load(&args.data)?;
    if args.verbose {
        println!("Loaded {} customers from {}", store.len(), args.data.display());
    }

    let mut console = Console::stdio();
    menu::run(&mut console, store, &args.session_paths())?;

    Ok(())
}
