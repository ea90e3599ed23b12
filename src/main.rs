use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};

use addressbook::config::{paths::AddressBookPaths, settings::Settings};
use addressbook::display::format_contact_list;
use addressbook::menu::Menu;
use addressbook::services::ContactService;
use addressbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "addrbook",
    version,
    about = "Menu-driven terminal address book",
    long_about = "A small terminal address book. Contacts are stored in a single \
                  JSON file and managed through an interactive menu of sequential \
                  prompts. Run without a subcommand to open the menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all contacts as a table
    List,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = AddressBookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage; a corrupt contacts file is fatal here
    let mut storage = Storage::new(&paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::List) => {
            let service = ContactService::new(&storage);
            let contacts = service.list()?;
            print!("{}", format_contact_list(&contacts));
        }
        Some(Commands::Config) => {
            println!("Address Book Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Contacts file:  {}", paths.contacts_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Confirm max retries: {}", settings.confirm_max_retries);
            println!("  Date format:         {}", settings.date_format);
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut menu = Menu::new(&storage, &settings, stdin.lock(), stdout.lock());
            menu.run()?;
        }
    }

    Ok(())
}
