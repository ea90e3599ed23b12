//! Interactive menu loop
//!
//! A single-threaded, blocking request/response loop: print the menu, read
//! one line, run the chosen operation to completion, loop. Reader and writer
//! are injected so tests can drive the loop with scripted input.
//!
//! Every operational error is printed and control returns to the menu;
//! nothing propagates out of the loop except I/O failure on the streams
//! themselves.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::format_contact_details;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::ContactField;
use crate::services::ContactService;
use crate::storage::Storage;

/// The interactive address book menu
pub struct Menu<'a, R: BufRead, W: Write> {
    storage: &'a Storage,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a new menu over the given input/output streams
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            storage,
            settings,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> AddressBookResult<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Address Book Menu:")?;
            writeln!(self.output, "  1. Add New Contact")?;
            writeln!(self.output, "  2. Search for a Contact")?;
            writeln!(self.output, "  3. Update a Contact")?;
            writeln!(self.output, "  4. Delete a Contact")?;
            writeln!(self.output, "  5. Exit")?;

            let choice = match self.prompt("Choice: ")? {
                Some(line) => line,
                None => break, // input stream closed
            };

            let result = match choice.trim() {
                "1" => self.handle_add(),
                "2" => self.handle_search(),
                "3" => self.handle_update(),
                "4" => self.handle_delete(),
                // Any other choice exits, as in the menu text
                _ => {
                    writeln!(self.output, "Goodbye.")?;
                    break;
                }
            };

            if let Err(err) = result {
                match err {
                    AddressBookError::Input(_) => break,
                    err => writeln!(self.output, "Error: {}", err)?,
                }
            }
        }

        Ok(())
    }

    fn handle_add(&mut self) -> AddressBookResult<()> {
        let first_name = self.prompt_required("First name: ")?;
        let last_name = self.prompt_required("Last name: ")?;
        let phone_number = self.prompt_required("Phone number: ")?;
        let email_address = self.prompt_required("Email address: ")?;

        let service = ContactService::new(self.storage);
        let outcome = service.add(&first_name, &last_name, &phone_number, &email_address)?;

        if outcome.replaced.is_some() {
            writeln!(
                self.output,
                "Replaced existing contact under key {}.",
                outcome.key
            )?;
        } else {
            writeln!(self.output, "Added contact {}.", outcome.key)?;
        }

        Ok(())
    }

    fn handle_search(&mut self) -> AddressBookResult<()> {
        if let Some((key, contact)) = self.search_by_prompt()? {
            write!(
                self.output,
                "{}",
                format_contact_details(&key, &contact, &self.settings.date_format)
            )?;
        }
        Ok(())
    }

    fn handle_update(&mut self) -> AddressBookResult<()> {
        let (key, contact) = match self.search_by_prompt()? {
            Some(found) => found,
            None => return Ok(()),
        };

        writeln!(self.output, "What would you like to change?")?;
        writeln!(self.output, "  1. First name")?;
        writeln!(self.output, "  2. Last name")?;
        writeln!(self.output, "  3. Phone number")?;
        writeln!(self.output, "  4. Email address")?;
        let choice = self.prompt_required("Choice: ")?;

        let field = match ContactField::from_menu_choice(&choice) {
            Some(field) => field,
            None => {
                writeln!(self.output, "No change made.")?;
                return Ok(());
            }
        };

        writeln!(self.output, "Current {}: {}", field, contact.field(field))?;
        let new_value = self.prompt_required(&format!("New {}: ", field))?;

        let service = ContactService::new(self.storage);
        service.update_field(&key, field, &new_value)?;
        writeln!(self.output, "Updated {} of {}.", field, key)?;

        Ok(())
    }

    fn handle_delete(&mut self) -> AddressBookResult<()> {
        let (key, contact) = match self.search_by_prompt()? {
            Some(found) => found,
            None => return Ok(()),
        };

        write!(
            self.output,
            "{}",
            format_contact_details(&key, &contact, &self.settings.date_format)
        )?;

        if self.confirm(&format!(
            "Are you sure you would like to delete {}? (yes/no): ",
            key
        ))? {
            let service = ContactService::new(self.storage);
            service.delete(&key)?;
            writeln!(self.output, "Deleted {}.", key)?;
        } else {
            writeln!(self.output, "Delete cancelled.")?;
        }

        Ok(())
    }

    /// Prompt for a first/last name pair and look it up; prints the
    /// not-found message itself
    fn search_by_prompt(&mut self) -> AddressBookResult<Option<(String, crate::models::Contact)>> {
        let first_name = self.prompt_required("First name: ")?;
        let last_name = self.prompt_required("Last name: ")?;

        let service = ContactService::new(self.storage);
        match service.search(&first_name, &last_name)? {
            Some(found) => Ok(Some(found)),
            None => {
                writeln!(self.output, "No contact found.")?;
                Ok(None)
            }
        }
    }

    /// Ask a yes/no question, re-prompting on invalid answers up to the
    /// configured retry limit; exhausted retries count as "no"
    fn confirm(&mut self, question: &str) -> AddressBookResult<bool> {
        // Bounded loop, never recursion: pathological input streams must
        // not grow the call stack
        for _ in 0..=self.settings.confirm_max_retries {
            match self.prompt_required(question)?.trim().to_lowercase().as_str() {
                "yes" => return Ok(true),
                "no" => return Ok(false),
                _ => writeln!(self.output, "Please type yes or no.")?,
            }
        }

        writeln!(self.output, "No valid answer given.")?;
        Ok(false)
    }

    /// Prompt for one line of input; `None` when the stream has ended
    ///
    /// Only the line ending is stripped. Field values are stored verbatim,
    /// surrounding whitespace included; menu choices and confirmations trim
    /// at their use sites.
    fn prompt(&mut self, label: &str) -> AddressBookResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt for one line, treating end of input as an error that unwinds
    /// the current operation
    fn prompt_required(&mut self, label: &str) -> AddressBookResult<String> {
        self.prompt(label)?
            .ok_or_else(|| AddressBookError::Input("input stream closed".into()))
    }
}
