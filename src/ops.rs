//! Interactive record operations: insert, delete, search and display

use crate::console::Console;
use crate::data::CustomerStore;
use crate::model::Customer;
use crate::validate::{
    validate_email, validate_gender, validate_person_id, validate_phone, UniqueFields,
};
use log::info;
use std::collections::HashSet;
use std::io::{BufRead, Write};

const RECORD_SEPARATOR_WIDTH: usize = 30;

const RETRY_EMAIL: &str = "Enter the corrected email address: ";
const RETRY_PHONE: &str = "Enter the corrected phone number: ";
const RETRY_PERSON_ID: &str = "Enter the corrected Person ID: ";
const RETRY_GENDER: &str = "Enter the corrected Gender (M for Man, W for Woman): ";

fn print_record<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    record: &Customer,
) -> crate::Result<()> {
    console.say(record.to_string())?;
    console.say("-".repeat(RECORD_SEPARATOR_WIDTH))
}

fn ask_email<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> crate::Result<String> {
    let first = console.ask(prompt)?;
    console.ask_until_valid(first, RETRY_EMAIL, validate_email)
}

fn ask_phone<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> crate::Result<String> {
    let first = console.ask(prompt)?;
    console.ask_until_valid(first, RETRY_PHONE, validate_phone)
}

fn ask_person_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
    existing_ids: &HashSet<String>,
) -> crate::Result<String> {
    let first = console.ask(prompt)?;
    console.ask_until_valid(first, RETRY_PERSON_ID, |id| {
        validate_person_id(id, existing_ids)
    })
}

/// Re-prompt for ID, email and phone until none of them is already taken.
///
/// Runs after the per-field validators, so a colliding ID is normally
/// caught earlier; email and phone collisions are only caught here.
pub fn resolve_duplicates<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &CustomerStore,
    candidate: &mut Customer,
) -> crate::Result<()> {
    let existing = UniqueFields::from_records(store.records());

    while existing.collides_with(candidate) {
        console.say("Duplicate ID, email, or phone number found. Please enter unique information.")?;
        candidate.person_id = ask_person_id(console, RETRY_PERSON_ID, &existing.ids)?;
        candidate.email = ask_email(console, RETRY_EMAIL)?;
        candidate.phone = ask_phone(console, RETRY_PHONE)?;
    }
    Ok(())
}

/// Prompt for a new customer and append it to the store
pub fn insert_record<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut CustomerStore,
) -> crate::Result<()> {
    let name = console.ask("Enter the customer's Name: ")?;
    let surname = console.ask("Enter the customer's Surname: ")?;
    let email = ask_email(console, "Enter the customer's Person Mail Address: ")?;
    let phone = ask_phone(
        console,
        "Enter the customer's Telephone Number (e.g., +421123456789): ",
    )?;

    let existing_ids: HashSet<String> = store
        .records()
        .iter()
        .map(|record| record.person_id.clone())
        .collect();
    let person_id = ask_person_id(
        console,
        "Enter the customer's Person ID (e.g., AB12345): ",
        &existing_ids,
    )?;

    let first = console.ask("Enter the customer's Gender (M for Man, W for Woman): ")?;
    let gender = console.ask_until_valid(first, RETRY_GENDER, validate_gender)?;

    let mut candidate = Customer::new(&name, &surname, person_id, email, phone, gender);
    resolve_duplicates(console, store, &mut candidate)?;

    info!("Inserted customer {}", candidate.person_id);
    store.push(candidate);
    Ok(())
}

/// Prompt for a person ID and remove the first matching record
pub fn delete_customer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &mut CustomerStore,
) -> crate::Result<()> {
    let person_id = console.ask("Enter the Person ID of the customer to be deleted: ")?;

    match store.remove_by_id(&person_id) {
        Some(_) => {
            info!("Deleted customer {}", person_id);
            console.say(format!("Customer with ID {} has been deleted.", person_id))
        }
        None => console.say(format!("No customer found with ID {}.", person_id)),
    }
}

/// Prompt for a query and print every matching record
pub fn search_customer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &CustomerStore,
) -> crate::Result<()> {
    let query = console.ask("Enter a name, surname, ID, or phone number to search: ")?;
    let matches = store.search(&query);

    if matches.is_empty() {
        return console.say("\nNo matches found for the provided query.");
    }
    for record in matches {
        console.say("\nMatch Found:")?;
        print_record(console, record)?;
    }
    Ok(())
}

/// Print every record in store order
pub fn display_customer_data<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &CustomerStore,
) -> crate::Result<()> {
    console.say("\nCustomer Data:")?;
    for record in store.records() {
        print_record(console, record)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: &str) -> TestConsole {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: TestConsole) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    fn jane() -> Customer {
        Customer::new(
            "Jane",
            "Doe",
            "AB12345".to_string(),
            "a@b.com".to_string(),
            "+421123456789".to_string(),
            Gender::Female,
        )
    }

    #[test]
    fn test_insert_into_empty_store() {
        let mut store = CustomerStore::new();
        let mut console = console("Jane\nDoe\na@b.com\n+421123456789\nAB12345\nM\n");

        insert_record(&mut console, &mut store).unwrap();

        assert_eq!(store.len(), 1);
        let record = &store.records()[0];
        assert_eq!(record.full_name, "Jane Doe");
        assert_eq!(record.person_id, "AB12345");
        assert_eq!(record.email, "a@b.com");
        assert_eq!(record.phone, "+421123456789");
        assert_eq!(record.gender, "M");
    }

    #[test]
    fn test_insert_reprompts_invalid_fields() {
        let mut store = CustomerStore::new();
        let mut console = console(
            "Jane\nDoe\nnot-an-email\na@b.com\n421123456789\n+421123456789\n\
             AB1234\nAB12345\nX\nW\n",
        );

        insert_record(&mut console, &mut store).unwrap();

        assert_eq!(store.records()[0].gender, "W");
        let text = output(console);
        assert!(text.contains("Invalid email address."));
        assert!(text.contains("Phone number must start with '+'"));
        assert!(text.contains("Person ID must start with 2 letters"));
        assert!(text.contains("Invalid input. Please enter 'M' for Man or 'W' for Woman."));
    }

    #[test]
    fn test_insert_duplicate_id_reprompts_in_validator() {
        let mut store = CustomerStore::from(vec![jane()]);
        let mut console = console("John\nRoe\nc@d.com\n+421000000000\nAB12345\nCD67890\nM\n");

        insert_record(&mut console, &mut store).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[1].person_id, "CD67890");
        let text = output(console);
        assert!(text.contains("Person ID already exists."));
        assert!(!text.contains("Duplicate ID, email, or phone number found."));
    }

    #[test]
    fn test_insert_duplicate_email_goes_through_checker() {
        let mut store = CustomerStore::from(vec![jane()]);
        // Email collides; checker asks for ID, email and phone again
        let mut console = console(
            "John\nRoe\na@b.com\n+421000000000\nCD67890\nM\n\
             CD67890\nc@d.com\n+421000000000\n",
        );

        insert_record(&mut console, &mut store).unwrap();

        assert_eq!(store.len(), 2);
        let added = &store.records()[1];
        assert_eq!(added.email, "c@d.com");
        assert_eq!(added.person_id, "CD67890");

        let fields = UniqueFields::from_records(&store.records()[..1]);
        assert!(!fields.collides_with(added));
        assert_eq!(
            output(console)
                .matches("Duplicate ID, email, or phone number found.")
                .count(),
            1
        );
    }

    #[test]
    fn test_insert_fails_when_input_ends() {
        let mut store = CustomerStore::new();
        let mut console = console("Jane\nDoe\nbad-email\n");
        assert!(insert_record(&mut console, &mut store).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_on_empty_store() {
        let mut store = CustomerStore::new();
        let mut console = console("AB12345\n");

        delete_customer(&mut console, &mut store).unwrap();

        assert!(store.is_empty());
        assert!(output(console).contains("No customer found with ID AB12345."));
    }

    #[test]
    fn test_delete_existing() {
        let mut store = CustomerStore::from(vec![jane()]);
        let mut console = console("AB12345\n");

        delete_customer(&mut console, &mut store).unwrap();

        assert!(store.is_empty());
        assert!(output(console).contains("Customer with ID AB12345 has been deleted."));
    }

    #[test]
    fn test_search_miss_lists_nothing() {
        let store = CustomerStore::from(vec![jane()]);
        let before = store.clone();
        let mut console = console("nobody\n");

        search_customer(&mut console, &store).unwrap();

        let text = output(console);
        assert!(text.contains("No matches found for the provided query."));
        assert!(!text.contains("Match Found:"));
        assert_eq!(store, before);
    }

    #[test]
    fn test_search_hit_prints_record() {
        let store = CustomerStore::from(vec![jane()]);
        let mut console = console("doe\n");

        search_customer(&mut console, &store).unwrap();

        let text = output(console);
        assert!(text.contains("Match Found:"));
        assert!(text.contains("Person ID: AB12345"));
    }

    #[test]
    fn test_display_prints_separator_per_record() {
        let mut second = jane();
        second.person_id = "CD67890".to_string();
        let store = CustomerStore::from(vec![jane(), second]);
        let before = store.clone();
        let mut console = console("");

        display_customer_data(&mut console, &store).unwrap();

        let text = output(console);
        assert!(text.starts_with("\nCustomer Data:\n"));
        assert_eq!(text.matches(&"-".repeat(30)).count(), 2);
        assert!(text.find("AB12345").unwrap() < text.find("CD67890").unwrap());
        assert_eq!(store, before);
    }
}
