//! Main menu: choice parsing and the read-eval loop

use crate::analysis::{print_gender_statistics, tally_genders, GenderTally};
use crate::console::Console;
use crate::data::CustomerStore;
use crate::ops;
use crate::viz;
use log::{error, info};
use std::io::{BufRead, Write};
use std::path::PathBuf;

const MENU_TEXT: &str = "\nMain Menu:\n\
1. Add a New Customer\n\
2. Display Customer Data\n\
3. Save Data\n\
4. Search Customer\n\
5. Analyze and Visualize Data\n\
6. Delete Customer by ID\n\
7. Exit";

const CHOICE_PROMPT: &str = "Enter your choice (1/2/3/4/5/6/7): ";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Insert,
    Display,
    Save,
    Search,
    Analyze,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Parse the operator's raw input; only the exact digits 1-7 are accepted
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Insert),
            "2" => Some(MenuChoice::Display),
            "3" => Some(MenuChoice::Save),
            "4" => Some(MenuChoice::Search),
            "5" => Some(MenuChoice::Analyze),
            "6" => Some(MenuChoice::Delete),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// File locations used by a session
#[derive(Debug, Clone)]
pub struct SessionPaths {
    /// CSV file for save and analysis
    pub data: PathBuf,
    /// PNG file the pie chart is written to
    pub chart: PathBuf,
}

/// Save the store, reporting failure without ending the session
fn save<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &CustomerStore,
    paths: &SessionPaths,
) -> crate::Result<()> {
    match store.save(&paths.data) {
        Ok(()) => console.say("Data saved."),
        Err(err) => {
            error!("Save failed: {:#}", err);
            console.say(format!("Could not save data: {:#}", err))
        }
    }
}

/// Tabulate genders from the saved file and render the chart
fn analyze<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    paths: &SessionPaths,
) -> crate::Result<()> {
    let tally = match tally_genders(&paths.data) {
        Ok(tally) => tally,
        Err(err) => {
            error!("Analysis failed: {:#}", err);
            return console.say(format!("Could not analyze data: {:#}", err));
        }
    };

    let total = tally.total();
    match tally {
        GenderTally::MissingColumn => console.say("The data does not have a 'Gender' column."),
        GenderTally::NoData => console.say("No gender data available for analysis."),
        GenderTally::Counts(counts) => {
            info!("Analyzed {} customers", total);
            print_gender_statistics(console, &counts)?;
            let chart_path = paths.chart.to_string_lossy();
            match viz::create_gender_pie_chart(&counts, &chart_path) {
                Ok(()) => console.say(format!("Gender distribution chart saved to: {}", chart_path)),
                Err(err) => {
                    error!("Chart rendering failed: {:#}", err);
                    console.say(format!("Could not render chart: {:#}", err))
                }
            }
        }
    }
}

/// Run the menu until the operator exits or input ends.
///
/// Returns the store as it stood when the loop ended.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut store: CustomerStore,
    paths: &SessionPaths,
) -> crate::Result<CustomerStore> {
    loop {
        console.say(MENU_TEXT)?;
        let Some(input) = console.read_line(CHOICE_PROMPT)? else {
            info!("Input closed, leaving menu");
            console.say("\nExiting the program.")?;
            return Ok(store);
        };

        match MenuChoice::parse(&input) {
            Some(MenuChoice::Insert) => ops::insert_record(console, &mut store)?,
            Some(MenuChoice::Display) => ops::display_customer_data(console, &store)?,
            Some(MenuChoice::Save) => save(console, &store, paths)?,
            Some(MenuChoice::Search) => ops::search_customer(console, &store)?,
            Some(MenuChoice::Analyze) => analyze(console, paths)?,
            Some(MenuChoice::Delete) => ops::delete_customer(console, &mut store)?,
            Some(MenuChoice::Exit) => {
                console.say("Exiting the program.")?;
                return Ok(store);
            }
            None => console.say("Invalid choice. Please enter a valid option (1/2/3/4/5/6/7).")?,
        }
    }
}
