//! custreg: a single-user terminal registry of customer records
//!
//! Records are loaded from a CSV file, edited through an interactive menu,
//! saved back on request, and summarised as a gender pie chart.

pub mod analysis;
pub mod cli;
pub mod console;
pub mod data;
pub mod menu;
pub mod model;
pub mod ops;
pub mod validate;
pub mod viz;

// Re-export public items for easier access
pub use analysis::{tally_genders, GenderCount, GenderTally};
pub use cli::Args;
pub use console::Console;
pub use data::CustomerStore;
pub use menu::{MenuChoice, SessionPaths};
pub use model::{Customer, Gender};
pub use validate::ValidationError;
pub use viz::create_gender_pie_chart;

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
