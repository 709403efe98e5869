//! Gender distribution computed with Polars from the saved CSV file
//!
//! The report always reads the file on disk, so it reflects the last save
//! and not any unsaved changes in the running session.

use crate::console::Console;
use crate::model::GENDER_COLUMN;
use anyhow::Context;
use log::debug;
use polars::prelude::*;
use std::io::{BufRead, Write};
use std::path::Path;

/// Number of customers per gender code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderCount {
    pub category: String,
    pub count: u64,
}

/// Result of tabulating the gender column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenderTally {
    /// The file has no gender column
    MissingColumn,
    /// The column exists but holds no values
    NoData,
    /// Counts ordered by descending count, then by category
    Counts(Vec<GenderCount>),
}

impl GenderTally {
    pub fn total(&self) -> u64 {
        match self {
            GenderTally::Counts(counts) => counts.iter().map(|c| c.count).sum(),
            _ => 0,
        }
    }
}

/// Read `file_path` and count customers per gender value.
///
/// Every column is read as a string. An empty gender cell is counted as its
/// own category, the empty string.
pub fn tally_genders(file_path: impl AsRef<Path>) -> crate::Result<GenderTally> {
    let path = file_path.as_ref();
    let mut lf = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()
        .with_context(|| format!("Failed to read customer file {}", path.display()))?;

    let schema = lf.schema()?;
    if schema.get(GENDER_COLUMN).is_none() {
        return Ok(GenderTally::MissingColumn);
    }

    let df = lf
        .with_column(col(GENDER_COLUMN).fill_null(lit("")))
        .group_by([col(GENDER_COLUMN)])
        .agg([len().alias("count")])
        .collect()
        .with_context(|| format!("Failed to count genders in {}", path.display()))?;

    debug!("Gender groups: {}", df.height());
    if df.height() == 0 {
        return Ok(GenderTally::NoData);
    }

    let categories = df.column(GENDER_COLUMN)?.str()?;
    let counts = df.column("count")?.cast(&DataType::UInt64)?;

    let mut tally: Vec<GenderCount> = categories
        .into_iter()
        .zip(counts.u64()?.into_no_null_iter())
        .filter_map(|(category, count)| {
            category.map(|category| GenderCount {
                category: category.to_string(),
                count,
            })
        })
        .collect();

    if tally.is_empty() {
        return Ok(GenderTally::NoData);
    }
    tally.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));

    Ok(GenderTally::Counts(tally))
}

/// Print counts with their share of the total
pub fn print_gender_statistics<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    counts: &[GenderCount],
) -> crate::Result<()> {
    let total: u64 = counts.iter().map(|c| c.count).sum();
    console.say("\n=== Gender Distribution ===")?;
    console.say(format!("Total customers: {}", total))?;
    for entry in counts {
        let percentage = (entry.count as f64 / total as f64) * 100.0;
        console.say(format!(
            "  {}: {} customers ({:.1}%)",
            entry.category, entry.count, percentage
        ))?;
    }
    Ok(())
}
