//! Record store backed by a CSV file

use crate::model::{Customer, HEADER};
use anyhow::Context;
use csv::{ReaderBuilder, Writer};
use log::{debug, info};
use std::path::Path;

/// In-memory, ordered collection of customer records
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CustomerStore {
    records: Vec<Customer>,
}

impl CustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every row of `file_path`, keeping file order.
    ///
    /// The header row must name all five columns. A missing file or a row
    /// that cannot be mapped onto the header is an error.
    pub fn load(file_path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = file_path.as_ref();
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .with_context(|| format!("Failed to open customer file {}", path.display()))?;

        let mut records = Vec::new();
        for (row_num, row) in reader.deserialize::<Customer>().enumerate() {
            let record = row.with_context(|| {
                format!("Malformed row {} in {}", row_num + 1, path.display())
            })?;
            records.push(record);
        }

        info!("Loaded {} customers from {}", records.len(), path.display());
        Ok(Self { records })
    }

    /// Overwrite `file_path` with the header and one row per record.
    ///
    /// The file is truncated and rewritten in place, so an interrupted write
    /// leaves it incomplete.
    pub fn save(&self, file_path: impl AsRef<Path>) -> crate::Result<()> {
        let path = file_path.as_ref();
        let mut writer = Writer::from_path(path)
            .with_context(|| format!("Failed to create customer file {}", path.display()))?;

        // Written explicitly so an empty store still produces a header row
        writer.write_record(HEADER)?;
        for record in &self.records {
            writer.write_record([
                &record.full_name,
                &record.person_id,
                &record.email,
                &record.phone,
                &record.gender,
            ])?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to write customer file {}", path.display()))?;

        info!("Saved {} customers to {}", self.records.len(), path.display());
        Ok(())
    }

    pub fn records(&self) -> &[Customer] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record at the end
    pub fn push(&mut self, record: Customer) {
        debug!("Appending customer {}", record.person_id);
        self.records.push(record);
    }

    /// Remove the first record whose ID equals `person_id` exactly
    pub fn remove_by_id(&mut self, person_id: &str) -> Option<Customer> {
        let index = self
            .records
            .iter()
            .position(|record| record.person_id == person_id)?;
        Some(self.records.remove(index))
    }

    /// Records whose name or ID contains `query` ignoring case, or whose
    /// phone number contains it verbatim.
    pub fn search(&self, query: &str) -> Vec<&Customer> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|record| {
                record.full_name.to_lowercase().contains(&query)
                    || record.person_id.to_lowercase().contains(&query)
                    || record.phone.contains(&query)
            })
            .collect()
    }
}

impl From<Vec<Customer>> for CustomerStore {
    fn from(records: Vec<Customer>) -> Self {
        Self { records }
    }
}
