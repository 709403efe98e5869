//! Customer record model and CSV column names

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column header for the combined name field
pub const NAME_COLUMN: &str = "Name Surname";
/// Column header for the person ID
pub const PERSON_ID_COLUMN: &str = "Person ID";
/// Column header for the email address
pub const EMAIL_COLUMN: &str = "Person Mail Address";
/// Column header for the phone number
pub const PHONE_COLUMN: &str = "Telephone Number";
/// Column header for the gender code
pub const GENDER_COLUMN: &str = "Gender";

/// Header row in file order
pub const HEADER: [&str; 5] = [
    NAME_COLUMN,
    PERSON_ID_COLUMN,
    EMAIL_COLUMN,
    PHONE_COLUMN,
    GENDER_COLUMN,
];

/// A single customer row.
///
/// Fields are kept as the strings found in the file: values are validated
/// when entered by the operator, not when loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "Name Surname")]
    pub full_name: String,
    #[serde(rename = "Person ID")]
    pub person_id: String,
    #[serde(rename = "Person Mail Address")]
    pub email: String,
    #[serde(rename = "Telephone Number")]
    pub phone: String,
    #[serde(rename = "Gender")]
    pub gender: String,
}

impl Customer {
    /// Build a record from its validated parts, joining name and surname
    /// with a single space.
    pub fn new(
        name: &str,
        surname: &str,
        person_id: String,
        email: String,
        phone: String,
        gender: Gender,
    ) -> Self {
        Self {
            full_name: format!("{} {}", name, surname),
            person_id,
            email,
            phone,
            gender: gender.code().to_string(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.full_name)?;
        writeln!(f, "Person ID: {}", self.person_id)?;
        writeln!(f, "Email Address: {}", self.email)?;
        writeln!(f, "Phone Number: {}", self.phone)?;
        write!(f, "Gender: {}", self.gender)
    }
}

/// Gender as entered by the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Single-letter code stored in the CSV file
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "W",
        }
    }
}
