//! Field validators and duplicate detection
//!
//! Every validator is a pure function: it either returns the accepted value
//! or a [`ValidationError`] whose message is what the operator is shown
//! before being asked again. Re-prompting lives in [`crate::console`].

use crate::model::{Customer, Gender};
use std::collections::HashSet;
use thiserror::Error;

/// Total length of a phone number including the leading `+`
pub const PHONE_LEN: usize = 13;
/// Total length of a person ID
pub const PERSON_ID_LEN: usize = 7;
/// Number of leading letters in a person ID
const PERSON_ID_LETTERS: usize = 2;

/// Reason a field value was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid email address. Please include '@' and '.' in the email address.")]
    InvalidEmail,

    #[error("Phone number must start with '+' and contain 12 digits (e.g., +421123456789).")]
    InvalidPhone,

    #[error("Person ID must start with 2 letters followed by 5 numbers (e.g., AB12345).")]
    InvalidPersonId,

    #[error("Person ID already exists. Please enter a unique Person ID.")]
    DuplicatePersonId,

    #[error("Invalid input. Please enter 'M' for Man or 'W' for Woman.")]
    InvalidGender,
}

/// Accept any string containing both `@` and `.`
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    if email.contains('@') && email.contains('.') {
        Ok(email.to_string())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Accept `+` followed by exactly 12 ASCII digits
pub fn validate_phone(phone: &str) -> Result<String, ValidationError> {
    let valid = phone.chars().count() == PHONE_LEN
        && phone
            .strip_prefix('+')
            .is_some_and(|digits| digits.chars().all(|c| c.is_ascii_digit()));

    if valid {
        Ok(phone.to_string())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Accept two letters followed by five digits that are not already taken.
///
/// Letters are not case-normalised: `ab12345` is accepted and stored as typed.
pub fn validate_person_id(
    person_id: &str,
    existing_ids: &HashSet<String>,
) -> Result<String, ValidationError> {
    if existing_ids.contains(person_id) {
        return Err(ValidationError::DuplicatePersonId);
    }

    let chars: Vec<char> = person_id.chars().collect();
    let well_formed = chars.len() == PERSON_ID_LEN
        && chars[..PERSON_ID_LETTERS].iter().all(|c| c.is_alphabetic())
        && chars[PERSON_ID_LETTERS..].iter().all(|c| c.is_ascii_digit());

    if well_formed {
        Ok(person_id.to_string())
    } else {
        Err(ValidationError::InvalidPersonId)
    }
}

/// Accept exactly `M` or `W`
pub fn validate_gender(gender: &str) -> Result<Gender, ValidationError> {
    match gender {
        "M" => Ok(Gender::Male),
        "W" => Ok(Gender::Female),
        _ => Err(ValidationError::InvalidGender),
    }
}

/// Membership sets of the unique fields currently in the store
#[derive(Debug, Default)]
pub struct UniqueFields {
    pub ids: HashSet<String>,
    pub emails: HashSet<String>,
    pub phones: HashSet<String>,
}

impl UniqueFields {
    pub fn from_records(records: &[Customer]) -> Self {
        let mut fields = Self::default();
        for record in records {
            fields.ids.insert(record.person_id.clone());
            fields.emails.insert(record.email.clone());
            fields.phones.insert(record.phone.clone());
        }
        fields
    }

    /// True when the candidate's ID, email or phone is already in use
    pub fn collides_with(&self, candidate: &Customer) -> bool {
        self.ids.contains(&candidate.person_id)
            || self.emails.contains(&candidate.email)
            || self.phones.contains(&candidate.phone)
    }
}
