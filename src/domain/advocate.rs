use serde::{Deserialize, Serialize};

use crate::domain::types::{AdvocateId, NonEmptyString, TypeConstraintError};

/// One entry of the advocate directory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Advocate {
    pub id: AdvocateId,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// Ordered list of specialties; may be empty.
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    /// Phone number digits without any formatting.
    pub phone_number: i64,
}

impl Advocate {
    /// Renders the specialties the same way they are stored, as a JSON array.
    pub fn specialties_text(&self) -> String {
        specialties_to_text(&self.specialties)
    }
}

/// Serializes a list of specialties into its stored JSON form.
pub fn specialties_to_text(specialties: &[String]) -> String {
    serde_json::to_string(specialties).unwrap_or_else(|_| "[]".to_string())
}

/// Record accepted by the seeding tool.
#[derive(Clone, Debug, Deserialize)]
pub struct NewAdvocate {
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

impl NewAdvocate {
    /// Builds a new record, trimming text fields and rejecting blank names or
    /// negative experience.
    pub fn new(
        first_name: &str,
        last_name: &str,
        city: &str,
        degree: &str,
        specialties: Vec<String>,
        years_of_experience: i32,
        phone_number: i64,
    ) -> Result<Self, TypeConstraintError> {
        if years_of_experience < 0 {
            return Err(TypeConstraintError::NegativeValue);
        }
        Ok(Self {
            first_name: NonEmptyString::new(first_name)?.into_inner(),
            last_name: NonEmptyString::new(last_name)?.into_inner(),
            city: city.trim().to_string(),
            degree: degree.trim().to_string(),
            specialties: specialties
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            years_of_experience,
            phone_number,
        })
    }
}
