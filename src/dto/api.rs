//! DTOs exposed by the `/api/advocates` endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::advocate::Advocate;

/// Query parameters accepted by `GET /api/advocates`.
///
/// Values stay raw strings so that malformed numbers fall back to defaults
/// instead of failing extraction.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AdvocatesQuery {
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
    pub q: Option<String>,
}

/// Wire representation of an advocate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocateDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    pub specialties: Vec<String>,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

impl From<Advocate> for AdvocateDto {
    fn from(advocate: Advocate) -> Self {
        Self {
            id: advocate.id.get(),
            first_name: advocate.first_name,
            last_name: advocate.last_name,
            city: advocate.city,
            degree: advocate.degree,
            specialties: advocate.specialties,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
        }
    }
}

/// Pagination metadata echoed with every list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocatesMeta {
    pub page: usize,
    pub page_size: usize,
    /// Matching records before pagination.
    pub total: usize,
    pub total_pages: usize,
    /// The trimmed search term that was applied.
    pub q: String,
}

/// Result payload returned by [`crate::services::advocates::list_advocates`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvocatesResponse {
    pub data: Vec<AdvocateDto>,
    pub meta: AdvocatesMeta,
}

/// Body of every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
