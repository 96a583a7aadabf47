//! Sample directory content inserted by the `seed_advocates` binary.

use crate::domain::advocate::NewAdvocate;
use crate::repository::AdvocateWriter;
use crate::repository::errors::{RepositoryError, RepositoryResult};

const SPECIALTIES: [&str; 12] = [
    "Bipolar",
    "LGBTQ",
    "Medication/Prescribing",
    "Suicide History/Attempts",
    "General Mental Health (anxiety, depression, stress, grief, life transitions)",
    "Men's issues",
    "Relationship Issues (family, friends, couple, etc)",
    "Trauma & PTSD",
    "Personality disorders",
    "Chronic pain",
    "Weight loss & nutrition",
    "Sleep issues",
];

/// (first name, last name, city, degree, years of experience, phone)
const PEOPLE: [(&str, &str, &str, &str, i32, i64); 15] = [
    ("John", "Doe", "New York", "MD", 10, 5551234567),
    ("Jane", "Smith", "Los Angeles", "PhD", 8, 5559876543),
    ("Alice", "Johnson", "Chicago", "MSW", 5, 5554567890),
    ("Michael", "Brown", "Houston", "MD", 12, 5556543210),
    ("Emily", "Davis", "Phoenix", "PhD", 7, 5553210987),
    ("Chris", "Martinez", "Philadelphia", "MSW", 9, 5557890123),
    ("Jessica", "Taylor", "San Antonio", "MD", 11, 5554561234),
    ("David", "Harris", "San Diego", "PhD", 6, 5557896543),
    ("Laura", "Clark", "Dallas", "MSW", 4, 5550123456),
    ("Daniel", "Lewis", "San Jose", "MD", 13, 5553217654),
    ("Sarah", "Lee", "Austin", "PhD", 10, 5551238765),
    ("James", "King", "Jacksonville", "MSW", 5, 5556540987),
    ("Megan", "Green", "San Francisco", "MD", 14, 5553216543),
    ("Joshua", "Walker", "Columbus", "PhD", 9, 5556781234),
    ("Amanda", "Hall", "Fort Worth", "MSW", 3, 5559872345),
];

/// Deterministic sample of advocates, each with a rotating slice of
/// specialties.
pub fn sample_advocates() -> Vec<NewAdvocate> {
    PEOPLE
        .iter()
        .enumerate()
        .filter_map(|(i, (first, last, city, degree, years, phone))| {
            let count = 1 + i % 3;
            let specialties = (0..count)
                .map(|k| SPECIALTIES[(i * 2 + k) % SPECIALTIES.len()].to_string())
                .collect();
            NewAdvocate::new(first, last, city, degree, specialties, *years, *phone)
                .inspect_err(|err| log::warn!("Skipping sample advocate {first} {last}: {err}"))
                .ok()
        })
        .collect()
}

/// Inserts the sample advocates, returning the number of rows written.
pub fn seed_advocates<R>(repo: &R) -> RepositoryResult<usize>
where
    R: AdvocateWriter + ?Sized,
{
    let advocates = sample_advocates();
    if advocates.is_empty() {
        return Err(RepositoryError::ValidationError(
            "no valid sample advocates".to_string(),
        ));
    }
    repo.create_advocates(&advocates)
}
