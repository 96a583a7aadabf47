use diesel::prelude::*;

use crate::domain::advocate::{
    Advocate as DomainAdvocate, NewAdvocate as DomainNewAdvocate, specialties_to_text,
};
use crate::domain::types::{AdvocateId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::advocates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::advocate::Advocate`].
pub struct Advocate {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub degree: String,
    /// JSON array of strings.
    pub specialties: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::advocates)]
/// Insertable form of [`Advocate`].
pub struct NewAdvocate<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub city: &'a str,
    pub degree: &'a str,
    pub specialties: String,
    pub years_of_experience: i32,
    pub phone_number: i64,
}

/// Decodes the stored specialties column; anything but a JSON string array
/// is read as an empty list.
fn parse_specialties(id: i32, raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("Advocate {id} has malformed specialties ({err}), treating as empty");
            Vec::new()
        }
    }
}

impl TryFrom<Advocate> for DomainAdvocate {
    type Error = TypeConstraintError;

    fn try_from(advocate: Advocate) -> Result<Self, Self::Error> {
        let specialties = parse_specialties(advocate.id, &advocate.specialties);
        Ok(Self {
            id: AdvocateId::new(advocate.id)?,
            first_name: advocate.first_name,
            last_name: advocate.last_name,
            city: advocate.city,
            degree: advocate.degree,
            specialties,
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
        })
    }
}

impl<'a> From<&'a DomainNewAdvocate> for NewAdvocate<'a> {
    fn from(advocate: &'a DomainNewAdvocate) -> Self {
        Self {
            first_name: advocate.first_name.as_str(),
            last_name: advocate.last_name.as_str(),
            city: advocate.city.as_str(),
            degree: advocate.degree.as_str(),
            specialties: specialties_to_text(&advocate.specialties),
            years_of_experience: advocate.years_of_experience,
            phone_number: advocate.phone_number,
        }
    }
}
