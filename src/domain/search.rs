//! Search predicates applied to the advocate list.
//!
//! A [`AdvocateFilter`] is assembled from the search term before any query
//! runs: it is the explicit list of predicates a record must satisfy at least
//! one of. The repository translates each predicate into a SQL condition,
//! while [`AdvocateFilter::matches`] evaluates the same list in memory.

use crate::domain::advocate::Advocate;
use crate::domain::types::SearchTerm;

/// Character used to escape LIKE wildcards in search patterns.
pub const LIKE_ESCAPE: char = '\\';

/// Record attribute a predicate inspects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchField {
    FirstName,
    LastName,
    City,
    Degree,
    /// The specialties list rendered as its stored JSON text.
    Specialties,
    /// The phone number rendered as decimal digits.
    PhoneNumber,
}

impl SearchField {
    /// Fields every non-empty search is matched against.
    pub const TEXT_FIELDS: [SearchField; 5] = [
        SearchField::FirstName,
        SearchField::LastName,
        SearchField::City,
        SearchField::Degree,
        SearchField::Specialties,
    ];

    fn text_of(self, advocate: &Advocate) -> std::borrow::Cow<'_, str> {
        use std::borrow::Cow;

        match self {
            SearchField::FirstName => Cow::Borrowed(advocate.first_name.as_str()),
            SearchField::LastName => Cow::Borrowed(advocate.last_name.as_str()),
            SearchField::City => Cow::Borrowed(advocate.city.as_str()),
            SearchField::Degree => Cow::Borrowed(advocate.degree.as_str()),
            SearchField::Specialties => Cow::Owned(advocate.specialties_text()),
            SearchField::PhoneNumber => Cow::Owned(advocate.phone_number.to_string()),
        }
    }
}

/// Case-insensitive substring test against a single field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchPredicate {
    field: SearchField,
    needle: String,
}

impl SearchPredicate {
    pub fn new(field: SearchField, term: &SearchTerm) -> Self {
        Self {
            field,
            needle: term.as_str().to_lowercase(),
        }
    }

    pub fn field(&self) -> SearchField {
        self.field
    }

    /// Evaluates the predicate against a record.
    ///
    /// Both sides are lower-cased with full Unicode rules, like the SQL
    /// filter does through `unicode_lower`.
    pub fn matches(&self, advocate: &Advocate) -> bool {
        self.field
            .text_of(advocate)
            .to_lowercase()
            .contains(&self.needle)
    }
}

/// OR-combination of search predicates derived from a search term.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvocateFilter {
    term: SearchTerm,
    predicates: Vec<SearchPredicate>,
}

impl AdvocateFilter {
    /// Builds the predicate list for `term`.
    ///
    /// An empty term yields no predicates. The phone predicate is only added
    /// when the term is made of digits alone.
    pub fn new(term: SearchTerm) -> Self {
        if term.is_empty() {
            return Self {
                term,
                predicates: Vec::new(),
            };
        }

        let mut predicates: Vec<SearchPredicate> = SearchField::TEXT_FIELDS
            .iter()
            .map(|field| SearchPredicate::new(*field, &term))
            .collect();

        if term.is_digits() {
            predicates.push(SearchPredicate::new(SearchField::PhoneNumber, &term));
        }

        Self { term, predicates }
    }

    pub fn term(&self) -> &SearchTerm {
        &self.term
    }

    pub fn predicates(&self) -> &[SearchPredicate] {
        &self.predicates
    }

    /// True when the filter lets every record through.
    pub fn is_unfiltered(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Evaluates the filter in memory.
    pub fn matches(&self, advocate: &Advocate) -> bool {
        self.is_unfiltered() || self.predicates.iter().any(|p| p.matches(advocate))
    }

    /// `%term%` with LIKE wildcards escaped by [`LIKE_ESCAPE`].
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.term.as_str().len() + 2);
        pattern.push('%');
        for c in self.term.as_str().chars() {
            if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
                pattern.push(LIKE_ESCAPE);
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}
