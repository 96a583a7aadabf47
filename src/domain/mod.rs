//! Domain types exposed by the directory service layer.

pub mod advocate;
pub mod search;
pub mod types;
