//! Database models shared across the directory repository.

pub mod advocate;
pub mod config;
