//! Infrastructure integrations.

pub mod persistence;
