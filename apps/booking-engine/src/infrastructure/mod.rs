//! Infrastructure layer - adapters for the domain ports.

pub mod http;
pub mod persistence;
