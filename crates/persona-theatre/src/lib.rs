//! Core crate for the Absurd Theatre assessment: question catalog, scoring,
//! archetype classification, and the HTTP router the API service wraps.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
