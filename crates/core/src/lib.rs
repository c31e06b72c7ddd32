//! Domain core for the asset inventory.
//!
//! Holds the asset taxonomy, the candidate-asset validator, and the error
//! taxonomy shared by the persistence and HTTP layers. Nothing in this crate
//! performs I/O.

pub mod error;
pub mod taxonomy;
pub mod types;
pub mod validation;
