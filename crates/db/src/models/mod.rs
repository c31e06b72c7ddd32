//! Database row structs and create DTOs.

pub mod asset;
