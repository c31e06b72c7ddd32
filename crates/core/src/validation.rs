//! Naming and taxonomy rules for candidate assets.
//!
//! [`validate_asset`] checks the rules in a fixed order and reports the first
//! one that fails. It is a pure function: the caller supplies the current set
//! of persisted names, and the store's unique constraint remains the final
//! word on duplicates.

use std::collections::HashSet;

use crate::taxonomy;

/// Minimum asset name length, in characters.
pub const NAME_MIN_LEN: usize = 4;

/// Maximum asset name length, in characters.
pub const NAME_MAX_LEN: usize = 64;

/// Why a candidate asset was rejected.
///
/// The `Display` text is the exact message returned to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AssetRejection {
    #[error("Name must be between 4 and 64 characters")]
    InvalidLength,

    #[error("Name not unique")]
    DuplicateName,

    #[error("Name cannot start with an underscore or dash")]
    InvalidLeadingChar,

    #[error("Invalid Asset Type")]
    UnknownType,

    #[error("Invalid Asset Class")]
    UnknownClass,

    #[error("Name must be ascii encoded")]
    NotAscii,
}

/// Validate a candidate asset.
///
/// Rules, first failure wins:
///
/// 1. name is 4..=64 characters long
/// 2. name is not in `existing_names`
/// 3. name does not start with `-` or `_`
/// 4. `asset_type` is a taxonomy key
/// 5. `asset_class` is allowed for `asset_type`
/// 6. every character of name is ASCII
pub fn validate_asset(
    name: &str,
    asset_type: &str,
    asset_class: &str,
    existing_names: &HashSet<String>,
) -> Result<(), AssetRejection> {
    let len = name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(AssetRejection::InvalidLength);
    }

    if existing_names.contains(name) {
        return Err(AssetRejection::DuplicateName);
    }

    if name.starts_with(&['-', '_'][..]) {
        return Err(AssetRejection::InvalidLeadingChar);
    }

    if !taxonomy::is_known_type(asset_type) {
        return Err(AssetRejection::UnknownType);
    }

    if !taxonomy::is_allowed_class(asset_type, asset_class) {
        return Err(AssetRejection::UnknownClass);
    }

    if !name.is_ascii() {
        return Err(AssetRejection::NotAscii);
    }

    Ok(())
}
