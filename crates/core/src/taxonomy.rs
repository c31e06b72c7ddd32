//! Fixed mapping of asset types to the asset classes each type allows.
//!
//! The set of valid asset types is exactly the key set of [`TAXONOMY`].

pub const TYPE_SATELLITE: &str = "satellite";
pub const TYPE_ANTENNA: &str = "antenna";

/// `(asset_type, allowed asset_classes)` pairs.
pub const TAXONOMY: &[(&str, &[&str])] = &[
    (TYPE_SATELLITE, &["dove", "rapideye"]),
    (TYPE_ANTENNA, &["yagi", "dish"]),
];

/// All known asset types, in declaration order.
pub fn asset_types() -> impl Iterator<Item = &'static str> {
    TAXONOMY.iter().map(|(asset_type, _)| *asset_type)
}

/// Classes allowed for `asset_type`, or `None` if the type is unknown.
pub fn allowed_classes(asset_type: &str) -> Option<&'static [&'static str]> {
    TAXONOMY
        .iter()
        .find(|(t, _)| *t == asset_type)
        .map(|(_, classes)| *classes)
}

pub fn is_known_type(asset_type: &str) -> bool {
    allowed_classes(asset_type).is_some()
}

/// Whether `asset_class` is allowed for `asset_type`. Unknown types allow
/// nothing.
pub fn is_allowed_class(asset_type: &str, asset_class: &str) -> bool {
    allowed_classes(asset_type).is_some_and(|classes| classes.contains(&asset_class))
}
