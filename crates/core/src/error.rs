use crate::validation::AssetRejection;

/// Domain errors surfaced to API clients.
///
/// Every variant maps to exactly one status code and one fixed message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A candidate asset failed validation.
    #[error(transparent)]
    Rejected(#[from] AssetRejection),

    /// The request body was not a JSON object carrying the asset fields.
    #[error("Data must be JSON")]
    MalformedRequest,

    #[error("Not Found")]
    NotFound,
}
