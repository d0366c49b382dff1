use thiserror::Error;

/// Errors raised while decoding listing inputs.
///
/// The filter engine itself is infallible; these only come from the edges
/// where external data enters (catalog payload, config, query values).
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("malformed catalog payload: {0}")]
    Catalog(#[source] serde_json::Error),

    #[error("malformed listing config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("unknown sort option `{0}`")]
    UnknownSortOption(String),

    #[error("default max price {default_max} exceeds slider maximum {slider_max}")]
    InvalidPriceRange { default_max: u64, slider_max: u64 },
}
