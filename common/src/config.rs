use serde::{Deserialize, Serialize};

use crate::error::ListingError;
use crate::filter::{FilterState, DEFAULT_MAX_PRICE};

/// How a `category` query parameter interacts with the other filters once the
/// user changes one of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryPolicy {
    /// Category stays in force and is ANDed with price, province and sort.
    #[default]
    Compose,
    /// Category only applies while every other filter is untouched.
    Exclusive,
}

/// Tunables for the listing page. Every field has a default so a partial
/// JSON override is enough.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub default_max_price: u64,
    pub slider_max: u64,
    pub slider_step: u64,
    pub category_policy: CategoryPolicy,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_max_price: DEFAULT_MAX_PRICE,
            slider_max: 100_000_000,
            slider_step: 100_000,
            category_policy: CategoryPolicy::default(),
        }
    }
}

impl ListingConfig {
    /// Parse and validate a JSON override.
    pub fn from_json(json: &str) -> Result<Self, ListingError> {
        let config: ListingConfig = serde_json::from_str(json).map_err(ListingError::Config)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ListingError> {
        if self.default_max_price > self.slider_max {
            return Err(ListingError::InvalidPriceRange {
                default_max: self.default_max_price,
                slider_max: self.slider_max,
            });
        }
        Ok(())
    }

    /// Filter state of a freshly opened page.
    pub fn initial_filters(&self) -> FilterState {
        FilterState::with_max_price(self.default_max_price)
    }

    /// Whether `filters` are still exactly what the page opened with.
    pub fn is_pristine(&self, filters: &FilterState) -> bool {
        *filters == self.initial_filters()
    }
}
