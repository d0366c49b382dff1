use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ListingError;

/// Upper price bound a freshly opened page starts with.
pub const DEFAULT_MAX_PRICE: u64 = 50_000_000;

/// Ordering applied to the filtered listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Default,
    PriceLowToHigh,
    PriceHighToLow,
    /// Most units sold first.
    Popular,
    /// Most recently created first.
    Newest,
}

impl SortOption {
    pub fn all() -> &'static [SortOption] {
        &[
            SortOption::Default,
            SortOption::PriceLowToHigh,
            SortOption::PriceHighToLow,
            SortOption::Popular,
            SortOption::Newest,
        ]
    }

    /// Value used in the sort selector and in serialized filter state.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceLowToHigh => "priceLowToHigh",
            SortOption::PriceHighToLow => "priceHighToLow",
            SortOption::Popular => "popular",
            SortOption::Newest => "newest",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Default => "Mặc định",
            SortOption::PriceLowToHigh => "Giá thấp đến cao",
            SortOption::PriceHighToLow => "Giá cao đến thấp",
            SortOption::Popular => "Phổ biến nhất",
            SortOption::Newest => "Mới nhất",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::all()
            .iter()
            .copied()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| ListingError::UnknownSortOption(s.to_string()))
    }
}

/// User-controlled filter parameters of the listing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub min_price: u64,
    pub max_price: u64,
    /// Province name to match exactly; empty means every province.
    pub selected_province: String,
    pub sort_option: SortOption,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_max_price(DEFAULT_MAX_PRICE)
    }
}

impl FilterState {
    /// Initial filter state with a custom upper price bound.
    pub fn with_max_price(max_price: u64) -> Self {
        Self {
            min_price: 0,
            max_price,
            selected_province: String::new(),
            sort_option: SortOption::Default,
        }
    }

    pub fn has_province(&self) -> bool {
        !self.selected_province.is_empty()
    }

    /// Inclusive price-range check.
    pub fn price_in_range(&self, price: u64) -> bool {
        self.min_price <= price && price <= self.max_price
    }
}
