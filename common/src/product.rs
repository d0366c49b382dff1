use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ListingError;

/// Catalog-assigned product identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

/// The shop a product is sold by, as embedded in the catalog payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopRef {
    #[serde(default)]
    pub name: String,
    /// Province the shop operates from; matched against the province filter.
    #[serde(default)]
    pub address: String,
}

/// A product listing as supplied by the catalog store.
///
/// Field names follow the store's JSON payload. Optional fields default so that
/// partially populated records still decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", default)]
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "originalPrice", default, deserialize_with = "deserialize_optional_price")]
    pub original_price: Option<u64>,
    /// Selling price in VND; the price filter and price sorts use this.
    #[serde(rename = "discountPrice", deserialize_with = "deserialize_price")]
    pub discount_price: u64,
    /// Units sold so far.
    #[serde(default)]
    pub sold_out: u32,
    #[serde(default)]
    pub ratings: f64,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub shop: Option<ShopRef>,
}

impl Product {
    /// Province of the product's shop, if the catalog carries one.
    pub fn province(&self) -> Option<&str> {
        self.shop.as_ref().map(|shop| shop.address.as_str())
    }

    /// Whether the product sells below its original price.
    pub fn is_on_sale(&self) -> bool {
        matches!(self.original_price, Some(original) if original > self.discount_price)
    }
}

/// A price as the store sends it: any JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Whole(u64),
    Fractional(f64),
}

impl RawPrice {
    /// Whole VND; fractional and exponent-form amounts are rounded.
    fn into_vnd<E: serde::de::Error>(self) -> Result<u64, E> {
        match self {
            RawPrice::Whole(v) => Ok(v),
            RawPrice::Fractional(v) if v.is_finite() && v >= 0.0 && v <= u64::MAX as f64 => {
                Ok(v.round() as u64)
            }
            RawPrice::Fractional(v) => Err(E::custom(format!("price {v} is not a valid amount"))),
        }
    }
}

fn deserialize_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    RawPrice::deserialize(deserializer)?.into_vnd()
}

fn deserialize_optional_price<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u64>, D::Error> {
    Option::<RawPrice>::deserialize(deserializer)?
        .map(|price| price.into_vnd::<D::Error>())
        .transpose()
}

/// Decode the catalog store's product array.
///
/// Only a payload that is not an array fails. Individual records that do not
/// decode are skipped with a warning so one bad listing cannot blank the page.
pub fn parse_catalog(json: &str) -> Result<Vec<Product>, ListingError> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(ListingError::Catalog)?;

    let products: Vec<Product> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Product>(record) {
            Ok(product) => Some(product),
            Err(err) => {
                tracing::warn!(index, "Skipping malformed catalog record: {err}");
                None
            }
        })
        .collect();
    Ok(products)
}
