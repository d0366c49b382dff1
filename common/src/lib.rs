mod vn_provinces;
pub mod config;
pub mod currency;
pub mod error;
pub mod filter;
pub mod listing;
pub mod product;
pub mod province;
