pub mod app;
#[cfg(feature = "example-data")]
pub mod example_data;
pub mod price_slider;
pub mod product_card;
pub mod products_page;
pub mod shared_state;
