use dioxus::prelude::*;

use shopfront_common::currency::{discount_percent, format_vnd};
use shopfront_common::product::Product;
use shopfront_common::province::is_known_province;

#[component]
pub fn ProductCard(product: Product) -> Element {
    let price_str = format_vnd(product.discount_price);
    let original_str = product
        .original_price
        .filter(|_| product.is_on_sale())
        .map(format_vnd);
    let badge = product
        .original_price
        .and_then(|original| discount_percent(original, product.discount_price));
    let shop_name = product.shop.as_ref().map(|s| s.name.clone()).unwrap_or_default();
    let province = product.province().unwrap_or_default().to_string();
    // Addresses outside the selector's list can never be matched by the filter.
    let location_class = if is_known_province(&province) {
        "location"
    } else {
        "location location-unknown"
    };
    let rating = (product.ratings > 0.0).then(|| format!("{:.1}", product.ratings));

    rsx! {
        div { class: "product-card",
            if let Some(off) = badge {
                span { class: "badge badge-sale", "-{off}%" }
            }
            h3 { "{product.name}" }
            if !shop_name.is_empty() {
                p { class: "shop", "{shop_name}" }
            }
            if !province.is_empty() {
                p { class: "{location_class}", "{province}" }
            }
            div { class: "price-row",
                span { class: "price", "{price_str}" }
                if let Some(original) = original_str {
                    span { class: "price-original", "{original}" }
                }
            }
            div { class: "card-footer",
                if let Some(rating) = rating {
                    span { class: "rating", "★ {rating}" }
                }
                span { class: "sold", "Đã bán {product.sold_out}" }
            }
        }
    }
}
