use dioxus::prelude::*;

use super::shared_state::use_products_state;

/// Demo catalog in the store's payload format, for running the page without
/// a backend.
const EXAMPLE_CATALOG: &str = r#"[
    {
        "_id": "demo-1", "name": "Giày chạy bộ nhẹ", "category": "Giày dép",
        "originalPrice": 1200000, "discountPrice": 890000, "sold_out": 120, "ratings": 4.6,
        "createdAt": "2024-05-02T09:00:00Z",
        "shop": { "name": "Run Hà Nội", "address": "Hà Nội" }
    },
    {
        "_id": "demo-2", "name": "Dép quai ngang", "category": "Giày dép",
        "discountPrice": 150000, "sold_out": 340, "ratings": 4.1,
        "createdAt": "2023-11-20T03:30:00Z",
        "shop": { "name": "Sài Gòn Shoes", "address": "Hồ Chí Minh" }
    },
    {
        "_id": "demo-3", "name": "Điện thoại 5G 128GB", "category": "Điện thoại",
        "originalPrice": 9990000, "discountPrice": 8490000, "sold_out": 57, "ratings": 4.8,
        "createdAt": "2024-07-15T12:00:00Z",
        "shop": { "name": "Mobile Đà Nẵng", "address": "Đà Nẵng" }
    },
    {
        "_id": "demo-4", "name": "Máy tính xách tay 14 inch", "category": "Máy tính",
        "originalPrice": 65000000, "discountPrice": 58900000, "sold_out": 9, "ratings": 4.9,
        "createdAt": "2024-02-10T08:15:00Z",
        "shop": { "name": "Tech Hồ Chí Minh", "address": "Hồ Chí Minh" }
    },
    {
        "_id": "demo-5", "name": "Áo thun cotton", "category": "Thời trang",
        "originalPrice": 250000, "discountPrice": 199000, "sold_out": 410, "ratings": 4.3,
        "createdAt": "2024-06-01T00:00:00Z",
        "shop": { "name": "Run Hà Nội", "address": "Hà Nội" }
    },
    {
        "_id": "demo-6", "name": "Tai nghe không dây", "category": "Điện thoại",
        "discountPrice": 1590000, "sold_out": 203, "ratings": 4.4,
        "shop": { "name": "Mobile Đà Nẵng", "address": "Đà Nẵng" }
    }
]"#;

/// Seed the shared catalog with the demo products once, after mount.
pub fn use_example_catalog() {
    let mut products = use_products_state();
    use_effect(move || {
        if let Err(err) = products.write().load_json(EXAMPLE_CATALOG) {
            tracing::warn!("Example catalog rejected: {err}");
        }
    });
}
