use dioxus::prelude::*;

use shopfront_common::config::ListingConfig;

#[cfg(feature = "example-data")]
use super::example_data::use_example_catalog;
use super::products_page::ProductsPage;
use super::shared_state::{use_products_state, ProductsState};

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/products?:category")]
    Products { category: String },
}

/// Listing config baked in at build time through `SHOPFRONT_LISTING_CONFIG`.
/// Invalid overrides fall back to defaults.
fn listing_config() -> ListingConfig {
    match option_env!("SHOPFRONT_LISTING_CONFIG") {
        Some(json) => ListingConfig::from_json(json).unwrap_or_else(|err| {
            tracing::warn!("Ignoring listing config override: {err}");
            ListingConfig::default()
        }),
        None => ListingConfig::default(),
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(ProductsState::new()));
    use_context_provider(listing_config);
    #[cfg(feature = "example-data")]
    use_example_catalog();

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        Router::<Route> {}
    }
}

#[component]
fn AppLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "shopfront-app",
            header { class: "app-header",
                h1 { "Shopfront" }
                nav {
                    button {
                        onclick: move |_| { nav.push(Route::Home {}); },
                        "Trang chủ"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::Products { category: String::new() }); },
                        "Sản phẩm"
                    }
                }
            }
            main {
                Outlet::<Route> {}
            }
            footer { class: "app-footer",
                p { "© Shopfront" }
            }
        }
    }
}

/// Route component: category shortcuts into the product listing.
#[component]
fn Home() -> Element {
    let products_state = use_products_state();
    let categories = products_state.read().categories();

    rsx! {
        div { class: "home",
            h2 { "Danh mục" }
            ul { class: "category-list",
                li {
                    Link { to: Route::Products { category: String::new() }, "Tất cả sản phẩm" }
                }
                for category in categories {
                    li { key: "{category}",
                        Link { to: Route::Products { category: category.clone() }, "{category}" }
                    }
                }
            }
        }
    }
}

/// Route component: renders the listing for the `?category=` parameter.
///
/// Keyed on the category so that moving between categories on this route
/// mounts a fresh page with fresh filters.
#[component]
fn Products(category: String) -> Element {
    rsx! {
        ProductsPage { key: "{category}", category }
    }
}
