use dioxus::prelude::*;

use shopfront_common::config::ListingConfig;
use shopfront_common::filter::{FilterState, SortOption};
use shopfront_common::listing::{derive_display_list, PageStatus};
use shopfront_common::product::Product;
use shopfront_common::province::{province_name, provinces_by_name};

use super::price_slider::PriceSlider;
use super::product_card::ProductCard;
use super::shared_state::use_products_state;

/// Product listing with price, province and sort filters.
///
/// `category` comes from the `?category=` query parameter and is captured once
/// at mount; an empty value means no category. The route keys this component
/// on the category, so a different category remounts it.
#[component]
pub fn ProductsPage(category: String) -> Element {
    let products_state = use_products_state();
    let config = use_context::<ListingConfig>();
    let category = use_hook(move || Some(category).filter(|c| !c.is_empty()));

    let initial = config.initial_filters();
    let mut filters = use_signal(move || initial);
    let mut status = use_signal(PageStatus::default);

    use_effect(move || {
        let is_loading = products_state.read().is_loading;
        let next = status.peek().observe(is_loading);
        if next != *status.peek() {
            status.set(next);
        }
    });

    if !status().is_ready() {
        return rsx! {
            div { class: "loader", "Đang tải..." }
        };
    }

    // Recomputed on every render, so catalog updates and filter changes both
    // refresh the listing.
    let (items, count): (Vec<Product>, usize) = {
        let state = products_state.read();
        let listing = derive_display_list(
            state.all_products.as_deref(),
            &filters.read(),
            category.as_deref(),
            &config,
        );
        (listing.iter().cloned().collect(), listing.count())
    };

    let FilterState {
        min_price,
        max_price,
        selected_province,
        sort_option,
    } = filters.read().clone();
    let slider_max = config.slider_max;
    let slider_step = config.slider_step;

    rsx! {
        div { class: "products-page",
            if let Some(ref cat) = category {
                h2 { class: "category-heading", "Danh mục: {cat}" }
            }
            div { class: "filter-panel",
                PriceSlider {
                    label: "Giá thấp nhất:",
                    value: min_price,
                    max: slider_max,
                    step: slider_step,
                    on_change: move |v| filters.write().min_price = v,
                }
                PriceSlider {
                    label: "Giá cao nhất:",
                    value: max_price,
                    max: slider_max,
                    step: slider_step,
                    on_change: move |v| filters.write().max_price = v,
                }
                div { class: "filter-field",
                    label { class: "filter-label", "Tỉnh/Thành phố:" }
                    select {
                        onchange: move |evt| {
                            // Options carry subdivision codes; the filter matches names.
                            let code = evt.value();
                            filters.write().selected_province =
                                province_name(&code).unwrap_or_default().to_string();
                        },
                        option { value: "", selected: selected_province.is_empty(), "Tất cả" }
                        for province in provinces_by_name() {
                            option {
                                key: "{province.iso_code}",
                                value: "{province.iso_code}",
                                selected: province.name == selected_province,
                                "{province.name}"
                            }
                        }
                    }
                }
                div { class: "filter-field",
                    label { class: "filter-label", "Sắp xếp theo:" }
                    select {
                        value: "{sort_option}",
                        onchange: move |evt| {
                            let sort = evt.value().parse::<SortOption>().unwrap_or_else(|err| {
                                tracing::warn!("{err}; falling back to default order");
                                SortOption::Default
                            });
                            filters.write().sort_option = sort;
                        },
                        for sort in SortOption::all().iter().copied() {
                            option {
                                key: "{sort}",
                                value: "{sort}",
                                selected: sort == sort_option,
                                {sort.label()}
                            }
                        }
                    }
                }
            }
            p { class: "result-count",
                "Có "
                span { class: "count", "{count}" }
                " kết quả phù hợp được lọc"
            }
            div { class: "product-grid",
                for (index, product) in items.into_iter().enumerate() {
                    ProductCard { key: "{index}", product }
                }
            }
            if count == 0 {
                p { class: "empty-state", "Không có sản phẩm nào được tìm thấy!" }
            }
        }
    }
}
