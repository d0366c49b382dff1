use std::cmp::Ordering;

use crate::config::{CategoryPolicy, ListingConfig};
use crate::filter::{FilterState, SortOption};
use crate::product::Product;

/// Products currently shown on the page, in display order.
///
/// Always a subsequence of the catalog it was derived from, possibly reordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing<'a> {
    items: Vec<&'a Product>,
}

impl<'a> Listing<'a> {
    /// Number of products shown; equal to the listing's length by construction.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[&'a Product] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.items.iter().copied()
    }
}

/// Which derivation path produced a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    CategoryOnly,
    Filtered,
    CategoryAndFiltered,
}

/// Derive the displayed listing from the catalog and the page's filters.
///
/// Province, price range and sort always apply, with one exception: a page
/// opened for a category with untouched filters shows every product of that
/// category regardless of price. Once a filter moves, `config.category_policy`
/// decides whether the category still applies.
///
/// A missing catalog yields an empty listing.
pub fn derive_display_list<'a>(
    catalog: Option<&'a [Product]>,
    filters: &FilterState,
    category: Option<&str>,
    config: &ListingConfig,
) -> Listing<'a> {
    let catalog = catalog.unwrap_or_default();
    let category = category.filter(|c| !c.is_empty());
    let pristine = config.is_pristine(filters);

    let branch = match (pristine, category, config.category_policy) {
        (true, Some(_), _) => Branch::CategoryOnly,
        (false, Some(_), CategoryPolicy::Compose) => Branch::CategoryAndFiltered,
        _ => Branch::Filtered,
    };

    let items: Vec<&Product> = match branch {
        Branch::CategoryOnly => catalog
            .iter()
            .filter(|p| Some(p.category.as_str()) == category)
            .collect(),
        Branch::Filtered => apply_filters(catalog.iter(), filters),
        Branch::CategoryAndFiltered => apply_filters(
            catalog
                .iter()
                .filter(|p| Some(p.category.as_str()) == category),
            filters,
        ),
    };

    tracing::debug!(
        ?branch,
        catalog = catalog.len(),
        shown = items.len(),
        "derived product listing"
    );

    Listing { items }
}

fn apply_filters<'a>(
    products: impl Iterator<Item = &'a Product>,
    filters: &FilterState,
) -> Vec<&'a Product> {
    let mut items: Vec<&Product> = products
        .filter(|p| !filters.has_province() || p.province() == Some(filters.selected_province.as_str()))
        .filter(|p| filters.price_in_range(p.discount_price))
        .collect();

    sort_products(&mut items, filters.sort_option);
    items
}

/// Stable sort, so ties keep catalog order.
fn sort_products(items: &mut [&Product], option: SortOption) {
    match option {
        SortOption::Default => {}
        SortOption::PriceLowToHigh => items.sort_by_key(|p| p.discount_price),
        SortOption::PriceHighToLow => items.sort_by(|a, b| b.discount_price.cmp(&a.discount_price)),
        SortOption::Popular => items.sort_by(|a, b| b.sold_out.cmp(&a.sold_out)),
        SortOption::Newest => items.sort_by(|a, b| newest_first(a, b)),
    }
}

/// Descending by creation time; undated products go last.
fn newest_first(a: &Product, b: &Product) -> Ordering {
    match (a.created_at, b.created_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Load state of the listing page.
///
/// Starts in `Loading` and latches to `Ready` the first time the catalog store
/// reports it is not loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageStatus {
    #[default]
    Loading,
    Ready,
}

impl PageStatus {
    pub fn observe(self, is_loading: bool) -> PageStatus {
        match self {
            PageStatus::Ready => PageStatus::Ready,
            PageStatus::Loading if is_loading => PageStatus::Loading,
            PageStatus::Loading => PageStatus::Ready,
        }
    }

    pub fn is_ready(self) -> bool {
        self == PageStatus::Ready
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::product::{ProductId, ShopRef};

    fn product(id: &str, price: u64, province: &str) -> Product {
        Product {
            id: ProductId(id.into()),
            name: id.into(),
            discount_price: price,
            shop: Some(ShopRef {
                name: "shop".into(),
                address: province.into(),
            }),
            ..Product::default()
        }
    }

    fn in_category(mut p: Product, category: &str) -> Product {
        p.category = category.into();
        p
    }

    fn ids(listing: &Listing<'_>) -> Vec<String> {
        listing.iter().map(|p| p.id.0.clone()).collect()
    }

    #[test]
    fn price_bound_excludes_expensive_product() {
        let catalog = vec![product("a", 100, "A"), product("b", 200, "B")];
        let filters = FilterState {
            max_price: 150,
            ..FilterState::default()
        };

        let listing = derive_display_list(Some(catalog.as_slice()), &filters, None, &ListingConfig::default());
        assert_eq!(ids(&listing), vec!["a"]);
        assert_eq!(listing.count(), 1);
    }

    #[test]
    fn empty_catalog_gives_empty_listing() {
        let listing =
            derive_display_list(Some(&[][..]), &FilterState::default(), None, &ListingConfig::default());
        assert!(listing.is_empty());
        assert_eq!(listing.count(), 0);
    }

    #[test]
    fn missing_catalog_degrades_to_empty() {
        let filters = FilterState {
            sort_option: SortOption::Popular,
            ..FilterState::default()
        };
        let listing = derive_display_list(None, &filters, Some("shoes"), &ListingConfig::default());
        assert_eq!(listing.count(), 0);
    }

    #[test]
    fn fresh_page_applies_default_price_bounds() {
        let catalog = vec![
            product("cheap", 10, "A"),
            product("luxury", 90_000_000, "B"),
            product("edge", 50_000_000, "C"),
        ];
        let listing =
            derive_display_list(Some(catalog.as_slice()), &FilterState::default(), None, &ListingConfig::default());
        assert_eq!(ids(&listing), vec!["cheap", "edge"]);
    }

    #[test]
    fn fresh_page_and_sorted_page_agree_on_membership() {
        let catalog = vec![product("a", 100, "A"), product("laptop", 58_900_000, "B")];
        let config = ListingConfig::default();
        let fresh = derive_display_list(Some(catalog.as_slice()), &FilterState::default(), None, &config);
        let popular = FilterState {
            sort_option: SortOption::Popular,
            ..FilterState::default()
        };
        let sorted = derive_display_list(Some(catalog.as_slice()), &popular, None, &config);
        assert_eq!(ids(&fresh), vec!["a"]);
        assert_eq!(ids(&sorted), vec!["a"]);
    }

    #[test]
    fn category_only_view_ignores_price_bounds() {
        let catalog = vec![
            in_category(product("s1", 100, "A"), "shoes"),
            in_category(product("h1", 100, "A"), "hats"),
            in_category(product("s2", 80_000_000, "B"), "shoes"),
        ];
        let listing = derive_display_list(
            Some(catalog.as_slice()),
            &FilterState::default(),
            Some("shoes"),
            &ListingConfig::default(),
        );
        assert_eq!(ids(&listing), vec!["s1", "s2"]);
    }

    #[test]
    fn empty_category_param_is_treated_as_absent() {
        let catalog = vec![in_category(product("s1", 100, "A"), "shoes")];
        let listing = derive_display_list(
            Some(catalog.as_slice()),
            &FilterState::default(),
            Some(""),
            &ListingConfig::default(),
        );
        assert_eq!(listing.count(), 1);
    }

    #[test]
    fn compose_policy_keeps_category_after_filter_moves() {
        let catalog = vec![
            in_category(product("s1", 300, "A"), "shoes"),
            in_category(product("h1", 100, "A"), "hats"),
            in_category(product("s2", 200, "A"), "shoes"),
        ];
        let filters = FilterState {
            sort_option: SortOption::PriceLowToHigh,
            ..FilterState::default()
        };
        let listing =
            derive_display_list(Some(catalog.as_slice()), &filters, Some("shoes"), &ListingConfig::default());
        assert_eq!(ids(&listing), vec!["s2", "s1"]);
    }

    #[test]
    fn exclusive_policy_drops_category_after_filter_moves() {
        let catalog = vec![
            in_category(product("s1", 300, "A"), "shoes"),
            in_category(product("h1", 100, "A"), "hats"),
        ];
        let filters = FilterState {
            sort_option: SortOption::PriceLowToHigh,
            ..FilterState::default()
        };
        let config = ListingConfig {
            category_policy: CategoryPolicy::Exclusive,
            ..ListingConfig::default()
        };
        let listing = derive_display_list(Some(catalog.as_slice()), &filters, Some("shoes"), &config);
        assert_eq!(ids(&listing), vec!["h1", "s1"]);
    }

    #[test]
    fn province_filter_is_exact_and_case_sensitive() {
        let catalog = vec![
            product("a", 100, "Hà Nội"),
            product("b", 100, "hà nội"),
            product("c", 100, "Đà Nẵng"),
            Product {
                shop: None,
                ..product("d", 100, "")
            },
        ];
        let filters = FilterState {
            selected_province: "Hà Nội".into(),
            ..FilterState::default()
        };
        let listing = derive_display_list(Some(catalog.as_slice()), &filters, None, &ListingConfig::default());
        assert_eq!(ids(&listing), vec!["a"]);
    }

    #[test]
    fn inverted_price_range_matches_nothing() {
        let catalog = vec![product("a", 100, "A")];
        let filters = FilterState {
            min_price: 500,
            max_price: 50,
            ..FilterState::default()
        };
        let listing = derive_display_list(Some(catalog.as_slice()), &filters, None, &ListingConfig::default());
        assert!(listing.is_empty());
    }

    #[test]
    fn price_sorts_keep_ties_in_catalog_order() {
        let catalog = vec![
            product("a", 300, "A"),
            product("b", 100, "A"),
            product("c", 300, "A"),
            product("d", 200, "A"),
        ];
        let config = ListingConfig::default();

        let low = FilterState {
            sort_option: SortOption::PriceLowToHigh,
            ..FilterState::default()
        };
        assert_eq!(
            ids(&derive_display_list(Some(catalog.as_slice()), &low, None, &config)),
            vec!["b", "d", "a", "c"]
        );

        let high = FilterState {
            sort_option: SortOption::PriceHighToLow,
            ..FilterState::default()
        };
        assert_eq!(
            ids(&derive_display_list(Some(catalog.as_slice()), &high, None, &config)),
            vec!["a", "c", "d", "b"]
        );
    }

    #[test]
    fn popular_sorts_by_units_sold() {
        let mut catalog = vec![product("a", 1, "A"), product("b", 1, "A"), product("c", 1, "A")];
        catalog[0].sold_out = 5;
        catalog[1].sold_out = 50;
        catalog[2].sold_out = 7;
        let filters = FilterState {
            sort_option: SortOption::Popular,
            ..FilterState::default()
        };
        let listing = derive_display_list(Some(catalog.as_slice()), &filters, None, &ListingConfig::default());
        assert_eq!(ids(&listing), vec!["b", "c", "a"]);
    }

    #[test]
    fn newest_sorts_descending_with_undated_last() {
        let mut catalog = vec![product("old", 1, "A"), product("undated", 1, "A"), product("new", 1, "A")];
        catalog[0].created_at = Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
        catalog[2].created_at = Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
        let filters = FilterState {
            sort_option: SortOption::Newest,
            ..FilterState::default()
        };
        let listing = derive_display_list(Some(catalog.as_slice()), &filters, None, &ListingConfig::default());
        assert_eq!(ids(&listing), vec!["new", "old", "undated"]);
    }

    #[test]
    fn page_status_latches_ready() {
        let status = PageStatus::default();
        assert_eq!(status, PageStatus::Loading);
        assert_eq!(status.observe(true), PageStatus::Loading);

        let ready = status.observe(false);
        assert!(ready.is_ready());
        assert_eq!(ready.observe(true), PageStatus::Ready);
    }
}
