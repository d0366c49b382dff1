use crate::vn_provinces::VN_PROVINCES;

/// One entry of the province selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Province {
    /// ISO 3166-2:VN subdivision code without the country prefix.
    pub iso_code: &'static str,
    pub name: &'static str,
}

fn find_index(code: &str) -> Option<usize> {
    VN_PROVINCES
        .binary_search_by_key(&code, |(iso, _)| iso)
        .ok()
}

/// Look up a province by subdivision code, e.g. `"HN"` or `"44"`.
pub fn lookup_province(code: &str) -> Option<Province> {
    find_index(code).map(|idx| {
        let (iso_code, name) = VN_PROVINCES[idx];
        Province { iso_code, name }
    })
}

/// Display name for a subdivision code.
pub fn province_name(code: &str) -> Option<&'static str> {
    lookup_province(code).map(|p| p.name)
}

/// Check whether `name` is one of the selector's province names.
pub fn is_known_province(name: &str) -> bool {
    VN_PROVINCES.iter().any(|(_, n)| *n == name)
}

/// All provinces in selector order (by display name).
pub fn provinces_by_name() -> Vec<Province> {
    let mut provinces: Vec<Province> = VN_PROVINCES
        .iter()
        .map(|&(iso_code, name)| Province { iso_code, name })
        .collect();
    provinces.sort_by(|a, b| a.name.cmp(b.name));
    provinces
}
