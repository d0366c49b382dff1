/// Format a VND amount for display, e.g. `1.250.000 ₫`.
pub fn format_vnd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("{grouped} ₫")
}

/// Whole-percent reduction from `original` to `discounted`, for the sale badge.
/// Returns None when there is no reduction.
pub fn discount_percent(original: u64, discounted: u64) -> Option<u8> {
    if original == 0 || discounted >= original {
        return None;
    }
    let off = (original - discounted) * 100 / original;
    Some(off as u8)
}
