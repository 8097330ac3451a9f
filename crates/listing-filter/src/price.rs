//! Price normalization.

/// Listings whose extracted price is strictly below this are "under 500"
pub const BUDGET_PRICE_CEILING: u64 = 500;

/// Pull an integer out of a human-formatted price.
///
/// Every character that is not an ASCII digit is dropped and the remaining
/// digits are read as one base-10 number. Separators and decimal points are
/// dropped alike, so `"Rs. 45,000"` gives `45000` and `"45.00"` gives `4500`.
/// Empty input, missing input, or input with no digits gives `0`. A digit run
/// too long for `u64` saturates at `u64::MAX`.
pub fn extract_price(price: Option<&str>) -> u64 {
    price
        .unwrap_or("")
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |total, digit| {
            total
                .saturating_mul(10)
                .saturating_add(u64::from(digit - b'0'))
        })
}
