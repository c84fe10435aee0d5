//! Display helpers shared by the storefront components.

use time::{Duration, OffsetDateTime};

/// Releases younger than this count as new.
pub const RECENCY_WINDOW: Duration = Duration::days(30);

/// Formats an amount in cents as a dollar label.
///
/// Whole dollar amounts drop the decimals (`10000` -> `"$100"`), anything else
/// prints two decimal places (`9950` -> `"$99.50"`).
pub fn format_price(cents: u32) -> String {
    let dollars = cents / 100;
    let remainder = cents % 100;
    if remainder == 0 {
        format!("${dollars}")
    } else {
        format!("${dollars}.{remainder:02}")
    }
}

/// Prefixes `noun` with `count`, adding an `s` unless the count is exactly one.
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Wall-clock form. Cards pin one `now` per render and call [`is_new_shoe_at`].
#[allow(dead_code)]
pub fn is_new_shoe(release_date: OffsetDateTime) -> bool {
    is_new_shoe_at(release_date, OffsetDateTime::now_utc())
}

/// A release dated in the future has a negative age and is treated as new.
pub fn is_new_shoe_at(release_date: OffsetDateTime, now: OffsetDateTime) -> bool {
    now - release_date < RECENCY_WINDOW
}
