use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::variant::Variant;

/// One product as supplied by the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeListing {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    /// Base price in cents.
    pub price: u32,
    /// Discounted price in cents. `Some(0)` is a real sale price.
    #[serde(default)]
    pub sale_price: Option<u32>,
    #[serde(with = "time::serde::rfc3339")]
    pub release_date: OffsetDateTime,
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Drives the strikethrough on the base price. Independent of [`Variant`].
    pub fn has_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    pub fn variant_at(&self, now: OffsetDateTime) -> Variant {
        Variant::classify(self.sale_price, self.release_date, now)
    }
}
