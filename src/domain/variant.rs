use std::fmt;

use serde::Serialize;
use time::OffsetDateTime;

use crate::util::format::is_new_shoe_at;

/// Display state of a shoe tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    OnSale,
    NewRelease,
    Default,
}

impl Variant {
    /// Picks the variant for a listing.
    ///
    /// A sale price (zero included) always wins, even for a fresh release.
    /// Otherwise a release inside the recency window is `NewRelease`.
    pub fn classify(
        sale_price: Option<u32>,
        release_date: OffsetDateTime,
        now: OffsetDateTime,
    ) -> Self {
        if sale_price.is_some() {
            Variant::OnSale
        } else if is_new_shoe_at(release_date, now) {
            Variant::NewRelease
        } else {
            Variant::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }

    /// Text of the corner tag, if the variant shows one.
    pub fn tag_label(&self) -> Option<&'static str> {
        match self {
            Variant::OnSale => Some("Sale"),
            Variant::NewRelease => Some("Just released!"),
            Variant::Default => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
