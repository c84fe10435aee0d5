//! Listing data and the variant rules that decide how a tile is tagged.

pub mod listing;
pub mod variant;

pub use listing::ShoeListing;
pub use variant::Variant;
