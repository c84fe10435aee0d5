pub mod shoe_card;
pub mod shoe_grid;
pub mod spacer;

#[allow(unused_imports)]
pub use shoe_card::{ShoeCard, ShoeCardTile, ShoeCardView};
pub use shoe_grid::ShoeGrid;
#[allow(unused_imports)]
pub use spacer::{Axis, Spacer};
