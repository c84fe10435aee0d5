use dioxus::prelude::*;
use time::OffsetDateTime;

use super::spacer::{Axis, Spacer};
use crate::domain::{ShoeListing, Variant};
use crate::ui::theme;
use crate::util::format::{format_price, pluralize};

pub fn shoe_href(slug: &str) -> String {
    format!("/shoe/{slug}")
}

/// Everything a tile needs, resolved against a fixed evaluation time.
#[derive(Clone, Debug, PartialEq)]
pub struct ShoeCardView {
    pub href: String,
    pub image_src: String,
    pub name: String,
    pub price_label: String,
    /// Strike the base price. Follows the sale price, not the variant.
    pub price_struck: bool,
    pub sale_price_label: Option<String>,
    pub colors_label: String,
    pub variant: Variant,
}

impl ShoeCardView {
    pub fn from_listing(listing: &ShoeListing, now: OffsetDateTime) -> Self {
        Self {
            href: shoe_href(&listing.slug),
            image_src: listing.image_src.clone(),
            name: listing.name.clone(),
            price_label: format_price(listing.price),
            price_struck: listing.has_sale(),
            sale_price_label: listing.sale_price.map(format_price),
            colors_label: pluralize("Color", listing.num_of_colors),
            variant: listing.variant_at(now),
        }
    }
}

#[component]
pub fn ShoeCard(listing: ShoeListing) -> Element {
    let view = ShoeCardView::from_listing(&listing, OffsetDateTime::now_utc());
    rsx! { ShoeCardTile { view } }
}

#[component]
pub fn ShoeCardTile(view: ShoeCardView) -> Element {
    let price_class = theme::price_class(view.price_struck);
    let tag = view.variant.tag_label().unwrap_or_default();

    rsx! {
        a {
            class: "shoe-card-link",
            href: "{view.href}",
            article {
                class: "shoe-card",
                div {
                    class: "shoe-card-image-wrapper",
                    img { class: "shoe-card-image", alt: "", src: "{view.image_src}" }
                }
                Spacer { size: 12, axis: Axis::Vertical }
                div {
                    class: "shoe-card-row",
                    h3 { class: "shoe-card-name", "{view.name}" }
                    span { class: "{price_class}", "{view.price_label}" }
                }
                div {
                    class: "shoe-card-row",
                    p { class: "shoe-card-colors", "{view.colors_label}" }
                    if let Some(sale) = view.sale_price_label.clone() {
                        span { class: "shoe-card-sale-price", "{sale}" }
                    }
                }
                match view.variant {
                    Variant::OnSale => rsx! {
                        span { class: theme::TAG_SALE, "{tag}" }
                    },
                    Variant::NewRelease => rsx! {
                        span { class: theme::TAG_NEW_RELEASE, "{tag}" }
                    },
                    Variant::Default => rsx! { Fragment {} },
                }
            }
        }
    }
}
