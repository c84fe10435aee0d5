use dioxus::prelude::*;

use super::shoe_card::ShoeCard;
use crate::domain::ShoeListing;

#[component]
pub fn ShoeGrid(listings: Vec<ShoeListing>) -> Element {
    if listings.is_empty() {
        return rsx! {
            p { class: "shoe-grid-empty", "No shoes to show right now." }
        };
    }

    rsx! {
        div {
            class: "shoe-grid",
            for listing in listings {
                ShoeCard { key: "{listing.slug}", listing: listing.clone() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use time::{Duration, OffsetDateTime};

    use super::*;

    fn render(listings: Vec<ShoeListing>) -> String {
        let mut dom = VirtualDom::new_with_props(ShoeGrid, ShoeGridProps { listings });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn shoe(slug: &str, sale_price: Option<u32>) -> ShoeListing {
        ShoeListing {
            slug: slug.into(),
            name: slug.into(),
            image_src: format!("/shoes/{slug}.jpg"),
            price: 10000,
            sale_price,
            release_date: OffsetDateTime::now_utc() - Duration::days(365),
            num_of_colors: 2,
        }
    }

    #[test]
    fn empty_catalog_shows_message() {
        let html = render(Vec::new());
        assert!(html.contains("No shoes to show right now."));
        assert!(!html.contains("shoe-grid\""));
    }

    #[test]
    fn renders_one_card_per_listing() {
        let html = render(vec![shoe("one", None), shoe("two", Some(100))]);
        assert_eq!(html.matches("class=\"shoe-card\"").count(), 2);
        assert!(html.contains("/shoe/one"));
        assert!(html.contains("/shoe/two"));
        assert_eq!(html.matches("shoe-card-tag--sale").count(), 1);
    }
}
