use dioxus::prelude::*;

use crate::{
    domain::ShoeListing,
    ui::{components::ShoeGrid, theme},
    util::{assets, catalog::load_catalog},
};

#[component]
pub fn App() -> Element {
    let catalog = use_hook(load_listings);

    rsx! {
        document::Style { "{theme::root_variables()}" }
        document::Style { "{assets::main_css()}" }
        main {
            class: "storefront",
            match catalog {
                Ok(listings) => rsx! { ShoeGrid { listings } },
                Err(message) => rsx! {
                    p { class: "storefront-error", "Could not load shoes: {message}" }
                },
            }
        }
    }
}

fn load_listings() -> Result<Vec<ShoeListing>, String> {
    match load_catalog() {
        Ok(listings) => {
            tracing::info!(count = listings.len(), "catalog ready");
            Ok(listings)
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to load catalog");
            Err(err.to_string())
        }
    }
}
