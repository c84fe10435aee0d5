use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

pub fn spacer_style(size: u32, axis: Option<Axis>) -> String {
    let width = match axis {
        Some(Axis::Vertical) => String::new(),
        _ => format!("width: {size}px; min-width: {size}px; "),
    };
    let height = match axis {
        Some(Axis::Horizontal) => String::new(),
        _ => format!("height: {size}px; min-height: {size}px; "),
    };
    format!("display: block; {width}{height}").trim_end().to_string()
}

/// Fixed-size gap. Without an axis both dimensions are fixed.
#[component]
pub fn Spacer(size: u32, axis: Option<Axis>) -> Element {
    let style = spacer_style(size, axis);
    rsx! {
        span { style: "{style}" }
    }
}
