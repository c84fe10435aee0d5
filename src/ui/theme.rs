//! Palette, weights and class helpers shared by the storefront components.

// ============================================
// PALETTE
// ============================================

pub const COLOR_WHITE: &str = "hsl(0deg 0% 100%)";
pub const COLOR_PRIMARY: &str = "hsl(340deg 65% 47%)";
pub const COLOR_SECONDARY: &str = "hsl(240deg 60% 63%)";
pub const COLOR_GRAY_700: &str = "hsl(220deg 5% 40%)";
pub const COLOR_GRAY_900: &str = "hsl(220deg 3% 20%)";

// ============================================
// FONT WEIGHTS
// ============================================

pub const WEIGHT_NORMAL: u16 = 500;
pub const WEIGHT_MEDIUM: u16 = 600;
pub const WEIGHT_BOLD: u16 = 800;

/// `:root` custom properties consumed by `assets/main.css`.
pub fn root_variables() -> String {
    format!(
        ":root {{ --color-white: {COLOR_WHITE}; --color-primary: {COLOR_PRIMARY}; \
         --color-secondary: {COLOR_SECONDARY}; --color-gray-700: {COLOR_GRAY_700}; \
         --color-gray-900: {COLOR_GRAY_900}; --weight-normal: {WEIGHT_NORMAL}; \
         --weight-medium: {WEIGHT_MEDIUM}; --weight-bold: {WEIGHT_BOLD}; }}"
    )
}

// ============================================
// CARD STYLES
// ============================================

pub fn price_class(has_sale: bool) -> &'static str {
    if has_sale {
        "shoe-card-price shoe-card-price--struck"
    } else {
        "shoe-card-price"
    }
}

pub const TAG_SALE: &str = "shoe-card-tag shoe-card-tag--sale";
pub const TAG_NEW_RELEASE: &str = "shoe-card-tag shoe-card-tag--new-release";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_variables_cover_palette_and_weights() {
        let css = root_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-primary: hsl(340deg 65% 47%);"));
        assert!(css.contains("--weight-medium: 600;"));
    }

    #[test]
    fn only_sale_prices_are_struck() {
        assert!(price_class(true).contains("--struck"));
        assert!(!price_class(false).contains("--struck"));
    }
}
