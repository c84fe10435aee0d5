use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Error as SerdeError;

use crate::domain::ShoeListing;
use crate::util::assets;

/// Names a JSON file to load instead of the bundled catalog.
pub const CATALOG_ENV: &str = "SHOE_CATALOG";

/// Override path from the raw `SHOE_CATALOG` value. Empty counts as unset.
fn catalog_source(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Loads the listings to display, preferring the `SHOE_CATALOG` file when set.
pub fn load_catalog() -> Result<Vec<ShoeListing>, CatalogError> {
    match catalog_source(std::env::var_os(CATALOG_ENV)) {
        Some(path) => load_catalog_from(&path),
        None => load_bundled_catalog(),
    }
}

pub fn load_bundled_catalog() -> Result<Vec<ShoeListing>, CatalogError> {
    let data = assets::catalog_json().ok_or(CatalogError::MissingAsset)?;
    let listings = parse_catalog(&data)?;
    tracing::debug!(count = listings.len(), "loaded bundled catalog");
    Ok(listings)
}

pub fn load_catalog_from(path: &Path) -> Result<Vec<ShoeListing>, CatalogError> {
    let data = fs::read(path)?;
    let listings = parse_catalog(&data)?;
    tracing::debug!(count = listings.len(), path = %path.display(), "loaded catalog file");
    Ok(listings)
}

/// Parses a JSON array of listings. Slugs double as link targets, so they must be unique.
pub fn parse_catalog(data: &[u8]) -> Result<Vec<ShoeListing>, CatalogError> {
    let listings: Vec<ShoeListing> = serde_json::from_slice(data)?;
    if let Some(slug) = first_duplicate_slug(&listings) {
        return Err(CatalogError::DuplicateSlug(slug));
    }
    Ok(listings)
}

fn first_duplicate_slug(listings: &[ShoeListing]) -> Option<String> {
    let mut seen = HashSet::new();
    listings
        .iter()
        .find(|listing| !seen.insert(listing.slug.as_str()))
        .map(|listing| listing.slug.clone())
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("bundled catalog asset is missing")]
    MissingAsset,
    #[error("duplicate slug in catalog: {0}")]
    DuplicateSlug(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const TWO_SHOES: &str = r#"[
        {"slug":"tail-swoop","name":"Tail-Swoop","imageSrc":"/a.jpg","price":7500,
         "salePrice":null,"releaseDate":"2026-01-01T00:00:00Z","numOfColors":1},
        {"slug":"hyperventilate","name":"Hyperventilate","imageSrc":"/b.jpg","price":12000,
         "salePrice":9500,"releaseDate":"2026-02-01T00:00:00Z","numOfColors":3}
    ]"#;

    #[test]
    fn parses_a_listing_array() {
        let listings = parse_catalog(TWO_SHOES.as_bytes()).unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].sale_price, None);
        assert_eq!(listings[1].sale_price, Some(9500));
    }

    #[test]
    fn rejects_duplicate_slugs() {
        let raw = r#"[
            {"slug":"dup","name":"A","imageSrc":"/a.jpg","price":1,
             "releaseDate":"2026-01-01T00:00:00Z","numOfColors":1},
            {"slug":"dup","name":"B","imageSrc":"/b.jpg","price":2,
             "releaseDate":"2026-01-01T00:00:00Z","numOfColors":2}
        ]"#;
        match parse_catalog(raw.as_bytes()) {
            Err(CatalogError::DuplicateSlug(slug)) => assert_eq!(slug, "dup"),
            other => panic!("expected duplicate slug error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_catalog(b"{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn bundled_catalog_parses() {
        let listings = load_bundled_catalog().unwrap();
        assert!(!listings.is_empty());
    }

    #[test]
    fn loads_from_file_and_reports_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        fs::write(&path, TWO_SHOES).unwrap();

        let listings = load_catalog_from(&path).unwrap();
        assert_eq!(listings[1].slug, "hyperventilate");

        let missing = load_catalog_from(&temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(missing, CatalogError::Io(_)));
    }

    #[test]
    fn catalog_override_set_empty_and_unset() {
        assert_eq!(
            catalog_source(Some(OsString::from("/srv/shoes.json"))),
            Some(PathBuf::from("/srv/shoes.json"))
        );
        assert_eq!(catalog_source(Some(OsString::new())), None);
        assert_eq!(catalog_source(None), None);
    }
}
