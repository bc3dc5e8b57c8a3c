//! Vehicle image path resolution
//!
//! Pure string composition on top of catalog matching; no I/O and no
//! existence checks. The rendering layer owns missing-file handling and can
//! compare a resolved path against [`AssetResolver::default_path`] to detect
//! the degraded case.

use roadquest_domain::AssetConfig;

use super::catalog::resolve;

/// Builds image paths for recommended vehicles against a fixed catalog.
#[derive(Debug, Clone)]
pub struct AssetResolver<'c> {
    catalog: &'c [&'c str],
    root: String,
    extension: String,
}

impl<'c> AssetResolver<'c> {
    /// Create a resolver over `catalog` using the configured asset location.
    ///
    /// `catalog` must be non-empty; its first entry doubles as the default
    /// asset.
    pub fn new(catalog: &'c [&'c str], assets: &AssetConfig) -> Self {
        Self {
            catalog,
            root: assets.root.clone(),
            extension: assets.extension.clone(),
        }
    }

    /// Path of the image matched for a model/trim pair.
    ///
    /// Always a path pointing at a literal catalog member.
    #[must_use]
    pub fn resolve_path(&self, base_model: &str, trim_name: &str) -> String {
        self.path_for(resolve(base_model, trim_name, self.catalog))
    }

    /// Path of the default asset (first catalog entry).
    #[must_use]
    pub fn default_path(&self) -> String {
        self.path_for(self.catalog[0])
    }

    /// Catalog entry matched for a model/trim pair, without path decoration.
    #[must_use]
    pub fn resolve_entry(&self, base_model: &str, trim_name: &str) -> &'c str {
        resolve(base_model, trim_name, self.catalog)
    }

    fn path_for(&self, entry: &str) -> String {
        format!("{}/{}.{}", self.root, entry, self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &[&str] = &["RAV4 XLE", "Camry SE"];

    fn resolver() -> AssetResolver<'static> {
        AssetResolver::new(CATALOG, &AssetConfig::default())
    }

    #[test]
    fn composes_root_entry_and_extension() {
        let path = resolver().resolve_path("Camry", "SE");
        assert_eq!(path, "/vehicle-images/Camry SE.png");
    }

    #[test]
    fn default_path_points_at_first_entry() {
        assert_eq!(resolver().default_path(), "/vehicle-images/RAV4 XLE.png");
    }

    #[test]
    fn unmatched_names_yield_the_default_path() {
        let assets = resolver();
        let path = assets.resolve_path("Zorg", "Blorp");
        assert_eq!(path, assets.default_path());
    }

    #[test]
    fn custom_asset_config_is_honored() {
        let config = AssetConfig { root: "https://cdn.example/cars".to_string(), extension: "webp".to_string() };
        let assets = AssetResolver::new(CATALOG, &config);
        assert_eq!(assets.resolve_path("Camry", "SE"), "https://cdn.example/cars/Camry SE.webp");
    }
}
