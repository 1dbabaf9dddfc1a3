use crate::afx::Store;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CartConfig {
    /// Storefront the ingredient list is submitted to
    #[serde(default)]
    pub store: Store,
    /// Ingredient extraction strategies
    #[serde(default)]
    pub extractors: ExtractorsConfig,
}

/// Which ingredient resolution strategies run. Title resolution always runs.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorsConfig {
    /// Read `recipeIngredient` from JSON-LD blocks
    #[serde(default = "default_enabled")]
    pub json_ld: bool,
    /// Fall back to `<li>` items of ingredient-named lists and divs
    #[serde(default = "default_enabled")]
    pub html_lists: bool,
}

impl Default for ExtractorsConfig {
    fn default() -> Self {
        Self {
            json_ld: default_enabled(),
            html_lists: default_enabled(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

impl CartConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_CART__ prefix
    /// 2. recipe-cart.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_CART__EXTRACTORS__HTML_LISTS=false
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<CartConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-cart").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_CART")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<CartConfig, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn test_default_values() {
        let config = CartConfig::default();
        assert_eq!(config.store, Store::WholeFoods);
        assert!(config.extractors.json_ld);
        assert!(config.extractors.html_lists);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config.store, Store::WholeFoods);
        assert!(config.extractors.json_ld);
        assert!(config.extractors.html_lists);
    }

    #[test]
    fn test_toml_overrides() {
        let config = from_toml(
            r#"
            store = "amazonfresh"

            [extractors]
            html_lists = false
            "#,
        )
        .unwrap();

        assert_eq!(config.store, Store::AmazonFresh);
        assert!(config.extractors.json_ld);
        assert!(!config.extractors.html_lists);
    }

    #[test]
    fn test_unknown_store_rejected() {
        assert!(from_toml(r#"store = "corner-shop""#).is_err());
    }

    #[test]
    fn test_load_without_file_or_env_gives_defaults() {
        let overridden = std::env::vars().any(|(key, _)| key.starts_with("RECIPE_CART__"));
        if overridden || std::path::Path::new("recipe-cart.toml").exists() {
            return;
        }

        let config = load_config().unwrap();
        assert_eq!(config.store, Store::WholeFoods);
        assert!(config.extractors.json_ld);
        assert!(config.extractors.html_lists);
    }
}
