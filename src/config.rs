use serde::{Deserialize, Serialize};

use crate::snowfall::SnowfallConfig;

/// Subpath the static export is served from in production.
pub const PRODUCTION_BASE_PATH: &str = "/bd-project";

const CONFIG_ELEMENT_ID: &str = "app-config";

/// Root prefix for static assets, fixed at build time.
///
/// `TIMELINE_BASE_PATH` set during the build wins; otherwise debug builds
/// serve from the root and release builds from [`PRODUCTION_BASE_PATH`].
pub fn build_base_path() -> &'static str {
    match option_env!("TIMELINE_BASE_PATH") {
        Some(path) => path,
        None if cfg!(debug_assertions) => "",
        None => PRODUCTION_BASE_PATH,
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides the build-time asset prefix when set.
    pub base_path: Option<String>,
    pub debug_logs: bool,
    pub snowfall: SnowfallConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_path: None,
            debug_logs: cfg!(debug_assertions),
            snowfall: SnowfallConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn assets(&self) -> AssetPaths {
        AssetPaths::new(self.base_path.as_deref().unwrap_or(build_base_path()))
    }
}

pub fn parse(raw: &str) -> Result<AppConfig, String> {
    if raw.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    serde_json::from_str(raw).map_err(|e| format!("Invalid app config: {}", e))
}

/// Reads the optional `<script id="app-config" type="application/json">`
/// block from the page. Missing or broken config falls back to defaults.
pub fn load() -> AppConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) => parse(&raw).unwrap_or_else(|e| {
            web_sys::console::warn_1(&e.into());
            AppConfig::default()
        }),
        None => AppConfig::default(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssetPaths {
    base: String,
}

impl AssetPaths {
    pub fn new(base: &str) -> Self {
        Self { base: base.trim_end_matches('/').to_string() }
    }

    pub fn image(&self, year: i32) -> String {
        format!("{}/images/{}.jpg", self.base, year)
    }

    pub fn background_track(&self) -> String {
        format!("{}/sounds/freedom.mp3", self.base)
    }

    pub fn birthday_track(&self) -> String {
        format!("{}/sounds/blue.mp3", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_paths_under_root() {
        let assets = AssetPaths::new("");
        assert_eq!(assets.image(2017), "/images/2017.jpg");
        assert_eq!(assets.background_track(), "/sounds/freedom.mp3");
        assert_eq!(assets.birthday_track(), "/sounds/blue.mp3");
    }

    #[test]
    fn asset_paths_under_subpath() {
        let assets = AssetPaths::new("/bd-project/");
        assert_eq!(assets.image(2025), "/bd-project/images/2025.jpg");
        assert_eq!(assets.birthday_track(), "/bd-project/sounds/blue.mp3");
    }

    #[test]
    fn every_year_has_its_own_image() {
        let assets = AssetPaths::new(PRODUCTION_BASE_PATH);
        for year in crate::timeline::YEARS {
            assert_eq!(assets.image(year), format!("/bd-project/images/{}.jpg", year));
        }
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(parse("").unwrap(), AppConfig::default());
        assert_eq!(parse("  \n").unwrap(), AppConfig::default());
        assert_eq!(parse("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = parse(r#"{ "base_path": "/story", "snowfall": { "count": 80 } }"#).unwrap();
        assert_eq!(config.base_path.as_deref(), Some("/story"));
        assert_eq!(config.snowfall.count, 80);
        assert_eq!(config.snowfall.palette.len(), 5);
        assert_eq!(config.snowfall.size_min, 4.0);
        assert_eq!(config.assets().image(2019), "/story/images/2019.jpg");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let err = parse("{ not json").unwrap_err();
        assert!(err.starts_with("Invalid app config"));
    }

    #[test]
    fn default_assets_use_build_prefix() {
        let assets = AppConfig::default().assets();
        assert_eq!(assets.image(2020), format!("{}/images/2020.jpg", build_base_path()));
    }
}
