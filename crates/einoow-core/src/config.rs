use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Site configuration bundled into the client at compile time.
const BUNDLED_SITE_TOML: &str = include_str!("../site.toml");

/// Site-wide settings: identity, SEO defaults and presentation limits.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: String,
    /// Absolute origin used to build canonical and preview URLs, no trailing slash.
    pub base_url: String,
    pub default_description: String,
    /// Falls back to `<base_url>/og-image.png` when unset.
    pub default_og_image: Option<String>,
    pub redirect_delay_ms: u64,
    pub card_description_chars: usize,
    pub card_tag_limit: usize,
    /// Restore every metadata slot on view teardown instead of only the title.
    pub restore_all_on_leave: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Einoow".to_string(),
            base_url: "https://einoow.com".to_string(),
            default_description: "Discover and play creative web games. From AI-powered strategy \
                                  to casual fun, Einoow brings innovative gaming experiences to \
                                  your browser."
                .to_string(),
            default_og_image: None,
            redirect_delay_ms: 2000,
            card_description_chars: 120,
            card_tag_limit: 4,
            restore_all_on_leave: true,
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<SiteConfig>(content)?)
    }

    /// Load the bundled `site.toml`, then apply compile-time overrides.
    pub fn load() -> Self {
        let mut config = match Self::from_toml(BUNDLED_SITE_TOML) {
            Ok(cfg) => {
                tracing::info!("Loaded bundled site configuration");
                cfg
            },
            Err(e) => {
                tracing::warn!("Failed to parse bundled site.toml: {e}, using defaults");
                SiteConfig::default()
            },
        };

        config.apply_overrides(
            option_env!("EINOOW_SITE_NAME"),
            option_env!("EINOOW_BASE_URL"),
        );
        config
    }

    fn apply_overrides(&mut self, site_name: Option<&str>, base_url: Option<&str>) {
        if let Some(name) = site_name.map(str::trim)
            && !name.is_empty()
        {
            self.site_name = name.to_string();
        }
        if let Some(url) = base_url.map(str::trim)
            && !url.is_empty()
        {
            self.base_url = url.to_string();
        }
    }

    /// Reject settings the site cannot run with; warn about suspicious ones.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_name.trim().is_empty() {
            return Err(ConfigError::Invalid("site_name must not be empty".into()));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ConfigError::Invalid(format!(
                "base_url `{}` must be an absolute http(s) URL",
                self.base_url
            )));
        }
        if self.redirect_delay_ms == 0 {
            return Err(ConfigError::Invalid("redirect_delay_ms must be > 0".into()));
        }
        if self.base_url.ends_with('/') {
            tracing::warn!(
                base_url = %self.base_url,
                "base_url has a trailing slash; canonical URLs will contain `//`"
            );
        }
        if self.card_tag_limit == 0 {
            tracing::warn!("card_tag_limit is 0; cards will show no tags");
        }
        Ok(())
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }

    pub fn og_image_fallback(&self) -> String {
        match &self.default_og_image {
            Some(image) => image.clone(),
            None => format!("{}/og-image.png", self.base_url),
        }
    }

    /// Absolute URL for a site-relative path.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses_and_validates() {
        let config = SiteConfig::from_toml(BUNDLED_SITE_TOML).unwrap();
        assert_eq!(config.site_name, "Einoow");
        assert_eq!(config.redirect_delay(), Duration::from_millis(2000));
        config.validate().unwrap();
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config = SiteConfig::from_toml("site_name = \"Arcade\"").unwrap();
        assert_eq!(config.site_name, "Arcade");
        assert_eq!(config.base_url, SiteConfig::default().base_url);
        assert!(config.restore_all_on_leave);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SiteConfig::from_toml("site_name = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn og_image_falls_back_to_base_url() {
        let config = SiteConfig::default();
        assert_eq!(config.og_image_fallback(), "https://einoow.com/og-image.png");

        let custom = SiteConfig {
            default_og_image: Some("https://cdn.example/og.png".into()),
            ..SiteConfig::default()
        };
        assert_eq!(custom.og_image_fallback(), "https://cdn.example/og.png");
    }

    #[test]
    fn overrides_ignore_blank_values() {
        let mut config = SiteConfig::default();
        config.apply_overrides(Some("  "), Some("https://staging.einoow.com"));
        assert_eq!(config.site_name, "Einoow");
        assert_eq!(config.base_url, "https://staging.einoow.com");
    }

    #[test]
    fn validate_rejects_zero_delay_and_relative_base() {
        let zero_delay = SiteConfig {
            redirect_delay_ms: 0,
            ..SiteConfig::default()
        };
        assert!(zero_delay.validate().is_err());

        let relative = SiteConfig {
            base_url: "einoow.com".into(),
            ..SiteConfig::default()
        };
        assert!(relative.validate().is_err());
    }
}
