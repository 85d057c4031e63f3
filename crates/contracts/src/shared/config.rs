use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub contact: ContactConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub blog: BlogConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ContactConfig {
    pub endpoint: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BlogConfig {
    pub page_size: usize,
    pub home_url: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            page_size: 6,
            home_url: "https://nischal-bhandari.blogspot.com/".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    pub duration_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { duration_ms: 5000 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EffectsConfig {
    pub header_scroll_threshold: f64,
    pub scroll_top_threshold: f64,
    pub count_steps: u32,
    pub count_interval_ms: u32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            header_scroll_threshold: 10.0,
            scroll_top_threshold: 300.0,
            count_steps: 50,
            count_interval_ms: 30,
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[contact]
endpoint = "https://formspree.io/f/your-form-id"

[search]
debounce_ms = 300

[blog]
page_size = 6
home_url = "https://nischal-bhandari.blogspot.com/"

[notifications]
duration_ms = 5000

[effects]
header_scroll_threshold = 10.0
scroll_top_threshold = 300.0
count_steps = 50
count_interval_ms = 30
"#;

/// Parse a configuration document
pub fn parse_config(contents: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(contents)?;
    if config.contact.endpoint.trim().is_empty() {
        anyhow::bail!("contact.endpoint must not be empty");
    }
    Ok(config)
}

/// Load configuration, preferring an override document when it parses.
///
/// Falls back to the embedded default otherwise.
pub fn load_config(override_doc: Option<&str>) -> anyhow::Result<SiteConfig> {
    if let Some(doc) = override_doc {
        match parse_config(doc) {
            Ok(config) => {
                log::info!("Loaded site configuration override");
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring invalid site configuration: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.blog.page_size, 6);
        assert_eq!(config.notifications.duration_ms, 5000);
        assert!(config.contact.endpoint.starts_with("https://"));
    }

    #[test]
    fn test_partial_override_uses_section_defaults() {
        let config = load_config(Some(
            "[contact]\nendpoint = \"https://example.com/f\"\n[blog]\npage_size = 3\n",
        ))
        .unwrap();
        assert_eq!(config.contact.endpoint, "https://example.com/f");
        assert_eq!(config.blog.page_size, 3);
        assert_eq!(config.blog.home_url, BlogConfig::default().home_url);
        assert_eq!(config.effects, EffectsConfig::default());
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = load_config(Some("[contact]\nendpoint = \"\"\n")).unwrap();
        assert_eq!(config, parse_config(DEFAULT_CONFIG).unwrap());

        let config = load_config(Some("not toml at all [")).unwrap();
        assert_eq!(config.search.debounce_ms, 300);
    }
}
