//! Build-time configuration.
//!
//! A WASM bundle has no process environment at runtime, so overrides are read
//! with `option_env!` when the bundle is compiled, e.g.
//! `EXPENSE_API_URL=https://example.org/api trunk build`.

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Keep fetching until at least this many date groups are visible
pub const DEFAULT_MIN_VISIBLE_GROUPS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub page_size: u32,
    pub min_visible_groups: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            min_visible_groups: DEFAULT_MIN_VISIBLE_GROUPS,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("EXPENSE_API_URL"),
            option_env!("EXPENSE_PAGE_SIZE"),
            option_env!("EXPENSE_MIN_GROUPS"),
        )
    }

    /// Unparseable or empty values fall back to the defaults
    fn from_values(api_url: Option<&str>, page_size: Option<&str>, min_groups: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: api_url
                .map(|url| url.trim().trim_end_matches('/'))
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.api_url),
            page_size: page_size
                .and_then(|v| v.trim().parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.page_size),
            min_visible_groups: min_groups
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.min_visible_groups),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.page_size, 10);
        assert_eq!(config.min_visible_groups, 10);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("https://api.example.org/v1/"), Some("25"), Some("4"));
        assert_eq!(config.api_url, "https://api.example.org/v1");
        assert_eq!(config.page_size, 25);
        assert_eq!(config.min_visible_groups, 4);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), Some("0"), Some("many"));
        assert_eq!(config, AppConfig::default());
    }
}
