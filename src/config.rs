//! Dashboard Configuration
//!
//! Build-time settings. The backend sits behind the same reverse proxy as the
//! page in both dev and production, so the base URL is normally empty.

/// Backend base URL baked in at compile time, if any.
const BUILD_API_BASE_URL: Option<&str> = option_env!("DASHBOARD_API_BASE_URL");

const DEV_API_BASE_URL: &str = "";
const PROD_API_BASE_URL: &str = "";

/// Candidate locations of the team roster spreadsheet, tried in order.
pub const PERSONNEL_PATHS: [&str; 3] = [
    "/Состав команд.xlsx",
    "./Состав команд.xlsx",
    "Состав команд.xlsx",
];

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Prefix for backend endpoints; empty means "same origin as the page"
    pub api_base_url: String,
    pub items_per_page: usize,
    /// Page links shown at once in the pagination bar
    pub max_visible_pages: usize,
    /// Quiet period before a typed query triggers a search
    pub debounce_ms: u32,
    pub request_timeout_ms: u32,
    pub personnel_paths: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            items_per_page: 6,
            max_visible_pages: 5,
            debounce_ms: 1000,
            request_timeout_ms: 30_000,
            personnel_paths: PERSONNEL_PATHS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

impl DashboardConfig {
    /// Defaults plus the dev/production base URL switch.
    pub fn from_build_env() -> Self {
        let api_base_url = match BUILD_API_BASE_URL {
            Some(url) => url,
            None if cfg!(debug_assertions) => DEV_API_BASE_URL,
            None => PROD_API_BASE_URL,
        };

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.items_per_page, 6);
        assert_eq!(config.max_visible_pages, 5);
        assert_eq!(config.debounce_ms, 1000);
        assert_eq!(config.personnel_paths.len(), 3);
        assert_eq!(config.personnel_paths[0], "/Состав команд.xlsx");
    }

    #[test]
    fn test_build_env_keeps_pipeline_defaults() {
        let config = DashboardConfig::from_build_env();
        assert!(!config.api_base_url.ends_with('/'));
        assert_eq!(config.items_per_page, DashboardConfig::default().items_per_page);
    }
}
