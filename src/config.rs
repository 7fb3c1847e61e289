//! Runtime configuration for the admin panel
//!
//! Paths are relative to the page origin unless `api_base` is set, in which
//! case API calls are joined onto it.

use url::Url;

/// Default localStorage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "accessToken";

const ADMIN_PATH: &str = "/admin";
const LOGIN_PATH: &str = "/admin/login";
const WALLETS_ENDPOINT: &str = "/api/wallets";
const LOGIN_ENDPOINT: &str = "/login";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Absolute API origin, e.g. `https://bot.example.com`. Empty means same origin.
    pub api_base: String,
    pub admin_path: String,
    pub login_path: String,
    pub token_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            admin_path: ADMIN_PATH.to_string(),
            login_path: LOGIN_PATH.to_string(),
            token_key: TOKEN_STORAGE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, with the API base optionally baked in at build time
    /// through `WALLET_ADMIN_API_BASE`.
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(base) = option_env!("WALLET_ADMIN_API_BASE") {
            config.api_base = base.trim_end_matches('/').to_string();
        }
        config
    }

    pub fn wallets_url(&self) -> String {
        self.endpoint(WALLETS_ENDPOINT)
    }

    pub fn wallet_url(&self, id: i64) -> String {
        self.endpoint(&format!("{}/{}", WALLETS_ENDPOINT, id))
    }

    pub fn login_url(&self) -> String {
        self.endpoint(LOGIN_ENDPOINT)
    }

    fn endpoint(&self, path: &str) -> String {
        if self.api_base.is_empty() {
            return path.to_string();
        }

        match Url::parse(&self.api_base).and_then(|base| base.join(path)) {
            Ok(url) => url.to_string(),
            Err(e) => {
                log::warn!("Invalid api_base {:?}: {}, using relative path", self.api_base, e);
                path.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_endpoints_by_default() {
        let config = AppConfig::default();
        assert_eq!(config.wallets_url(), "/api/wallets");
        assert_eq!(config.wallet_url(7), "/api/wallets/7");
        assert_eq!(config.login_url(), "/login");
        assert_eq!(config.token_key, "accessToken");
    }

    #[test]
    fn test_endpoints_joined_onto_api_base() {
        let config = AppConfig {
            api_base: "https://bot.example.com".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.wallets_url(), "https://bot.example.com/api/wallets");
        assert_eq!(config.wallet_url(3), "https://bot.example.com/api/wallets/3");
    }

    #[test]
    fn test_invalid_api_base_falls_back_to_relative() {
        let config = AppConfig {
            api_base: "not a url".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.login_url(), "/login");
    }
}
