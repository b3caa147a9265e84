use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub list: ListConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute API origin. Empty means "same host as the page, on `port`".
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
    #[serde(default = "default_user_key")]
    pub user_key: String,
    #[serde(default = "default_sign_in_route")]
    pub sign_in_route: String,
}

fn default_port() -> u16 {
    3000
}

fn default_prefix() -> String {
    "/api".to_string()
}

fn default_page_size() -> usize {
    super::list_query::PAGE_SIZE
}

fn default_token_key() -> String {
    "token".to_string()
}

fn default_user_key() -> String {
    "user".to_string()
}

fn default_sign_in_route() -> String {
    "/signin".to_string()
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000
prefix = "/api"

[list]
page_size = 10

[auth]
token_key = "token"
user_key = "user"
sign_in_route = "/signin"
"#;

impl ClientConfig {
    pub fn default_config() -> Self {
        // The embedded document is covered by `default_config_loads`.
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|_| Self::fallback())
    }

    /// Parse an override document. Missing sections keep their defaults.
    pub fn from_toml(source: &str) -> Result<Self, toml::de::Error> {
        #[derive(Deserialize)]
        struct Partial {
            api: Option<ApiConfig>,
            list: Option<ListConfig>,
            auth: Option<AuthConfig>,
        }

        let partial: Partial = toml::from_str(source)?;
        let defaults = Self::default_config();
        let mut config = Self {
            api: partial.api.unwrap_or(defaults.api),
            list: partial.list.unwrap_or(defaults.list),
            auth: partial.auth.unwrap_or(defaults.auth),
        };
        if config.list.page_size == 0 {
            config.list.page_size = default_page_size();
        }
        Ok(config)
    }

    fn fallback() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                port: default_port(),
                prefix: default_prefix(),
            },
            list: ListConfig {
                page_size: default_page_size(),
            },
            auth: AuthConfig {
                token_key: default_token_key(),
                user_key: default_user_key(),
                sign_in_route: default_sign_in_route(),
            },
        }
    }

    /// API origin for a page served from `protocol` (e.g. `"https:"`) and `hostname`.
    pub fn api_base(&self, protocol: &str, hostname: &str) -> String {
        let configured = self.api.base_url.trim().trim_end_matches('/');
        if !configured.is_empty() {
            return configured.to_string();
        }
        format!("{}//{}:{}", protocol, hostname, self.api.port)
    }

    /// Full URL of an endpoint path such as `/furniture/12`.
    pub fn endpoint(&self, base: &str, path: &str) -> String {
        let prefix = self.api.prefix.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}{}", base, prefix, path)
        } else {
            format!("{}{}/{}", base, prefix, path)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config: Result<ClientConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.list.page_size, 10);
        assert_eq!(config.auth.sign_in_route, "/signin");
        assert_eq!(config, ClientConfig::fallback());
    }

    #[test]
    fn api_base_follows_page_location() {
        let config = ClientConfig::default_config();
        assert_eq!(
            config.api_base("https:", "bienes.example.org"),
            "https://bienes.example.org:3000"
        );
    }

    #[test]
    fn explicit_base_url_wins() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.example.org/"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base("http:", "localhost"), "https://api.example.org");
        assert_eq!(config.api.prefix, "/api");
        assert_eq!(config.list.page_size, 10);
    }

    #[test]
    fn endpoint_joins_prefix() {
        let config = ClientConfig::default_config();
        let base = "http://localhost:3000";
        assert_eq!(
            config.endpoint(base, "/furniture/3"),
            "http://localhost:3000/api/furniture/3"
        );
        assert_eq!(
            config.endpoint(base, "dept"),
            "http://localhost:3000/api/dept"
        );
    }

    #[test]
    fn zero_page_size_is_ignored() {
        let config = ClientConfig::from_toml("[list]\npage_size = 0\n").unwrap();
        assert_eq!(config.list.page_size, 10);
    }
}
