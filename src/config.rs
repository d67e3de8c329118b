use crate::client::Client;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the products API, including the `/api` prefix.
    pub api: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: Client::DEFAULT_API.to_owned(),
        }
    }
}

impl Config {
    pub const API_VAR: &'static str = "PRODUCTS_API";

    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api = lookup(Self::API_VAR)
            .filter(|api| !api.trim().is_empty())
            .unwrap_or_else(|| Client::DEFAULT_API.to_owned());
        Self { api }
    }

    pub fn client(&self) -> Client {
        Client::new(&self.api, reqwest::Client::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_api() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
        assert_eq!(
            Config::from_lookup(|_| Some("  ".into())).api,
            Client::DEFAULT_API
        );
        assert_eq!(
            Config::from_lookup(|_| Some("http://shop:9000/api".into())).api,
            "http://shop:9000/api"
        );
    }
}
