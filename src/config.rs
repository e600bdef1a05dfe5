use crate::errors::ConfigError;
use reqwest::Url;
use std::{env, time::Duration};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_GOALS_PATH: &str = "/goals";
pub const DEFAULT_LIST_PATH: &str = "/student/goals";
pub const DEFAULT_TOAST_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone)]
pub struct PageConfig {
    pub base_url: Url,
    /// Prefix of the single-goal resource, `{goals_path}/{id}`.
    pub goals_path: String,
    /// Goal list endpoint; also the action of the create form.
    pub list_path: String,
    pub toast_delay: Duration,
}

impl PageConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            goals_path: DEFAULT_GOALS_PATH.to_string(),
            list_path: DEFAULT_LIST_PATH.to_string(),
            toast_delay: DEFAULT_TOAST_DELAY,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_base = lookup("GOAL_PAGE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_base).map_err(|err| ConfigError::InvalidBaseUrl {
            value: raw_base.clone(),
            reason: err.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                value: raw_base,
                reason: "not a base url".to_string(),
            });
        }

        let toast_delay = match lookup("GOAL_PAGE_TOAST_DELAY_MS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidToastDelay(value))?,
            None => DEFAULT_TOAST_DELAY,
        };

        Ok(Self {
            base_url,
            goals_path: lookup("GOAL_PAGE_GOALS_PATH")
                .unwrap_or_else(|| DEFAULT_GOALS_PATH.to_string()),
            list_path: lookup("GOAL_PAGE_LIST_PATH")
                .unwrap_or_else(|| DEFAULT_LIST_PATH.to_string()),
            toast_delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = PageConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:5000/");
        assert_eq!(config.goals_path, "/goals");
        assert_eq!(config.list_path, "/student/goals");
        assert_eq!(config.toast_delay, Duration::from_millis(3000));
    }

    #[test]
    fn overrides_are_applied() {
        let config = PageConfig::from_lookup(lookup_from(&[
            ("GOAL_PAGE_BASE_URL", "https://goals.example.test"),
            ("GOAL_PAGE_GOALS_PATH", "/api/goals"),
            ("GOAL_PAGE_TOAST_DELAY_MS", " 1500 "),
        ]))
        .unwrap();
        assert_eq!(config.base_url.host_str(), Some("goals.example.test"));
        assert_eq!(config.goals_path, "/api/goals");
        assert_eq!(config.toast_delay, Duration::from_millis(1500));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            PageConfig::from_lookup(lookup_from(&[("GOAL_PAGE_BASE_URL", "not a url")])),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            PageConfig::from_lookup(lookup_from(&[("GOAL_PAGE_TOAST_DELAY_MS", "soon")])),
            Err(ConfigError::InvalidToastDelay(_))
        ));
    }
}
