/// Runtime configuration
///
/// Works out where the project data file lives: on a content host when a
/// base URL is set, otherwise under a local static site root.

use crate::error::{PortfolioError, Result};
use reqwest::Url;
use std::env;
use std::path::PathBuf;

pub const SITE_ROOT_VAR: &str = "PORTFOLIO_SITE_ROOT";
pub const BASE_URL_VAR: &str = "PORTFOLIO_BASE_URL";
pub const PROJECTS_PATH_VAR: &str = "PORTFOLIO_PROJECTS_PATH";

const DEFAULT_SITE_ROOT: &str = "public";
const DEFAULT_PROJECTS_PATH: &str = "projects.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioConfig {
    pub site_root: PathBuf,
    pub base_url: Option<Url>,
    pub projects_path: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from(DEFAULT_SITE_ROOT),
            base_url: None,
            projects_path: DEFAULT_PROJECTS_PATH.to_string(),
        }
    }
}

impl PortfolioConfig {
    /// Build config from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build config from any key lookup
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(root) = get(SITE_ROOT_VAR) {
            config.site_root = PathBuf::from(root);
        }

        if let Some(path) = get(PROJECTS_PATH_VAR) {
            config.projects_path = path;
        }

        if let Some(raw) = get(BASE_URL_VAR) {
            config.base_url = Some(parse_base_url(&raw)?);
        }

        Ok(config)
    }

    /// Location of the project data file, URL or filesystem path
    ///
    /// The path is always taken relative to the site, so a base URL with a
    /// subpath keeps it.
    pub fn projects_location(&self) -> Result<String> {
        let relative = self.projects_path.trim_start_matches('/');

        match &self.base_url {
            Some(base) => {
                let mut base = base.clone();
                if !base.path().ends_with('/') {
                    let dir = format!("{}/", base.path());
                    base.set_path(&dir);
                }

                base.join(relative)
                    .map(|url| url.to_string())
                    .map_err(|e| {
                        PortfolioError::Config(format!(
                            "cannot join '{}' onto {}: {}",
                            self.projects_path, base, e
                        ))
                    })
            }
            None => Ok(self.site_root.join(relative).display().to_string()),
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| PortfolioError::Config(format!("invalid base URL '{}': {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(PortfolioError::Config(format!(
            "base URL must be http or https, got '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PortfolioConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, PortfolioConfig::default());

        let location = config.projects_location().unwrap();
        assert_eq!(PathBuf::from(location), PathBuf::from("public").join("projects.json"));
    }

    #[test]
    fn test_base_url_location() {
        let config = PortfolioConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "https://stefsoh.dev/"),
            (PROJECTS_PATH_VAR, "/projects.json"),
        ]))
        .unwrap();

        assert_eq!(
            config.projects_location().unwrap(),
            "https://stefsoh.dev/projects.json"
        );
    }

    #[test]
    fn test_base_url_keeps_subpath() {
        for base in ["https://host.dev/portfolio", "https://host.dev/portfolio/"] {
            let config = PortfolioConfig::from_lookup(lookup(&[
                (BASE_URL_VAR, base),
                (PROJECTS_PATH_VAR, "/projects.json"),
            ]))
            .unwrap();

            assert_eq!(
                config.projects_location().unwrap(),
                "https://host.dev/portfolio/projects.json"
            );
        }

        let config =
            PortfolioConfig::from_lookup(lookup(&[(BASE_URL_VAR, "https://host.dev/portfolio")]))
                .unwrap();
        assert_eq!(
            config.projects_location().unwrap(),
            "https://host.dev/portfolio/projects.json"
        );
    }

    #[test]
    fn test_leading_slash_stays_under_site_root() {
        let config = PortfolioConfig::from_lookup(lookup(&[
            (SITE_ROOT_VAR, "site"),
            (PROJECTS_PATH_VAR, "/data/projects.json"),
        ]))
        .unwrap();

        let location = PathBuf::from(config.projects_location().unwrap());
        assert!(location.starts_with("site"));
    }

    #[test]
    fn test_empty_values_ignored() {
        let config = PortfolioConfig::from_lookup(lookup(&[(BASE_URL_VAR, "  ")])).unwrap();
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let result = PortfolioConfig::from_lookup(lookup(&[(BASE_URL_VAR, "ftp://host/")]));
        assert!(matches!(result, Err(PortfolioError::Config(_))));

        let result = PortfolioConfig::from_lookup(lookup(&[(BASE_URL_VAR, "not a url")]));
        assert!(matches!(result, Err(PortfolioError::Config(_))));
    }
}
