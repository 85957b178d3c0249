use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://tennisapi1.p.rapidapi.com/api";
pub const USER_AGENT: &str = "TennisGateway/1.0";

const API_KEY_VAR: &str = "TENNIS_API_KEY";
const API_HOST_VAR: &str = "TENNIS_API_HOST";
const BASE_URL_VAR: &str = "TENNIS_API_BASE_URL";
const TIMEOUT_VAR: &str = "TENNIS_API_TIMEOUT_SECS";
const CACHE_TTL_VAR: &str = "TENNIS_CACHE_TTL_SECS";

/// Connection details for the upstream tennis data provider
#[derive(Clone)]
pub struct UpstreamSettings {
    pub api_key: String,
    pub api_host: String,
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout: Option<Duration>,
}

// The key is a credential; keep it out of debug output.
impl std::fmt::Debug for UpstreamSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamSettings")
            .field("api_key", &"***")
            .field("api_host", &self.api_host)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl UpstreamSettings {
    pub fn new(
        api_key: impl Into<String>,
        api_host: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_host: api_host.into(),
            base_url: base_url.into(),
            user_agent: USER_AGENT,
            timeout: None,
        }
    }
}

/// Memoization settings for match and tournament stats
#[derive(Debug, Clone, Default)]
pub struct CacheSettings {
    /// `None` keeps entries until the process exits
    pub ttl: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub upstream: UpstreamSettings,
    pub cache: CacheSettings,
}

impl AppConfig {
    pub fn new(upstream: UpstreamSettings) -> Self {
        Self {
            upstream,
            cache: CacheSettings::default(),
        }
    }

    /// Build configuration from `TENNIS_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(&lookup, API_KEY_VAR)?;
        let api_host = required(&lookup, API_HOST_VAR)?;
        let base_url = lookup(BASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut upstream = UpstreamSettings::new(api_key, api_host, base_url);
        upstream.timeout = seconds(&lookup, TIMEOUT_VAR)?;

        Ok(Self {
            upstream,
            cache: CacheSettings {
                ttl: seconds(&lookup, CACHE_TTL_VAR)?,
            },
        })
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Missing required environment variable {}", name))
}

fn seconds<F>(lookup: &F, name: &str) -> Result<Option<Duration>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => {
            let secs: u64 = raw.trim().parse().with_context(|| {
                format!("{} must be a whole number of seconds, got {:?}", name, raw)
            })?;
            Ok(Some(Duration::from_secs(secs)))
        }
    }
}
