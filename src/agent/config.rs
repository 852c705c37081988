//! Agent settings with builder pattern and environment variable support.
//!
//! Settings are resolved in order: explicit values → process environment →
//! `.env` file. Variable names are matched case-insensitively, so both
//! `agent_url` and `AGENT_URL` are accepted.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the agent service base URL.
pub const AGENT_URL_VAR: &str = "agent_url";
/// Environment variable holding the agent service API key.
pub const AGENT_API_KEY_VAR: &str = "agent_api_key";
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// Env file consulted when none is given explicitly.
const DEFAULT_ENV_FILE: &str = ".env";

/// Connection settings for the remote agent service.
///
/// Built once at startup and shared read-only for the process lifetime.
#[derive(Clone, PartialEq, Eq)]
pub struct AgentSettings {
    /// Base URL of the agent service, without a trailing slash.
    pub base_url: String,
    /// Value sent in the `X-API-Key` header.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl fmt::Debug for AgentSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentSettings")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl AgentSettings {
    /// Creates a new builder for `AgentSettings`.
    #[must_use]
    pub fn builder() -> AgentSettingsBuilder {
        AgentSettingsBuilder::default()
    }

    /// Loads settings from the process environment and an env file.
    ///
    /// When `env_file` is `None`, `./.env` is read if it exists. An explicit
    /// path that cannot be read is an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if `agent_url` or `agent_api_key` is
    /// absent or empty, [`ConfigError::InvalidUrl`] for a non-http(s) URL, and
    /// [`ConfigError::EnvFile`] if the env file cannot be parsed.
    pub fn load(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(env_file, process_var)
    }

    /// Same as [`AgentSettings::load`] with a pluggable process-environment
    /// lookup.
    pub(crate) fn load_with<F>(env_file: Option<&Path>, process: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file_vars = read_env_file(env_file)?;
        Self::builder()
            .from_lookup(|name| {
                process(name).or_else(|| find_var(file_vars.iter().cloned(), name))
            })
            .build()
    }

    /// Full URL of the chat endpoint.
    #[must_use]
    pub fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url)
    }
}

/// Builder for [`AgentSettings`].
#[derive(Clone, Default)]
pub struct AgentSettingsBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl AgentSettingsBuilder {
    /// Populates unset fields from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.base_url.is_none() {
            self.base_url = lookup(AGENT_URL_VAR);
        }
        if self.api_key.is_none() {
            self.api_key = lookup(AGENT_API_KEY_VAR);
        }
        self
    }

    /// Sets the agent base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Builds the [`AgentSettings`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] for an absent or blank URL or key and
    /// [`ConfigError::InvalidUrl`] if the URL is not http(s).
    pub fn build(self) -> Result<AgentSettings, ConfigError> {
        let base_url =
            non_empty(self.base_url).ok_or(ConfigError::Missing { var: AGENT_URL_VAR })?;
        let api_key = non_empty(self.api_key).ok_or(ConfigError::Missing {
            var: AGENT_API_KEY_VAR,
        })?;

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl { url: base_url });
        }

        Ok(AgentSettings {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        })
    }
}

/// Treats whitespace-only values as absent; other values are kept verbatim.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Looks up a variable in the process environment, ignoring case.
fn process_var(name: &str) -> Option<String> {
    std::env::var(name).ok().or_else(|| {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
        find_var(vars, name)
    })
}

/// Finds `name` in a list of pairs, preferring an exact match over a
/// case-insensitive one.
fn find_var<I>(vars: I, name: &str) -> Option<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut fallback = None;
    for (key, value) in vars {
        if key == name {
            return Some(value);
        }
        if fallback.is_none() && key.eq_ignore_ascii_case(name) {
            fallback = Some(value);
        }
    }
    fallback
}

/// Parses the env file into key/value pairs without touching the process
/// environment.
fn read_env_file(explicit: Option<&Path>) -> Result<Vec<(String, String)>, ConfigError> {
    let (path, required) = explicit.map_or_else(
        || (PathBuf::from(DEFAULT_ENV_FILE), false),
        |p| (p.to_path_buf(), true),
    );

    let iter = match dotenvy::from_path_iter(&path) {
        Ok(iter) => iter,
        Err(dotenvy::Error::Io(e)) if !required && e.kind() == ErrorKind::NotFound => {
            return Ok(Vec::new());
        }
        Err(source) => return Err(ConfigError::EnvFile { path, source }),
    };

    let vars = iter
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| ConfigError::EnvFile {
            path: path.clone(),
            source,
        })?;
    tracing::debug!(path = %path.display(), count = vars.len(), "loaded env file");
    Ok(vars)
}
