//! Server configuration: defaults, overridden by environment
//! variables, overridden by command line options (see the server
//! binary).

use std::path::PathBuf;

use anyhow::{Result, anyhow};

use crate::util::getenv;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on, e.g. `127.0.0.1:3000`.
    pub listen_addr: String,
    /// Directory holding the page templates (`base.html` etc.).
    pub template_dir: PathBuf,
    /// Directory served by the static mount.
    pub static_dir: PathBuf,
    /// URL path prefix of the static mount.
    pub static_prefix: String,
    /// `max-age` of static responses, in seconds.
    pub cache_timeout: u64,
    /// Where to write `http_access.log` and `http_error.log`; stderr
    /// if not given.
    pub log_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            listen_addr: "127.0.0.1:3000".into(),
            template_dir: "templates".into(),
            static_dir: "css".into(),
            static_prefix: "/css".into(),
            cache_timeout: 0,
            log_dir: None,
        }
    }
}

impl ServerConfig {
    /// Defaults, overridden by the `UI_*` environment variables that
    /// are set.
    pub fn from_env() -> Result<ServerConfig> {
        ServerConfig::from_lookup(getenv)
    }

    /// Like `from_env`, getting variables via `lookup`.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Result<Option<String>>
    ) -> Result<ServerConfig> {
        let mut config = ServerConfig::default();
        if let Some(v) = lookup("UI_LISTEN_ADDR")? {
            config.listen_addr = v;
        }
        if let Some(v) = lookup("UI_TEMPLATE_DIR")? {
            config.template_dir = v.into();
        }
        if let Some(v) = lookup("UI_STATIC_DIR")? {
            config.static_dir = v.into();
        }
        if let Some(v) = lookup("UI_STATIC_PREFIX")? {
            config.static_prefix = v;
        }
        if let Some(v) = lookup("UI_CACHE_TIMEOUT")? {
            config.cache_timeout = v.parse().map_err(
                |e| anyhow!("can't parse UI_CACHE_TIMEOUT {v:?}: {e}"))?;
        }
        if let Some(v) = lookup("UI_LOG_DIR")? {
            config.log_dir = Some(v.into());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(
        vars: &[(&'static str, &'static str)]
    ) -> impl Fn(&str) -> Result<Option<String>> {
        let vars: HashMap<&str, &str> = vars.iter().copied().collect();
        move |name: &str| Ok(vars.get(name).map(|v| v.to_string()))
    }

    #[test]
    fn t_defaults() {
        let config = ServerConfig::from_lookup(lookup_in(&[])).expect("no vars");
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.cache_timeout, 0);
        assert_eq!(config.static_prefix, "/css");
    }

    #[test]
    fn t_overrides() {
        let config = ServerConfig::from_lookup(lookup_in(&[
            ("UI_LISTEN_ADDR", "0.0.0.0:8080"),
            ("UI_CACHE_TIMEOUT", "60"),
            ("UI_LOG_DIR", "/tmp/log"),
        ])).expect("valid vars");
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.cache_timeout, 60);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/log")));
        assert_eq!(config.template_dir, PathBuf::from("templates"));
    }

    #[test]
    fn t_invalid_timeout() {
        assert!(ServerConfig::from_lookup(lookup_in(&[("UI_CACHE_TIMEOUT", "soon")]))
                .is_err());
    }
}
