// src/config/options.rs
use std::{env, fmt, path::PathBuf, time::Duration};

use super::consts::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self { Scheme::Http => "http", Scheme::Https => "https" }
    }
}

/// Everything a run needs to reach one CUCM node. Built once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub hostname: String,
    pub username: String,
    pub password: String,
    pub scheme: Scheme,
    pub axl_port: u16,
    /// `None` → scheme default port for the ccmadmin pages.
    pub admin_port: Option<u16>,
    pub verify_tls: bool,
    pub timeout: Duration,
    pub out_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hostname: s!(),
            username: s!(),
            password: s!(),
            scheme: Scheme::Https,
            axl_port: AXL_PORT,
            admin_port: None,
            verify_tls: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            out_dir: PathBuf::from("."),
        }
    }
}

// Keep the password out of logs and error reports.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("hostname", &self.hostname)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("scheme", &self.scheme)
            .field("axl_port", &self.axl_port)
            .field("admin_port", &self.admin_port)
            .field("verify_tls", &self.verify_tls)
            .field("timeout", &self.timeout)
            .field("out_dir", &self.out_dir)
            .finish()
    }
}

impl Config {
    /// Read the `CUCM_*` variables. Missing ones stay empty and fail later, at the first request.
    pub fn from_env() -> Self {
        Self {
            hostname: env_or_empty(ENV_HOSTNAME),
            username: env_or_empty(ENV_ADMIN_USER),
            password: env_or_empty(ENV_ADMIN_PASSWORD),
            ..Self::default()
        }
    }

    pub fn axl_url(&self) -> String {
        format!("{}://{}:{}{}", self.scheme.as_str(), self.hostname, self.axl_port, AXL_PATH)
    }

    pub fn admin_url(&self, path: &str) -> String {
        let origin = match self.admin_port {
            Some(port) => format!("{}://{}:{}", self.scheme.as_str(), self.hostname, port),
            None => format!("{}://{}", self.scheme.as_str(), self.hostname),
        };
        join!(origin, path)
    }

    pub fn json_path(&self) -> PathBuf {
        self.out_dir.join(JSON_FILE)
    }

    pub fn markdown_path(&self) -> PathBuf {
        self.out_dir.join(MARKDOWN_FILE)
    }
}

fn env_or_empty(key: &str) -> String {
    env::var(key).unwrap_or_default()
}
