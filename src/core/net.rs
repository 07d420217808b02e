// src/core/net.rs

// Blocking HTTP plumbing shared by the AXL client and the ccmadmin session.

use reqwest::blocking::{Client, RequestBuilder};
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};

const USER_AGENT: &str = concat!("cucm_params/", env!("CARGO_PKG_VERSION"));

/// Build a client for `config`. CUCM ships a self-signed certificate, so
/// verification is off unless `verify_tls` is set.
pub fn build_client(config: &Config, cookie_store: bool) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.timeout)
        .danger_accept_invalid_certs(!config.verify_tls)
        .cookie_store(cookie_store)
        .build()
        .map_err(Error::Client)
}

/// Send `request` and return the body. Any non-2xx final status is an error.
pub fn send_text(request: RequestBuilder, url: &str) -> Result<String> {
    let response = request
        .send()
        .map_err(|source| Error::Transport { url: s!(url), source })?;

    let status = response.status();
    debug!(%url, %status, "response");
    if !status.is_success() {
        return Err(Error::Status { url: s!(url), status });
    }

    response
        .text()
        .map_err(|source| Error::Transport { url: s!(url), source })
}
