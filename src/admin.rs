// src/admin.rs

// ccmadmin web session: one form login, then cookie-authenticated page fetches.

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::config::{Config, consts::{APP_NAV, LOGIN_PATH, PARAM_EDIT_PATH}};
use crate::core::net::{build_client, send_text};
use crate::error::Result;

pub struct AdminSession {
    client: Client,
    login_url: String,
    param_edit_url: String,
    username: String,
    password: String,
}

impl AdminSession {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: build_client(config, true)?,
            login_url: config.admin_url(LOGIN_PATH),
            param_edit_url: config.admin_url(PARAM_EDIT_PATH),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    // The login form fields; the page endpoint takes the same body.
    fn form(&self) -> [(&str, &str); 3] {
        [
            ("appNav", APP_NAV),
            ("j_username", self.username.as_str()),
            ("j_password", self.password.as_str()),
        ]
    }

    /// Submit the login form. The session cookie stays in the client's store.
    /// A bad password is not detected here: the next page comes back as the login form.
    pub fn login(&self) -> Result<()> {
        let request = self.client.post(&self.login_url).form(&self.form());
        send_text(request, &self.login_url)?;
        info!(user = %self.username, "submitted ccmadmin login");
        Ok(())
    }

    /// `serviceParamEdit.do` for one node and service index (`-1` lists the services).
    pub fn service_param_page(&self, node_uuid: &str, service: &str) -> Result<String> {
        let url = format!("{}?server={node_uuid}&service={service}", self.param_edit_url);
        debug!(%url, "fetching service parameter page");
        let request = self
            .client
            .post(&self.param_edit_url)
            .query(&[("server", node_uuid), ("service", service)])
            .form(&self.form());
        send_text(request, &url)
    }
}
