// src/axl.rs

// AXL (SOAP) transport: the two fixed envelopes and a Basic-auth POST.

use quick_xml::escape::escape;
use reqwest::{blocking::Client, header::CONTENT_TYPE};
use tracing::debug;

use crate::config::{Config, consts::{AXL_BASE_NAMESPACE, AXL_VERSIONED_NAMESPACE}};
use crate::core::net::{build_client, send_text};
use crate::error::Result;

pub struct AxlClient {
    client: Client,
    url: String,
    username: String,
    password: String,
}

impl AxlClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: build_client(config, false)?,
            url: config.axl_url(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// POST one envelope. `action` goes into the `SOAPAction` header when given.
    pub fn call(&self, envelope: String, action: Option<&str>) -> Result<String> {
        let mut request = self
            .client
            .post(&self.url)
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, "text/xml")
            .body(envelope);
        if let Some(action) = action {
            request = request.header("SOAPAction", action);
        }
        debug!(url = %self.url, action = action.unwrap_or("-"), "AXL request");
        send_text(request, &self.url)
    }
}

pub fn get_ccm_version_envelope() -> String {
    format!(
        r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:ns="{AXL_BASE_NAMESPACE}">
   <soapenv:Header/>
   <soapenv:Body>
      <ns:getCCMVersion/>
   </soapenv:Body>
</soapenv:Envelope>"#
    )
}

/// `SOAPAction` value for `listProcessNode` at `version`, quotes included.
pub fn list_process_node_action(version: &str) -> String {
    format!(r#""CUCM:DB ver={version} listProcessNode""#)
}

pub fn list_process_node_envelope(version: &str, node_name: &str) -> String {
    let name = escape(node_name);
    format!(
        r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:ns="{AXL_VERSIONED_NAMESPACE}{version}">
   <soapenv:Header/>
   <soapenv:Body>
      <ns:listProcessNode sequence="11">
         <searchCriteria>
            <name>{name}</name>
         </searchCriteria>
         <returnedTags>
            <name></name>
            <description></description>
            <mac></mac>
            <ipv6Name></ipv6Name>
            <nodeUsage></nodeUsage>
            <lbmHubGroup></lbmHubGroup>
            <processNodeRole></processNodeRole>
         </returnedTags>
      </ns:listProcessNode>
   </soapenv:Body>
</soapenv:Envelope>"#
    )
}
