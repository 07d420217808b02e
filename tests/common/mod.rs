// tests/common/mod.rs
//
// Canned CUCM responses and a mock node built on httpmock.
//
#![allow(dead_code)]

use httpmock::prelude::*;
use httpmock::Mock;

use cucm_params::config::{Config, Scheme};

pub const NODE_UUID: &str = "abc-123";
pub const SESSION_COOKIE: &str = "JSESSIONID=5F2A9C";

pub const VERSION_RESPONSE: &str = r#"<?xml version='1.0' encoding='UTF-8'?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>
    <ns:getCCMVersionResponse xmlns:ns="http://www.cisco.com/AXL/API/1.0">
      <return><componentVersion><version>14.0.1.12900-1</version></componentVersion></return>
    </ns:getCCMVersionResponse>
  </soapenv:Body>
</soapenv:Envelope>"#;

pub const NODE_RESPONSE: &str = r#"<?xml version='1.0' encoding='UTF-8'?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>
    <ns:listProcessNodeResponse xmlns:ns="http://www.cisco.com/AXL/API/14.0" sequence="11">
      <return>
        <processNode uuid="{ABC-123}"><name>127.0.0.1</name><nodeUsage>Publisher</nodeUsage></processNode>
      </return>
    </ns:listProcessNodeResponse>
  </soapenv:Body>
</soapenv:Envelope>"#;

pub const EMPTY_NODE_RESPONSE: &str = r#"<?xml version='1.0' encoding='UTF-8'?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>
    <ns:listProcessNodeResponse xmlns:ns="http://www.cisco.com/AXL/API/14.0"><return/></ns:listProcessNodeResponse>
  </soapenv:Body>
</soapenv:Envelope>"#;

pub const LOGIN_PAGE: &str = r#"<html><body>
  <form action="j_security_check" method="post">
    <input type="text" name="j_username"><input type="password" name="j_password">
  </form>
</body></html>"#;

pub const SERVICE_LIST_PAGE: &str = r#"<html><body>
  <form name="serviceParamForm">
    <select name="server" id="SERVER"><option value="abc-123">127.0.0.1</option></select>
    <select name="service" id="SERVICE">
      <option value="-1">--- Select a Service ---</option>
      <option value="5">Cisco TFTP</option>
      <option value="3">Cisco CallManager</option>
    </select>
  </form>
</body></html>"#;

pub fn param_row(stripe: u8, label: &str, control: &str) -> String {
    format!(
        r#"<tr class="content-form-stripe-{stripe}">
             <td class="content-form-label"><label><a href="javascript:help()">{label}</a></label></td>
             <td class="content-form-value">{control}</td>
           </tr>"#
    )
}

pub fn param_page(rows: &[String]) -> String {
    format!(
        r#"<html><body><table class="content-form">
             <tr class="content-form-header"><td colspan="2">Parameters</td></tr>
             {}
           </table></body></html>"#,
        rows.concat()
    )
}

/// Enterprise Wide: one settable parameter, one display-only.
pub fn enterprise_wide_page() -> String {
    param_page(&[
        param_row(1, "Cluster ID", r#"<input type="text" id="ClusterID" value="StandAloneCluster">"#),
        param_row(2, "Cluster Security Mode", r#"<input type="hidden" name="sec" value="0">0"#),
    ])
}

/// Cisco TFTP: only display-only rows.
pub fn tftp_page() -> String {
    param_page(&[param_row(1, "Version", r#"<input type="hidden" name="v" value="1">1"#)])
}

/// Cisco CallManager: two settable parameters.
pub fn callmanager_page() -> String {
    param_page(&[
        param_row(1, " Call Park Display Timer ", r#"<input type="text" id="CallParkDisplayTimer" value="10">"#),
        param_row(2, "Digit Analysis Complexity", r#"<select id="DigitAnalysisComplexity"><option>StandardAnalysis</option></select>"#),
    ])
}

pub fn config_for(server: &MockServer, out_dir: &std::path::Path) -> Config {
    Config {
        hostname: "127.0.0.1".into(),
        username: "admin".into(),
        password: "s3cret".into(),
        scheme: Scheme::Http,
        axl_port: server.port(),
        admin_port: Some(server.port()),
        out_dir: out_dir.to_path_buf(),
        ..Config::default()
    }
}

pub fn mock_version<'a>(server: &'a MockServer, status: u16, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/axl/")
            .header_exists("authorization")
            .body_includes("getCCMVersion");
        then.status(status)
            .header("content-type", "text/xml")
            .body(body);
    })
}

pub fn mock_node<'a>(server: &'a MockServer, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/axl/")
            .header("soapaction", r#""CUCM:DB ver=14.0 listProcessNode""#)
            .body_includes("<name>127.0.0.1</name>");
        then.status(200)
            .header("content-type", "text/xml")
            .body(body);
    })
}

pub fn mock_login(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/ccmadmin/j_security_check")
            .body_includes("appNav=ccmadmin")
            .body_includes("j_username=admin")
            .body_includes("j_password=s3cret");
        then.status(200)
            .header("set-cookie", &format!("{SESSION_COOKIE}; Path=/"))
            .body("<html>redirecting</html>");
    })
}

pub fn mock_service_page<'a>(server: &'a MockServer, service: &str, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/ccmadmin/serviceParamEdit.do")
            .query_param("server", NODE_UUID)
            .query_param("service", service);
        then.status(200)
            .header("content-type", "text/html")
            .body(body);
    })
}

/// Mount a healthy node: version, node lookup, login, selector and the three service pages.
pub fn mount_healthy_node(server: &MockServer) {
    mock_version(server, 200, VERSION_RESPONSE);
    mock_node(server, NODE_RESPONSE);
    mock_login(server);
    mock_service_page(server, "-1", SERVICE_LIST_PAGE);
    mock_service_page(server, "11", &enterprise_wide_page());
    mock_service_page(server, "5", &tftp_page());
    mock_service_page(server, "3", &callmanager_page());
}
