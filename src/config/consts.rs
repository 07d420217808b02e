// src/config/consts.rs

// AXL
pub const AXL_PORT: u16 = 8443;
pub const AXL_PATH: &str = "/axl/";
pub const AXL_BASE_NAMESPACE: &str = "http://www.cisco.com/AXL/API/1.0";
pub const AXL_VERSIONED_NAMESPACE: &str = "http://www.cisco.com/AXL/API/";

// ccmadmin
pub const LOGIN_PATH: &str = "/ccmadmin/j_security_check";
pub const PARAM_EDIT_PATH: &str = "/ccmadmin/serviceParamEdit.do";
pub const APP_NAV: &str = "ccmadmin";
pub const SERVICE_SELECT_ID: &str = "SERVICE";
pub const NO_SERVICE: &str = "-1";

// Every settable parameter row carries one of the `content-form-stripe-*` classes
pub const PARAM_ROW_CLASS: &str = "content-form-stripe-";

// Enterprise Wide is not listed in the selector; its index is fixed
pub const GLOBAL_SERVICE_INDEX: &str = "11";
pub const GLOBAL_SERVICE_NAME: &str = "Enterprise Wide";

// Environment
pub const ENV_HOSTNAME: &str = "CUCM_HOSTNAME";
pub const ENV_ADMIN_USER: &str = "CUCM_ADMIN_USER";
pub const ENV_ADMIN_PASSWORD: &str = "CUCM_ADMIN_PASSWORD";
pub const DEFAULT_ENV_FILE: &str = ".env";

// Net
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

// Export
pub const JSON_FILE: &str = "output.json";
pub const MARKDOWN_FILE: &str = "output.md";
pub const SERVICE_COL_WIDTH: usize = 60;
pub const ID_COL_WIDTH: usize = 50;
pub const LABEL_COL_WIDTH: usize = 81;
