use std::env;
use std::sync::Mutex;
use zohocrm::application::config::Config;
use zohocrm::constants::{DEFAULT_ACCOUNTS_URL, DEFAULT_API_DOMAIN};

// Serializes tests that mutate the process environment
static ENV_LOCK: Mutex<()> = Mutex::new(());

const ZOHO_VARS: [&str; 8] = [
    "ZOHO_ACCESS_TOKEN",
    "ZOHO_REFRESH_TOKEN",
    "ZOHO_CLIENT_ID",
    "ZOHO_CLIENT_SECRET",
    "ZOHO_API_DOMAIN",
    "ZOHO_ACCOUNTS_URL",
    "ZOHO_REST_TIMEOUT",
    "ZOHO_FORM_BODY_ON_GET",
];

fn set_env(vars: &[(&str, &str)]) {
    for name in ZOHO_VARS {
        // SAFETY: environment mutation is serialized by ENV_LOCK
        unsafe { env::remove_var(name) };
    }
    for (name, value) in vars {
        // SAFETY: environment mutation is serialized by ENV_LOCK
        unsafe { env::set_var(name, value) };
    }
}

#[test]
fn with_credentials_sets_values_and_defaults() {
    let config = Config::with_credentials("T1", "R1", "CID", "SECRET", "https://www.zohoapis.com");

    assert_eq!(config.credentials.access_token, "T1");
    assert_eq!(config.credentials.refresh_token, "R1");
    assert_eq!(config.credentials.client_id, "CID");
    assert_eq!(config.credentials.client_secret, "SECRET");
    assert_eq!(config.rest_api.api_domain, "https://www.zohoapis.com");
    assert_eq!(config.rest_api.accounts_url, DEFAULT_ACCOUNTS_URL);
    assert_eq!(config.rest_api.timeout, None);
    assert!(config.rest_api.form_body_on_get);
}

#[test]
fn accounts_url_can_be_overridden() {
    let config = Config::with_credentials("T1", "R1", "CID", "SECRET", "https://www.zohoapis.com")
        .accounts_url("https://accounts.zoho.com");
    assert_eq!(config.rest_api.accounts_url, "https://accounts.zoho.com");
}

#[test]
fn config_display_is_json() {
    let config = Config::with_credentials("T1", "R1", "CID", "SECRET", "https://www.zohoapis.eu");
    let displayed = config.to_string();
    let value: serde_json::Value = serde_json::from_str(&displayed).unwrap();
    assert_eq!(value["rest_api"]["api_domain"], "https://www.zohoapis.eu");
}

#[test]
fn config_serialization_roundtrip_keeps_flags() {
    let mut config =
        Config::with_credentials("T1", "R1", "CID", "SECRET", "https://www.zohoapis.eu");
    config.rest_api.form_body_on_get = false;
    config.rest_api.timeout = Some(15);

    let json = serde_json::to_string(&config).unwrap();
    let restored: Config = serde_json::from_str(&json).unwrap();
    assert!(!restored.rest_api.form_body_on_get);
    assert_eq!(restored.rest_api.timeout, Some(15));
}

#[test]
fn config_new_reads_zoho_environment() {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    set_env(&[
        ("ZOHO_ACCESS_TOKEN", "env-access"),
        ("ZOHO_REFRESH_TOKEN", "env-refresh"),
        ("ZOHO_CLIENT_ID", "env-client"),
        ("ZOHO_CLIENT_SECRET", "env-secret"),
        ("ZOHO_API_DOMAIN", "https://www.zohoapis.com"),
        ("ZOHO_ACCOUNTS_URL", "https://accounts.zoho.com"),
        ("ZOHO_REST_TIMEOUT", "45"),
        ("ZOHO_FORM_BODY_ON_GET", "false"),
    ]);

    let config = Config::new();
    set_env(&[]);

    assert_eq!(config.credentials.access_token, "env-access");
    assert_eq!(config.credentials.refresh_token, "env-refresh");
    assert_eq!(config.credentials.client_id, "env-client");
    assert_eq!(config.credentials.client_secret, "env-secret");
    assert_eq!(config.rest_api.api_domain, "https://www.zohoapis.com");
    assert_eq!(config.rest_api.accounts_url, "https://accounts.zoho.com");
    assert_eq!(config.rest_api.timeout, Some(45));
    assert!(!config.rest_api.form_body_on_get);
}

#[test]
fn config_new_falls_back_on_missing_or_invalid_values() {
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    set_env(&[
        ("ZOHO_ACCESS_TOKEN", "env-access"),
        ("ZOHO_REST_TIMEOUT", "soon"),
        ("ZOHO_FORM_BODY_ON_GET", "maybe"),
    ]);

    let config = Config::new();
    set_env(&[]);

    assert_eq!(config.credentials.access_token, "env-access");
    assert_eq!(config.credentials.refresh_token, "");
    assert_eq!(config.rest_api.api_domain, DEFAULT_API_DOMAIN);
    assert_eq!(config.rest_api.accounts_url, DEFAULT_ACCOUNTS_URL);
    assert_eq!(config.rest_api.timeout, None);
    assert!(config.rest_api.form_body_on_get);
}

#[test]
fn config_output_hides_secrets() {
    let config = Config::with_credentials(
        "access-value",
        "refresh-value",
        "CID",
        "secret-value",
        "https://www.zohoapis.eu",
    );

    for rendered in [config.to_string(), format!("{config:?}")] {
        assert!(!rendered.contains("access-value"), "{rendered}");
        assert!(!rendered.contains("refresh-value"), "{rendered}");
        assert!(!rendered.contains("secret-value"), "{rendered}");
        assert!(rendered.contains("CID"), "{rendered}");
    }
}

#[test]
fn credentials_are_still_accepted_on_deserialization() {
    let json = r#"{
        "credentials": {
            "access_token": "T1",
            "refresh_token": "R1",
            "client_id": "CID",
            "client_secret": "SECRET"
        },
        "rest_api": {
            "api_domain": "https://www.zohoapis.eu",
            "accounts_url": "https://accounts.zoho.eu",
            "timeout": null,
            "form_body_on_get": true
        }
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.credentials.access_token, "T1");
    assert_eq!(config.credentials.refresh_token, "R1");
    assert_eq!(config.credentials.client_secret, "SECRET");
}
