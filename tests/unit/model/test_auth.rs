use chrono::{Duration, Utc};
use zohocrm::error::AppError;
use zohocrm::model::auth::{AccessToken, TokenResponse};

fn token_response(json: &str) -> TokenResponse {
    serde_json::from_str(json).unwrap()
}

#[test]
fn token_response_yields_access_token() {
    let response = token_response(
        r#"{"access_token":"T2","api_domain":"https://www.zohoapis.eu","token_type":"Bearer","expires_in":3600}"#,
    );
    let token = response.into_access_token().unwrap();
    assert_eq!(token.token, "T2");
    assert_eq!(token.expires_in, Some(3600));
    assert!(!token.is_expired(60));
}

#[test]
fn token_response_error_is_reported() {
    let response = token_response(r#"{"error":"invalid_code"}"#);
    match response.into_access_token() {
        Err(AppError::Auth(reason)) => assert_eq!(reason, "invalid_code"),
        other => panic!("expected Auth error, got {other:?}"),
    }
}

#[test]
fn token_response_without_token_is_rejected() {
    for json in [r#"{}"#, r#"{"access_token":""}"#] {
        match token_response(json).into_access_token() {
            Err(AppError::Auth(reason)) => assert!(reason.contains("access_token")),
            other => panic!("expected Auth error, got {other:?}"),
        }
    }
}

#[test]
fn caller_supplied_token_never_expires() {
    let token = AccessToken::new("T1");
    assert_eq!(token.expires_at(), None);
    assert!(!token.is_expired(3600));
}

#[test]
fn token_expiry_honours_margin() {
    let token = AccessToken {
        token: "T".to_string(),
        expires_in: Some(120),
        created_at: Utc::now(),
    };
    assert!(!token.is_expired(60));
    assert!(token.is_expired(180));

    let expires_at = token.expires_at().unwrap();
    assert_eq!(expires_at, token.created_at + Duration::seconds(120));
}

#[test]
fn old_token_is_expired() {
    let token = AccessToken {
        token: "T".to_string(),
        expires_in: Some(3600),
        created_at: Utc::now() - Duration::hours(2),
    };
    assert!(token.is_expired(0));
}

#[test]
fn unrepresentable_lifetime_is_not_expired() {
    let token = AccessToken {
        token: "T".to_string(),
        expires_in: Some(10_000_000_000_000_000),
        created_at: Utc::now(),
    };
    assert_eq!(token.expires_at(), None);
    assert!(!token.is_expired(60));

    let token = AccessToken {
        token: "T".to_string(),
        expires_in: Some(u64::MAX),
        created_at: Utc::now(),
    };
    assert_eq!(token.expires_at(), None);
    assert!(!token.is_expired(0));
}

#[test]
fn unrepresentable_margin_is_expired() {
    let token = AccessToken {
        token: "T".to_string(),
        expires_in: Some(3600),
        created_at: Utc::now(),
    };
    assert!(token.is_expired(u64::MAX / 2));
    assert!(token.is_expired(u64::MAX));
}
