use serde_json::json;
use zohocrm::error::AppError;
use zohocrm::model::entity::Entity;
use zohocrm::model::http::{
    Params, api_url, append_query, encode_params, entity_url, form_pairs, params_from_value,
};

fn params(value: serde_json::Value) -> Params {
    params_from_value(Some(value)).unwrap()
}

#[test]
fn api_url_appends_version_prefix() {
    assert_eq!(
        api_url("https://www.zohoapis.eu"),
        "https://www.zohoapis.eu/crm/v2/"
    );
    assert_eq!(
        api_url("https://www.zohoapis.com/"),
        "https://www.zohoapis.com/crm/v2/"
    );
}

#[test]
fn entity_url_with_and_without_object_id() {
    let base = "https://www.zohoapis.eu/crm/v2/";
    assert_eq!(
        entity_url(base, Entity::Leads, Some("123")),
        "https://www.zohoapis.eu/crm/v2/leads/123"
    );
    assert_eq!(
        entity_url(base, Entity::SalesOrders, None),
        "https://www.zohoapis.eu/crm/v2/sales_orders"
    );
    assert_eq!(
        entity_url(base, Entity::Deals, Some("")),
        "https://www.zohoapis.eu/crm/v2/deals"
    );
}

#[test]
fn append_query_uses_question_mark_without_existing_query() {
    let url = append_query(
        "https://www.zohoapis.eu/crm/v2/leads",
        &params(json!({"a": "1", "b": "2"})),
    );
    assert!(url.ends_with("/leads?a=1&b=2"), "{url}");
}

#[test]
fn append_query_uses_ampersand_with_existing_query() {
    let url = append_query(
        "https://www.zohoapis.eu/crm/v2/leads?x=1",
        &params(json!({"a": "1", "b": "2"})),
    );
    assert_eq!(url, "https://www.zohoapis.eu/crm/v2/leads?x=1&a=1&b=2");
}

#[test]
fn append_query_leaves_url_untouched_without_params() {
    let url = append_query("https://www.zohoapis.eu/crm/v2/leads", &Params::new());
    assert_eq!(url, "https://www.zohoapis.eu/crm/v2/leads");
}

#[test]
fn encode_params_preserves_insertion_order() {
    let encoded = encode_params(&params(json!({"per_page": "10", "page": "2", "fields": "Email"})));
    assert_eq!(encoded, "per_page=10&page=2&fields=Email");
}

#[test]
fn encode_params_escapes_reserved_characters() {
    let encoded = encode_params(&params(json!({"criteria": "(Email:equals:a b@x.com)"})));
    assert_eq!(encoded, "criteria=%28Email%3Aequals%3Aa+b%40x.com%29");
}

#[test]
fn non_string_values_are_encoded_as_json_text() {
    let pairs = form_pairs(&params(json!({"page": 2, "approved": true, "tags": ["a"]})));
    assert_eq!(
        pairs,
        vec![
            ("page".to_string(), "2".to_string()),
            ("approved".to_string(), "true".to_string()),
            ("tags".to_string(), "[\"a\"]".to_string()),
        ]
    );
}

#[test]
fn params_from_value_accepts_objects_and_none() {
    assert!(params_from_value(None).unwrap().is_empty());
    let map = params_from_value(Some(json!({"Last_Name": "Doe"}))).unwrap();
    assert_eq!(map.get("Last_Name"), Some(&json!("Doe")));
}

#[test]
fn params_from_value_rejects_non_mappings() {
    let cases = [
        (json!(["a", "b"]), "array"),
        (json!("leads"), "string"),
        (json!(42), "number"),
        (json!(true), "bool"),
        (json!(null), "null"),
    ];
    for (value, kind) in cases {
        match params_from_value(Some(value)) {
            Err(AppError::InvalidData(got)) => assert_eq!(got, kind),
            other => panic!("expected InvalidData, got {other:?}"),
        }
    }
}
