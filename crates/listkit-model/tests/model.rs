//! Serialization tests for the contact list model.

use indexmap::IndexMap;
use listkit_model::{Contact, ParseResult};
use serde_json::json;

#[test]
fn contact_serializes_flat_camel_case() {
    let mut extra = IndexMap::new();
    extra.insert("city".to_string(), "Oslo".to_string());
    let contact = Contact {
        email: Some("jane@x.com".to_string()),
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        name: Some("Jane Doe".to_string()),
        extra,
        ..Contact::default()
    };

    let value = serde_json::to_value(&contact).unwrap();
    assert_eq!(
        value,
        json!({
            "email": "jane@x.com",
            "firstName": "Jane",
            "lastName": "Doe",
            "name": "Jane Doe",
            "city": "Oslo"
        })
    );
}

#[test]
fn contact_deserializes_unknown_keys_into_extra() {
    let contact: Contact = serde_json::from_value(json!({
        "email": "a@b.co",
        "phone": "555-0100",
        "tier": "gold"
    }))
    .unwrap();

    assert_eq!(contact.email.as_deref(), Some("a@b.co"));
    assert_eq!(contact.phone.as_deref(), Some("555-0100"));
    assert_eq!(contact.extra.get("tier").map(String::as_str), Some("gold"));
    assert_eq!(contact.extra.len(), 1);
}

#[test]
fn parse_result_uses_wire_names() {
    let result = ParseResult::failure("Unsupported file format. Please upload CSV, XLS, or XLSX files.");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        json!({
            "data": [],
            "errors": ["Unsupported file format. Please upload CSV, XLS, or XLSX files."],
            "totalRows": 0,
            "validRows": 0,
            "headers": []
        })
    );
}
