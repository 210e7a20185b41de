//! Row-to-contact mapping.

use indexmap::IndexMap;
use listkit_model::{CanonicalField, Contact};

use crate::email::is_valid_email;
use crate::error::RowError;

/// Fields checked, in order, before falling back to scanning every value.
const EMAIL_FIELDS: [&str; 3] = ["email", "email_address", "emailaddress"];

/// Maps one row onto a contact.
///
/// `headers` are the normalized headers and `cells` the row's values, both
/// in source column order. Empty cells are ignored; when two columns share a
/// normalized header the later non-empty value wins.
pub fn map_row(headers: &[String], cells: &[String], row: usize) -> Result<Contact, RowError> {
    let mut record: IndexMap<String, String> = IndexMap::new();
    for (header, cell) in headers.iter().zip(cells) {
        let value = cell.trim();
        if value.is_empty() {
            continue;
        }
        record.insert(header.clone(), value.to_string());
    }

    let email = discover_email(&record)
        .map(str::to_string)
        .ok_or(RowError::NoValidEmail { row })?;
    record.insert(CanonicalField::Email.as_str().to_string(), email);

    let mut contact = Contact::from_record(record);
    contact.reconcile_names();
    Ok(contact)
}

/// Finds the row's email: a well-known email field first, then the first
/// email-shaped value in any column.
fn discover_email(record: &IndexMap<String, String>) -> Option<&str> {
    EMAIL_FIELDS
        .iter()
        .filter_map(|field| record.get(*field))
        .map(String::as_str)
        .find(|value| is_valid_email(value))
        .or_else(|| {
            record
                .values()
                .map(String::as_str)
                .find(|value| is_valid_email(value))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_maps_canonical_fields() {
        let headers = strings(&["email", "firstName", "lastName", "phone"]);
        let cells = strings(&[" jane@x.com ", "Jane", "Doe", ""]);
        let contact = map_row(&headers, &cells, 2).unwrap();

        assert_eq!(contact.email.as_deref(), Some("jane@x.com"));
        assert_eq!(contact.name.as_deref(), Some("Jane Doe"));
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn test_email_field_priority() {
        let headers = strings(&["notes", "email_address", "email"]);
        let cells = strings(&["ping notes@x.com", "alt@x.com", "main@x.com"]);
        let contact = map_row(&headers, &cells, 2).unwrap();
        assert_eq!(contact.email.as_deref(), Some("main@x.com"));
    }

    #[test]
    fn test_invalid_email_field_falls_back_to_alternates() {
        let headers = strings(&["email", "emailaddress"]);
        let cells = strings(&["n/a", "backup@x.com"]);
        let contact = map_row(&headers, &cells, 2).unwrap();
        assert_eq!(contact.email.as_deref(), Some("backup@x.com"));
        assert_eq!(contact.get("emailaddress"), Some("backup@x.com"));
    }

    #[test]
    fn test_fallback_scan_uses_column_order() {
        let headers = strings(&["name", "secondary", "contact"]);
        let cells = strings(&["John Smith", "second@x.com", "first@x.com"]);
        let contact = map_row(&headers, &cells, 2).unwrap();
        assert_eq!(contact.email.as_deref(), Some("second@x.com"));
        assert_eq!(contact.first_name.as_deref(), Some("John"));
        assert_eq!(contact.last_name.as_deref(), Some("Smith"));
    }

    #[test]
    fn test_last_write_wins_for_duplicate_headers() {
        let headers = strings(&["email", "company", "email"]);
        let cells = strings(&["old@x.com", "Acme", "new@x.com"]);
        let contact = map_row(&headers, &cells, 2).unwrap();
        assert_eq!(contact.email.as_deref(), Some("new@x.com"));
    }

    #[test]
    fn test_empty_duplicate_does_not_erase_value() {
        let headers = strings(&["email", "email"]);
        let cells = strings(&["kept@x.com", "  "]);
        let contact = map_row(&headers, &cells, 2).unwrap();
        assert_eq!(contact.email.as_deref(), Some("kept@x.com"));
    }

    #[test]
    fn test_missing_email_is_rejected() {
        let headers = strings(&["name", "email"]);
        let cells = strings(&["Jane Doe", "not-an-email"]);
        let err = map_row(&headers, &cells, 5).unwrap_err();
        assert_eq!(err, RowError::NoValidEmail { row: 5 });
        assert_eq!(err.to_string(), "Row 5: No valid email found");
    }

    #[test]
    fn test_short_row_is_padded_with_nothing() {
        let headers = strings(&["email", "company", "city"]);
        let cells = strings(&["a@b.co"]);
        let contact = map_row(&headers, &cells, 2).unwrap();
        assert_eq!(contact.company, None);
        assert!(contact.extra.is_empty());
    }

    #[test]
    fn test_extra_columns_pass_through() {
        let headers = strings(&["email", "city", "tier"]);
        let cells = strings(&["a@b.co", "Oslo", "gold"]);
        let contact = map_row(&headers, &cells, 2).unwrap();
        let extra: Vec<_> = contact
            .extra
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(extra, vec![("city", "Oslo"), ("tier", "gold")]);
    }
}
