//! Rendering tests for the terminal report.

use listkit_cli::summary::{alias_table, error_lines, preview_table, summary_table};
use listkit_model::{CanonicalField, Contact, ParseResult};

fn contact(email: &str, first: &str) -> Contact {
    let mut contact = Contact {
        email: Some(email.to_string()),
        first_name: Some(first.to_string()),
        ..Contact::default()
    };
    contact.reconcile_names();
    contact
}

#[test]
fn error_lines_truncate_with_remaining_count() {
    let errors: Vec<String> = (2..=6)
        .map(|row| format!("Row {row}: No valid email found"))
        .collect();
    insta::assert_snapshot!(error_lines(&errors, 3).join("\n"), @r"
    Row 2: No valid email found
    Row 3: No valid email found
    Row 4: No valid email found
    ... and 2 more
    ");
}

#[test]
fn error_lines_keep_everything_within_limit() {
    let errors = vec!["Row 2: No valid email found".to_string()];
    assert_eq!(error_lines(&errors, 10), errors);
    assert!(error_lines(&[], 10).is_empty());
}

#[test]
fn preview_table_has_one_row_per_contact() {
    let mut with_extra = contact("bob@x.com", "Bob");
    with_extra.extra.insert("notes".to_string(), "vip".to_string());
    let contacts = vec![contact("jane@x.com", "Jane"), with_extra];

    let table = preview_table(&contacts);
    assert_eq!(table.row_iter().count(), 2);

    let rendered = table.to_string();
    assert!(rendered.contains("jane@x.com"));
    assert!(rendered.contains("notes: vip"));
    assert!(rendered.contains(CanonicalField::FirstName.as_str()));
}

#[test]
fn summary_table_reports_counts_and_headers() {
    let result = ParseResult {
        data: vec![contact("jane@x.com", "Jane")],
        errors: vec!["Row 3: No valid email found".to_string()],
        total_rows: 2,
        valid_rows: 1,
        headers: vec!["email".to_string(), "firstName".to_string()],
    };
    let rendered = summary_table(&result).to_string();
    assert!(rendered.contains("email, firstName"));
    assert!(rendered.contains("Invalid"));
}

#[test]
fn alias_table_lists_each_synonym() {
    let aliases = [
        ("e-mail", CanonicalField::Email),
        ("first name", CanonicalField::FirstName),
    ];
    let table = alias_table(&aliases);
    assert_eq!(table.row_iter().count(), 2);
    assert!(table.to_string().contains("first name"));
}
