//! Header normalization onto canonical contact fields.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use listkit_model::CanonicalField;

/// Known header synonyms, keyed by lowercased, single-spaced text.
///
/// Canonical names that only differ by case (`email`, `name`, `phone`,
/// `company`) need no entry: lowercasing already yields the wire name.
static HEADER_ALIASES: LazyLock<HashMap<&'static str, CanonicalField>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Email
    map.insert("email address", CanonicalField::Email);
    map.insert("email_address", CanonicalField::Email);
    map.insert("e-mail", CanonicalField::Email);
    map.insert("mail", CanonicalField::Email);

    // First name
    map.insert("first name", CanonicalField::FirstName);
    map.insert("first_name", CanonicalField::FirstName);
    map.insert("firstname", CanonicalField::FirstName);
    map.insert("fname", CanonicalField::FirstName);

    // Last name
    map.insert("last name", CanonicalField::LastName);
    map.insert("last_name", CanonicalField::LastName);
    map.insert("lastname", CanonicalField::LastName);
    map.insert("lname", CanonicalField::LastName);
    map.insert("surname", CanonicalField::LastName);

    // Full name
    map.insert("full name", CanonicalField::Name);
    map.insert("full_name", CanonicalField::Name);
    map.insert("fullname", CanonicalField::Name);

    // Phone
    map.insert("phone number", CanonicalField::Phone);
    map.insert("phone_number", CanonicalField::Phone);
    map.insert("mobile", CanonicalField::Phone);
    map.insert("cell", CanonicalField::Phone);
    map.insert("telephone", CanonicalField::Phone);

    // Company
    map.insert("company name", CanonicalField::Company);
    map.insert("company_name", CanonicalField::Company);
    map.insert("organization", CanonicalField::Company);
    map.insert("org", CanonicalField::Company);

    map
});

/// Looks up the canonical field a raw header is a synonym for.
pub fn canonical_alias(header: &str) -> Option<CanonicalField> {
    let key = header
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    HEADER_ALIASES.get(key.as_str()).copied()
}

/// Normalizes one header: the canonical name for a known synonym, otherwise
/// the lowercased, trimmed text.
pub fn normalize_header(raw: &str) -> String {
    match canonical_alias(raw) {
        Some(field) => field.as_str().to_string(),
        None => raw.trim().to_lowercase(),
    }
}

/// Normalizes a header row, position for position.
///
/// Duplicates are kept so that cell `i` still belongs to header `i`.
pub fn normalize_headers<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .map(|header| normalize_header(header.as_ref()))
        .collect()
}

/// Removes repeated headers, keeping the first occurrence of each.
pub fn unique_headers(headers: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    headers
        .iter()
        .filter(|header| seen.insert(header.as_str()))
        .cloned()
        .collect()
}

/// The alias table as `(synonym, canonical)` pairs, grouped by canonical field.
pub fn header_aliases() -> Vec<(&'static str, CanonicalField)> {
    let mut aliases: Vec<_> = HEADER_ALIASES
        .iter()
        .map(|(alias, field)| (*alias, *field))
        .collect();
    aliases.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    aliases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_synonyms_any_case() {
        assert_eq!(normalize_header("E-Mail"), "email");
        assert_eq!(normalize_header("First_Name"), "firstName");
        assert_eq!(normalize_header("Mobile"), "phone");
        assert_eq!(normalize_header("  SURNAME "), "lastName");
        assert_eq!(normalize_header("Organization"), "company");
    }

    #[test]
    fn test_internal_whitespace_variants() {
        assert_eq!(normalize_header("First   Name"), "firstName");
        assert_eq!(normalize_header("email\taddress"), "email");
        assert_eq!(normalize_header(" Full  Name "), "name");
    }

    #[test]
    fn test_unknown_header_passes_through() {
        assert_eq!(normalize_header("  Favourite Color "), "favourite color");
        assert_eq!(normalize_header("Email"), "email");
        assert_eq!(normalize_header("Contact"), "contact");
    }

    #[test]
    fn test_normalize_headers_keeps_positions() {
        let headers = normalize_headers(&["Email", "E-mail", "  ", "Notes"]);
        assert_eq!(headers, vec!["email", "email", "", "notes"]);
    }

    #[test]
    fn test_unique_headers_first_seen_order() {
        let headers = normalize_headers(&["Mail", "Name", "Email", "Full Name", "City"]);
        assert_eq!(unique_headers(&headers), vec!["email", "name", "city"]);
    }

    #[test]
    fn test_header_aliases_grouped() {
        let aliases = header_aliases();
        assert_eq!(aliases.len(), 25);
        assert_eq!(aliases[0].1, CanonicalField::Email);
        assert_eq!(aliases.last().map(|a| a.1), Some(CanonicalField::Company));
    }
}
