//! Canonical contact field names.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the fixed output fields a contact exposes by exact name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    Email,
    FirstName,
    LastName,
    Name,
    Phone,
    Company,
}

impl CanonicalField {
    /// All canonical fields in display order.
    pub const ALL: [CanonicalField; 6] = [
        CanonicalField::Email,
        CanonicalField::FirstName,
        CanonicalField::LastName,
        CanonicalField::Name,
        CanonicalField::Phone,
        CanonicalField::Company,
    ];

    /// Wire name of the field (`email`, `firstName`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalField::Email => "email",
            CanonicalField::FirstName => "firstName",
            CanonicalField::LastName => "lastName",
            CanonicalField::Name => "name",
            CanonicalField::Phone => "phone",
            CanonicalField::Company => "company",
        }
    }

    /// Looks up a field by its exact wire name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_wire_names() {
        for field in CanonicalField::ALL {
            assert_eq!(CanonicalField::parse(field.as_str()), Some(field));
        }
    }

    #[test]
    fn parse_is_exact() {
        assert_eq!(CanonicalField::parse("firstname"), None);
        assert_eq!(CanonicalField::parse("Email"), None);
        assert_eq!(CanonicalField::parse("notes"), None);
    }

    #[test]
    fn display_uses_wire_name() {
        assert_eq!(CanonicalField::LastName.to_string(), "lastName");
    }
}
