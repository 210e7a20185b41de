//! Contact records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::field::CanonicalField;

/// One accepted contact.
///
/// Canonical fields are typed; every other source column is carried through
/// in `extra`, keyed by its normalized header, in source column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, String>,
}

impl Contact {
    /// Builds a contact from a field-name to value record.
    ///
    /// Keys equal to a canonical wire name fill the typed fields; all other
    /// keys land in `extra` in record order.
    pub fn from_record(record: IndexMap<String, String>) -> Self {
        let mut contact = Self::default();
        for (key, value) in record {
            match CanonicalField::parse(&key) {
                Some(field) => *contact.slot_mut(field) = Some(value),
                None => {
                    contact.extra.insert(key, value);
                }
            }
        }
        contact
    }

    /// Returns the value of a canonical field.
    pub fn field(&self, field: CanonicalField) -> Option<&str> {
        let slot = match field {
            CanonicalField::Email => &self.email,
            CanonicalField::FirstName => &self.first_name,
            CanonicalField::LastName => &self.last_name,
            CanonicalField::Name => &self.name,
            CanonicalField::Phone => &self.phone,
            CanonicalField::Company => &self.company,
        };
        slot.as_deref()
    }

    fn slot_mut(&mut self, field: CanonicalField) -> &mut Option<String> {
        match field {
            CanonicalField::Email => &mut self.email,
            CanonicalField::FirstName => &mut self.first_name,
            CanonicalField::LastName => &mut self.last_name,
            CanonicalField::Name => &mut self.name,
            CanonicalField::Phone => &mut self.phone,
            CanonicalField::Company => &mut self.company,
        }
    }

    /// Looks up a value by field name, canonical or pass-through.
    pub fn get(&self, key: &str) -> Option<&str> {
        match CanonicalField::parse(key) {
            Some(field) => self.field(field),
            None => self.extra.get(key).map(String::as_str),
        }
    }

    /// Iterates over every present field: canonical fields first, then extras.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        CanonicalField::ALL
            .into_iter()
            .filter_map(|field| self.field(field).map(|value| (field.as_str(), value)))
            .chain(
                self.extra
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            )
    }

    /// Makes `name`, `firstName` and `lastName` consistent.
    ///
    /// A missing `name` is joined from the present name parts. A lone `name`
    /// is split at its first whitespace run: the first token becomes
    /// `firstName`, the remaining tokens (single-spaced) become `lastName`.
    pub fn reconcile_names(&mut self) {
        let has_first = non_empty(self.first_name.as_deref());
        let has_last = non_empty(self.last_name.as_deref());

        if !non_empty(self.name.as_deref()) && (has_first || has_last) {
            let joined = [self.first_name.as_deref(), self.last_name.as_deref()]
                .into_iter()
                .flatten()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            self.name = Some(joined);
            return;
        }

        if has_first || has_last {
            return;
        }
        let Some(name) = self.name.as_deref() else {
            return;
        };
        let mut tokens = name.split_whitespace();
        let Some(first) = tokens.next() else {
            return;
        };
        let first = first.to_string();
        let rest = tokens.collect::<Vec<_>>().join(" ");
        self.first_name = Some(first);
        if !rest.is_empty() {
            self.last_name = Some(rest);
        }
    }

    /// Fills `{FirstName}`, `{LastName}` and `{Email}` placeholders.
    ///
    /// Missing values render as the empty string.
    pub fn personalize(&self, template: &str) -> String {
        template
            .replace("{FirstName}", self.first_name.as_deref().unwrap_or(""))
            .replace("{LastName}", self.last_name.as_deref().unwrap_or(""))
            .replace("{Email}", self.email.as_deref().unwrap_or(""))
    }
}

fn non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
