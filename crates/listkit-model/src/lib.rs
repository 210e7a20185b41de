//! Contact list data model.
//!
//! Shared types produced by the contact file normalizer and consumed by
//! anything that previews or uploads a contact list.
//!
//! - [`CanonicalField`]: the fixed output field names downstream screens rely on
//! - [`Contact`]: one accepted record, canonical fields plus pass-through columns
//! - [`ParseResult`]: the aggregate outcome of normalizing one file

mod contact;
mod field;
mod result;

pub use contact::Contact;
pub use field::CanonicalField;
pub use result::{DEFAULT_PREVIEW_LIMIT, ParseResult};
