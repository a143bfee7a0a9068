//! The term record returned by `wp.getTerm` / `wp.getTerms`.

use xmlrpc::Value;

use crate::error::DecodeError;

use super::{as_struct, int_member, str_member, FromValue};

/// One term within a taxonomy (a single category, tag, etc.).
///
/// WordPress serializes the id-like members as strings; only `count` comes
/// over the wire as an integer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Term {
    /// Term id.
    pub term_id: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Term group id.
    pub term_group: String,
    /// Id of the term/taxonomy pairing.
    pub term_taxonomy_id: String,
    /// Owning taxonomy's machine name.
    pub taxonomy: String,
    /// Free-form description.
    pub description: String,
    /// Parent term id; `"0"` for top-level terms.
    pub parent: String,
    /// Number of objects tagged with this term.
    pub count: i64,
}

impl FromValue for Term {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let members = as_struct(value)?;
        Ok(Self {
            term_id: str_member(members, "term_id")?,
            name: str_member(members, "name")?,
            slug: str_member(members, "slug")?,
            term_group: str_member(members, "term_group")?,
            term_taxonomy_id: str_member(members, "term_taxonomy_id")?,
            taxonomy: str_member(members, "taxonomy")?,
            description: str_member(members, "description")?,
            parent: str_member(members, "parent")?,
            count: int_member(members, "count")?,
        })
    }
}
