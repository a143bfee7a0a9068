//! The taxonomy record returned by `wp.getTaxonomy` / `wp.getTaxonomies`.

use std::collections::BTreeMap;

use xmlrpc::Value;

use crate::error::DecodeError;

use super::{as_struct, bool_member, str_member, string_map_member, FromValue};

/// A content-classification scheme (category, tag, or custom taxonomy).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    /// Machine name, e.g. `category`.
    pub name: String,
    /// Display label.
    pub label: String,
    /// Whether terms nest under parent terms.
    pub hierarchical: bool,
    /// Whether the taxonomy is publicly queryable.
    pub public: bool,
    /// Whether WordPress shows admin UI for it.
    pub show_ui: bool,
    /// Whether the taxonomy ships with WordPress (wire member `_builtin`).
    pub builtin: bool,
    /// UI label strings keyed by slot name.
    pub labels: BTreeMap<String, String>,
    /// Capability names keyed by operation.
    pub cap: BTreeMap<String, String>,
}

impl FromValue for Taxonomy {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let members = as_struct(value)?;
        Ok(Self {
            name: str_member(members, "name")?,
            label: str_member(members, "label")?,
            hierarchical: bool_member(members, "hierarchical")?,
            public: bool_member(members, "public")?,
            show_ui: bool_member(members, "show_ui")?,
            builtin: bool_member(members, "_builtin")?,
            labels: string_map_member(members, "labels")?,
            cap: string_map_member(members, "cap")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn category_value() -> Value {
        let mut labels = BTreeMap::new();
        labels.insert("singular_name".to_string(), Value::from("Category"));
        let mut cap = BTreeMap::new();
        cap.insert("assign_terms".to_string(), Value::from("edit_posts"));

        let mut members = BTreeMap::new();
        members.insert("name".to_string(), Value::from("category"));
        members.insert("label".to_string(), Value::from("Categories"));
        members.insert("hierarchical".to_string(), Value::Bool(true));
        members.insert("public".to_string(), Value::Bool(true));
        members.insert("show_ui".to_string(), Value::Bool(true));
        members.insert("_builtin".to_string(), Value::Bool(true));
        members.insert("labels".to_string(), Value::Struct(labels));
        members.insert("cap".to_string(), Value::Struct(cap));
        Value::Struct(members)
    }

    #[test]
    fn test_decodes_full_record() {
        let taxonomy = Taxonomy::from_value(&category_value()).unwrap();
        assert_eq!(taxonomy.name, "category");
        assert_eq!(taxonomy.label, "Categories");
        assert!(taxonomy.hierarchical);
        assert!(taxonomy.builtin);
        assert_eq!(
            taxonomy.labels.get("singular_name").map(String::as_str),
            Some("Category")
        );
        assert_eq!(
            taxonomy.cap.get("assign_terms").map(String::as_str),
            Some("edit_posts")
        );
    }

    #[test]
    fn test_absent_members_default() {
        let mut members = BTreeMap::new();
        members.insert("name".to_string(), Value::from("post_tag"));
        let taxonomy = Taxonomy::from_value(&Value::Struct(members)).unwrap();
        assert_eq!(taxonomy.name, "post_tag");
        assert_eq!(taxonomy.label, "");
        assert!(!taxonomy.hierarchical);
        assert!(taxonomy.labels.is_empty());
    }

    #[test]
    fn test_mistyped_member_is_a_shape_mismatch() {
        let mut members = BTreeMap::new();
        members.insert("hierarchical".to_string(), Value::from("yes"));
        let err = Taxonomy::from_value(&Value::Struct(members)).unwrap_err();
        assert_matches!(
            err,
            DecodeError::Member {
                member: "hierarchical",
                expected: "boolean",
                got: "string"
            }
        );
    }

    #[test]
    fn test_non_struct_response_is_rejected() {
        let err = Taxonomy::from_value(&Value::from("category")).unwrap_err();
        assert_matches!(err, DecodeError::Unexpected { expected: "struct", .. });
    }
}
