//! Fluent builder for sparse XML-RPC struct parameters.
//!
//! WordPress methods take "content structs" in which most members are
//! optional and an absent member means "server default". [`Optional`]
//! accumulates only the members a call site actually wants to send, so
//! requests never carry empty or zero-valued fields:
//!
//! ```
//! use wp_core::{Optional, Value};
//!
//! let slug = "";
//! let content = Optional::new()
//!     .set("post_title", "Hello")
//!     .set_if(!slug.is_empty(), "post_name", slug);
//! assert_eq!(content.get("post_title"), Some(&Value::from("Hello")));
//! assert!(content.get("post_name").is_none());
//! ```
//!
//! Values are [`xmlrpc::Value`], the tagged union over the wire types
//! (string, integer, boolean, base64 bytes, struct, ...), so a single bag
//! holds heterogeneous members without giving up type safety.

use std::collections::btree_map;
use std::collections::BTreeMap;

use xmlrpc::Value;

/// An accumulating `member name -> value` mapping for one outgoing call.
///
/// Keys are unique; insertion order is irrelevant (the transport serializes
/// an unordered struct). Created empty, populated by fluent mutation, then
/// converted into a [`Value::Struct`] and consumed by the call. All
/// operations are total; there are no error paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Optional(BTreeMap<String, Value>);

impl Optional {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Unconditionally insert `name`, overwriting any prior value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Insert `name` only when `cond` holds; otherwise a no-op.
    ///
    /// Lets call sites express "include this member only if the caller
    /// supplied a non-default value" inline.
    pub fn set_if(self, cond: bool, name: impl Into<String>, value: impl Into<Value>) -> Self {
        if cond {
            self.set(name, value)
        } else {
            self
        }
    }

    /// Copy all entries from `extra` into the bag, overwriting on collision.
    ///
    /// A `None` or empty `extra` is a no-op, so callers can thread an
    /// `Option<Optional>` through unchanged.
    pub fn merge(mut self, extra: impl Into<Option<Optional>>) -> Self {
        if let Some(extra) = extra.into() {
            self.0.extend(extra.0);
        }
        self
    }

    /// Look up a member by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Number of members currently set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no members are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the bag into the wire struct value.
    pub fn into_value(self) -> Value {
        Value::Struct(self.0)
    }
}

impl From<Optional> for Value {
    fn from(optional: Optional) -> Self {
        optional.into_value()
    }
}

impl IntoIterator for Optional {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for Optional {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
