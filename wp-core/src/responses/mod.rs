//! Typed response records and their decoding from XML-RPC values.
//!
//! One record type exists per remote method that returns a struct:
//! [`Taxonomy`], [`Term`], and [`UploadedFile`]. Methods returning scalars
//! decode straight into `String` (created term/post ids) or `bool` (edit
//! success), and array-valued methods into `Vec<T>`.
//!
//! Decoding follows the conventions of WordPress's own responses: a member
//! that is absent decodes to the field's zero value, while a member that is
//! present with the wrong wire type is a shape mismatch and fails the call.

mod media;
mod taxonomy;
mod term;

pub use media::UploadedFile;
pub use taxonomy::Taxonomy;
pub use term::Term;

use std::collections::BTreeMap;

use xmlrpc::Value;

use crate::error::DecodeError;

/// Conversion from a response [`Value`] tree into a typed record.
///
/// Implementations borrow the value; the transport's reply is decoded once
/// and then discarded.
pub trait FromValue: Sized {
    /// Decode `value` into `Self`.
    fn from_value(value: &Value) -> Result<Self, DecodeError>;
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| DecodeError::Unexpected {
                expected: "string",
                got: type_name(value),
            })
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        value.as_bool().ok_or_else(|| DecodeError::Unexpected {
            expected: "boolean",
            got: type_name(value),
        })
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let items = value.as_array().ok_or_else(|| DecodeError::Unexpected {
            expected: "array",
            got: type_name(value),
        })?;
        items.iter().map(T::from_value).collect()
    }
}

/// View a response value as a struct, or fail with the actual wire type.
pub(crate) fn as_struct(value: &Value) -> Result<&BTreeMap<String, Value>, DecodeError> {
    value.as_struct().ok_or_else(|| DecodeError::Unexpected {
        expected: "struct",
        got: type_name(value),
    })
}

/// A string member; absent decodes to the empty string.
pub(crate) fn str_member(
    members: &BTreeMap<String, Value>,
    member: &'static str,
) -> Result<String, DecodeError> {
    match members.get(member) {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(DecodeError::Member {
            member,
            expected: "string",
            got: type_name(other),
        }),
    }
}

/// A boolean member; absent decodes to `false`.
pub(crate) fn bool_member(
    members: &BTreeMap<String, Value>,
    member: &'static str,
) -> Result<bool, DecodeError> {
    match members.get(member) {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(DecodeError::Member {
            member,
            expected: "boolean",
            got: type_name(other),
        }),
    }
}

/// An integer member; absent decodes to `0`. Accepts both wire widths.
pub(crate) fn int_member(
    members: &BTreeMap<String, Value>,
    member: &'static str,
) -> Result<i64, DecodeError> {
    match members.get(member) {
        None => Ok(0),
        Some(Value::Int(n)) => Ok(i64::from(*n)),
        Some(Value::Int64(n)) => Ok(*n),
        Some(other) => Err(DecodeError::Member {
            member,
            expected: "integer",
            got: type_name(other),
        }),
    }
}

/// A string-to-string struct member; absent decodes to an empty map.
pub(crate) fn string_map_member(
    members: &BTreeMap<String, Value>,
    member: &'static str,
) -> Result<BTreeMap<String, String>, DecodeError> {
    let inner = match members.get(member) {
        None => return Ok(BTreeMap::new()),
        Some(Value::Struct(inner)) => inner,
        Some(other) => {
            return Err(DecodeError::Member {
                member,
                expected: "struct",
                got: type_name(other),
            })
        }
    };
    inner
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key.clone(), s.clone())),
            other => Err(DecodeError::Member {
                member,
                expected: "string-to-string struct",
                got: type_name(other),
            }),
        })
        .collect()
}

/// Human-readable name of a value's wire type, for error messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Int(_) | Value::Int64(_) => "integer",
        Value::Bool(_) => "boolean",
        Value::String(_) => "string",
        Value::Double(_) => "double",
        Value::DateTime(_) => "datetime",
        Value::Base64(_) => "base64",
        Value::Struct(_) => "struct",
        Value::Array(_) => "array",
        Value::Nil => "nil",
    }
}
