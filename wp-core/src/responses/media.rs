//! The record returned by `wp.uploadFile`.

use xmlrpc::Value;

use crate::error::DecodeError;

use super::{as_struct, str_member, FromValue};

/// A file accepted into the media library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadedFile {
    /// Attachment id.
    pub id: String,
    /// Server-side file name, possibly de-duplicated by WordPress.
    pub file: String,
    /// Public URL of the stored file.
    pub url: String,
    /// MIME type (wire member `type`).
    pub mime_type: String,
}

impl FromValue for UploadedFile {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let members = as_struct(value)?;
        Ok(Self {
            id: str_member(members, "id")?,
            file: str_member(members, "file")?,
            url: str_member(members, "url")?,
            mime_type: str_member(members, "type")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn test_decodes_full_record() {
        let mut members = BTreeMap::new();
        members.insert("id".to_string(), Value::from("58"));
        members.insert("file".to_string(), Value::from("photo.png"));
        members.insert(
            "url".to_string(),
            Value::from("https://blog.example.org/wp-content/uploads/photo.png"),
        );
        members.insert("type".to_string(), Value::from("image/png"));

        let uploaded = UploadedFile::from_value(&Value::Struct(members)).unwrap();
        assert_eq!(uploaded.id, "58");
        assert_eq!(uploaded.file, "photo.png");
        assert_eq!(uploaded.mime_type, "image/png");
    }

    #[test]
    fn test_absent_members_default() {
        let uploaded = UploadedFile::from_value(&Value::Struct(BTreeMap::new())).unwrap();
        assert_eq!(uploaded, UploadedFile::default());
    }
}
