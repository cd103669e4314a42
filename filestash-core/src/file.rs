//! In-transit file representation

use bytes::Bytes;

/// A file moving to or from a storage backend.
///
/// Callers build one for `store` and `write`; backends rebuild one from
/// their responses for `fetch`. Values are never mutated after
/// construction; every operation works on fresh instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// File name, without any directory prefix
    pub filename: String,

    /// Raw content, passed through to the backend unchanged
    pub data: Bytes,

    /// MIME type, when the caller or backend knows it
    pub content_type: Option<String>,
}

impl StoredFile {
    /// Create a file with no content type
    pub fn new(filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Content length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_no_content_type() {
        let file = StoredFile::new("notes.txt", "hello");
        assert_eq!(file.filename, "notes.txt");
        assert_eq!(&file.data[..], b"hello");
        assert_eq!(file.content_type, None);
    }

    #[test]
    fn test_with_content_type() {
        let file = StoredFile::new("doc.md", "# Title").with_content_type("text/markdown");
        assert_eq!(file.content_type, Some("text/markdown".to_string()));
        assert_eq!(file.len(), 7);
        assert!(!file.is_empty());
    }
}
