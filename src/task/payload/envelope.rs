//! Multipart-style transport envelope.

use serde::{Deserialize, Serialize};

/// File attached to a task submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Original file name.
    pub file_name: String,
    /// MIME type, if known.
    pub content_type: Option<String>,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Creates an attachment with no declared content type.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    /// Sets the MIME type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Returns the size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for an empty file.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Value of a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FormValue {
    /// Plain text part.
    Text(String),
    /// File part.
    File(Attachment),
}

/// Named form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Field name.
    pub name: String,
    /// Field value.
    pub value: FormValue,
}

/// Ordered list of form fields. Names may repeat (one `files` entry per
/// attachment).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPayload {
    fields: Vec<FormField>,
}

impl FormPayload {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text field.
    pub fn append_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(FormField {
            name: name.into(),
            value: FormValue::Text(value.into()),
        });
    }

    /// Appends a file field.
    pub fn append_file(&mut self, name: impl Into<String>, attachment: Attachment) {
        self.fields.push(FormField {
            name: name.into(),
            value: FormValue::File(attachment),
        });
    }

    /// Returns the first value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    /// Returns the first value for `name` when it is a text part.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(FormValue::Text(value)) => Some(value),
            _ => None,
        }
    }

    /// Returns every file attached under `name`, in insertion order.
    pub fn files<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Attachment> + 'a {
        self.fields
            .iter()
            .filter(move |field| field.name == name)
            .filter_map(|field| match &field.value {
                FormValue::File(attachment) => Some(attachment),
                FormValue::Text(_) => None,
            })
    }

    /// Returns `true` when at least one field is named `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }

    /// Returns field names in insertion order, repeats included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    /// Returns the fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when no field was appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
