//! Multipart form encoding
//!
//! Image-bearing writes (collections, partners, teammates) travel as
//! multipart form-data. Encoding rule: every defined field becomes a form
//! field; array-valued fields are appended with indexed keys
//! ("long_desc[0]", "long_desc[1]") so the server can reconstruct order.

use crate::error::{ClientError, ClientResult};
use reqwest::multipart::{Form, Part};

/// An image file picked by the operator for upload.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// MIME type guessed from the file name.
    pub fn content_type(&self) -> String {
        mime_guess::from_path(&self.file_name)
            .first_or_octet_stream()
            .to_string()
    }

    pub(crate) fn into_part(self) -> ClientResult<Part> {
        let mime = self.content_type();
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&mime)
            .map_err(|e| ClientError::Config(format!("invalid image MIME type: {e}")))
    }
}

/// Builder for the API's multipart payloads.
#[derive(Debug)]
pub(crate) struct FormBuilder {
    form: Form,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self { form: Form::new() }
    }

    /// Append a text field.
    pub fn text(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.form = self.form.text(key, value.into());
        self
    }

    /// Append a field only when the value is defined.
    pub fn opt_text(self, key: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.text(key, v),
            None => self,
        }
    }

    /// Append a numeric (or other displayable) field.
    pub fn display(self, key: &'static str, value: impl ToString) -> Self {
        self.text(key, value.to_string())
    }

    /// Append a displayable field only when defined.
    pub fn opt_display(self, key: &'static str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.display(key, v),
            None => self,
        }
    }

    /// Append an array field with indexed keys, preserving order.
    pub fn indexed(mut self, key: &str, items: &[String]) -> Self {
        for (i, item) in items.iter().enumerate() {
            self.form = self.form.text(format!("{key}[{i}]"), item.clone());
        }
        self
    }

    /// Append an image file part.
    pub fn image(mut self, key: &'static str, file: ImageFile) -> ClientResult<Self> {
        self.form = self.form.part(key, file.into_part()?);
        Ok(self)
    }

    /// Append an image file part only when defined.
    pub fn opt_image(self, key: &'static str, file: Option<ImageFile>) -> ClientResult<Self> {
        match file {
            Some(f) => self.image(key, f),
            None => Ok(self),
        }
    }

    pub fn build(self) -> Form {
        self.form
    }
}
