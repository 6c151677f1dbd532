// SPDX-FileCopyrightText: 2026 Medtriage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Multipart form encoding for profile updates and file uploads.

use std::fmt;
use std::path::Path;

use medtriage_core::TriageError;
use medtriage_core::types::{DoctorProfileUpdate, HealthProfileUpdate};
use reqwest::multipart::{Form, Part};
use tracing::debug;

/// A binary file attached to a multipart request.
#[derive(Clone)]
pub struct FilePart {
    file_name: String,
    mime: String,
    bytes: Vec<u8>,
}

impl FilePart {
    /// Wraps in-memory bytes, guessing the MIME type from `file_name`.
    ///
    /// Empty content is rejected; the backend cannot analyze it.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, TriageError> {
        let file_name = file_name.into();
        if file_name.trim().is_empty() {
            return Err(TriageError::InvalidInput("file name must not be empty".into()));
        }
        if bytes.is_empty() {
            return Err(TriageError::InvalidInput(format!("`{file_name}` is empty")));
        }

        let mime = mime_guess::from_path(&file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(Self {
            file_name,
            mime,
            bytes,
        })
    }

    /// Reads a file from disk.
    pub async fn from_path(path: &Path) -> Result<Self, TriageError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                TriageError::InvalidInput(format!("`{}` has no usable file name", path.display()))
            })?
            .to_string();

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            TriageError::InvalidInput(format!("cannot read `{}`: {e}", path.display()))
        })?;

        let part = Self::from_bytes(file_name, bytes)?;
        debug!(file = %part.file_name, mime = %part.mime, size = part.len(), "file attached");
        Ok(part)
    }

    /// Overrides the guessed MIME type.
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = mime.into();
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn into_part(self) -> Result<Part, TriageError> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime)
            .map_err(|e| TriageError::InvalidInput(format!("invalid MIME type `{}`: {e}", self.mime)))
    }
}

// Contents stay out of logs.
impl fmt::Debug for FilePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilePart")
            .field("file_name", &self.file_name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Text fields of a partial update. Unset fields produce no part at all.
pub trait FormFields {
    fn form_fields(&self) -> Vec<(&'static str, String)>;
}

impl FormFields for HealthProfileUpdate {
    fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        push(&mut fields, "age", self.age);
        push(&mut fields, "gender", self.gender.as_deref());
        push(&mut fields, "height", self.height);
        push(&mut fields, "weight", self.weight);
        push(&mut fields, "blood_group", self.blood_group.as_deref());
        push(
            &mut fields,
            "existing_conditions",
            self.existing_conditions.as_deref(),
        );
        fields
    }
}

impl FormFields for DoctorProfileUpdate {
    fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        push(&mut fields, "specialization", self.specialization.as_deref());
        push(&mut fields, "age", self.age);
        push(&mut fields, "gender", self.gender.as_deref());
        push(&mut fields, "experience_years", self.experience_years);
        push(&mut fields, "hospital", self.hospital.as_deref());
        fields
    }
}

fn push<T: ToString>(fields: &mut Vec<(&'static str, String)>, name: &'static str, value: Option<T>) {
    if let Some(value) = value {
        fields.push((name, value.to_string()));
    }
}

/// Builds a form from text fields followed by file parts.
pub(crate) fn build_form(
    fields: impl IntoIterator<Item = (&'static str, String)>,
    files: impl IntoIterator<Item = (&'static str, FilePart)>,
) -> Result<Form, TriageError> {
    let mut form = Form::new();
    for (name, value) in fields {
        form = form.text(name, value);
    }
    for (name, file) in files {
        form = form.part(name, file.into_part()?);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn mime_is_guessed_from_extension() {
        let pdf = FilePart::from_bytes("scan.pdf", vec![1, 2, 3]).unwrap();
        assert_eq!(pdf.mime(), "application/pdf");

        let png = FilePart::from_bytes("xray.PNG", vec![1]).unwrap();
        assert_eq!(png.mime(), "image/png");

        let unknown = FilePart::from_bytes("notes.zzz", vec![1]).unwrap();
        assert_eq!(unknown.mime(), "application/octet-stream");
    }

    #[test]
    fn empty_content_is_rejected() {
        let err = FilePart::from_bytes("scan.pdf", Vec::new()).unwrap_err();
        assert!(matches!(err, TriageError::InvalidInput(_)));
    }

    #[test]
    fn debug_omits_bytes() {
        let part = FilePart::from_bytes("a.txt", b"secret lab values".to_vec()).unwrap();
        let debug = format!("{part:?}");
        assert!(debug.contains("a.txt"));
        assert!(!debug.contains("secret"));
    }

    #[tokio::test]
    async fn from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.jpg");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"\xff\xd8\xff")
            .unwrap();

        let part = FilePart::from_path(&path).await.unwrap();
        assert_eq!(part.file_name(), "report.jpg");
        assert_eq!(part.mime(), "image/jpeg");
        assert_eq!(part.len(), 3);
    }

    #[tokio::test]
    async fn from_path_rejects_missing_and_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.pdf");
        assert!(FilePart::from_path(&missing).await.is_err());

        let empty = dir.path().join("empty.pdf");
        std::fs::File::create(&empty).unwrap();
        let err = FilePart::from_path(&empty).await.unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn health_update_omits_unset_fields() {
        let update = HealthProfileUpdate {
            weight: Some(72.5),
            blood_group: Some("O+".into()),
            ..Default::default()
        };
        assert_eq!(
            update.form_fields(),
            vec![("weight", "72.5".to_string()), ("blood_group", "O+".to_string())]
        );
        assert!(HealthProfileUpdate::default().form_fields().is_empty());
    }

    #[test]
    fn doctor_update_omits_unset_fields() {
        let update = DoctorProfileUpdate {
            hospital: Some("City General".into()),
            experience_years: Some(12),
            ..Default::default()
        };
        assert_eq!(
            update.form_fields(),
            vec![
                ("experience_years", "12".to_string()),
                ("hospital", "City General".to_string())
            ]
        );
    }

    #[test]
    fn invalid_mime_override_fails_at_encoding() {
        let part = FilePart::from_bytes("a.pdf", vec![1])
            .unwrap()
            .with_mime("not a mime");
        assert!(build_form(Vec::new(), vec![("file", part)]).is_err());
    }
}
