use std::collections::HashMap;

use axum::extract::Multipart;
use bytes::Bytes;

use smartschool_storage::StorageBackend;

use crate::error::ApiError;

/// One stored attachment: the form field it arrived under, the client's
/// filename, and the reference URL the backend resolved for it.
#[derive(Debug)]
pub struct UploadedFile {
    pub field: String,
    pub filename: String,
    pub url: String,
}

/// A fully-resolved multipart form: plain fields plus stored attachments.
#[derive(Debug, Default)]
pub struct UploadForm {
    fields: HashMap<String, String>,
    files: Vec<UploadedFile>,
}

impl UploadForm {
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    /// First attachment under the given field name, if any.
    pub fn file_url(&self, name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.field == name)
            .map(|f| f.url.as_str())
    }

    /// Required single attachment; absence is a validation failure.
    pub fn require_file_url(&self, name: &str) -> Result<&str, ApiError> {
        self.file_url(name)
            .ok_or_else(|| ApiError::Validation(format!("missing required file field '{name}'")))
    }

    pub fn files_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a UploadedFile> {
        self.files.iter().filter(move |f| f.field == name)
    }
}

/// Drains a multipart request into an [`UploadForm`].
///
/// Every part is buffered before the first backend call, and callers persist
/// nothing until the whole form has resolved, so one failed store fails the
/// entire batch with zero records written.
pub async fn collect(
    mut multipart: Multipart,
    storage: &dyn StorageBackend,
) -> Result<UploadForm, ApiError> {
    let mut fields = HashMap::new();
    let mut pending: Vec<(String, String, Bytes)> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(str::to_string) {
            Some(filename) => {
                let data = field.bytes().await?;
                pending.push((name, filename, data));
            }
            None => {
                let value = field.text().await?;
                fields.insert(name, value);
            }
        }
    }

    let mut files = Vec::with_capacity(pending.len());
    for (field, filename, data) in pending {
        let url = storage.store(&field, &filename, data).await?;
        files.push(UploadedFile {
            field,
            filename,
            url,
        });
    }

    Ok(UploadForm { fields, files })
}
