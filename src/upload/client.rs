use crate::models::Bundle;
use crate::upload::error::UploadError;
use async_trait::async_trait;
use reqwest::multipart;
use std::path::Path;

pub const GENERIC_APPLICATION_ERROR: &str = "Unknown error";
const PDF_MIME: &str = "application/pdf";

/// Anything that can turn a document on disk into a material bundle.
#[async_trait]
pub trait MaterialSource: Send + Sync {
    async fn fetch(&self, path: &Path) -> Result<Bundle, UploadError>;
}

/// Checks the `.pdf` extension (case-insensitive) and returns the file name
/// to send with the upload.
pub fn validate_pdf(path: &Path) -> Result<String, UploadError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    if name.to_lowercase().ends_with(".pdf") {
        Ok(name)
    } else {
        Err(UploadError::Validation(path.display().to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct HttpMaterialSource {
    client: reqwest::Client,
    upload_url: String,
}

impl HttpMaterialSource {
    pub fn new(upload_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            upload_url: upload_url.into(),
        }
    }
}

#[async_trait]
impl MaterialSource for HttpMaterialSource {
    async fn fetch(&self, path: &Path) -> Result<Bundle, UploadError> {
        let file_name = validate_pdf(path)?;
        let content = tokio::fs::read(path).await?;

        let part = multipart::Part::bytes(content)
            .file_name(file_name)
            .mime_str(PDF_MIME)?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UploadError::Server {
                status_code: response.status().as_u16(),
            });
        }

        let bundle: Bundle = response.json().await?;
        if bundle.is_error() {
            return Err(UploadError::Application(
                bundle
                    .error
                    .unwrap_or_else(|| GENERIC_APPLICATION_ERROR.to_string()),
            ));
        }

        Ok(bundle)
    }
}
