//! HTTP client for the MinerU `file_parse` endpoint.

use crate::parsing::{
    options::{FILE_FIELD, ParseOptions},
    types::ParseError,
};
use reqwest::{Client, StatusCode, Url, multipart};
use serde_json::Value;
use std::path::Path;

const OCTET_STREAM: &str = "application/octet-stream";
const UPLOAD_FALLBACK_NAME: &str = "upload";

/// Uploads local documents to MinerU and extracts the Markdown it returns.
#[derive(Clone)]
pub struct MineruClient {
    client: Client,
    endpoint: Url,
    options: ParseOptions,
}

impl MineruClient {
    /// Create a client posting to `endpoint` with the given processing options.
    pub fn new(client: Client, endpoint: Url, options: ParseOptions) -> Self {
        Self {
            client,
            endpoint,
            options,
        }
    }

    /// Upload `path` and return the Markdown produced by MinerU.
    pub async fn submit(&self, path: &Path) -> Result<String, ParseError> {
        let form = self.build_form(path).await?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = error_body(status, response.text().await);
            return Err(ParseError::UpstreamStatus { status, body });
        }

        let body = response.text().await?;
        extract_markdown(body)
    }

    async fn build_form(&self, path: &Path) -> Result<multipart::Form, ParseError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|err| ParseError::io(path, err))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| UPLOAD_FALLBACK_NAME.to_string());

        tracing::debug!(
            file = %file_name,
            bytes = bytes.len(),
            endpoint = %self.endpoint,
            "Uploading document to MinerU"
        );

        let file_part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(OCTET_STREAM)?;

        let form = self
            .options
            .text_fields()
            .into_iter()
            .fold(multipart::Form::new().part(FILE_FIELD, file_part), |form, (name, value)| {
                form.text(name, value)
            });
        Ok(form)
    }
}

/// Body text for a non-200 reply; a failed read is logged and described in its place.
fn error_body(status: StatusCode, body: reqwest::Result<String>) -> String {
    match body {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(%status, error = %err, "Failed to read MinerU error body");
            format!("<failed to read response body: {err}>")
        }
    }
}

/// Interpret a 200 response body from MinerU.
pub fn extract_markdown(body: String) -> Result<String, ParseError> {
    let response: Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(err) => {
            return Err(ParseError::InvalidJson {
                error: err.to_string(),
                body,
            });
        }
    };

    if let Some(Value::String(markdown)) = response.get("md_content") {
        return Ok(markdown.clone());
    }
    Err(ParseError::MissingContent { response })
}
