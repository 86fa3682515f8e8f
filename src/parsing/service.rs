//! Parsing service coordinating source resolution and the MinerU upload.

use crate::{
    config::Config,
    parsing::{
        client::MineruClient, options::ParseOptions, source::SourceResolver, types::ParseError,
    },
};
use reqwest::Client;

const USER_AGENT: &str = concat!("mineru-mcp/", env!("CARGO_PKG_VERSION"));

/// Runs one `parse_document` invocation end to end.
///
/// Holds no per-request state; construct it once near process start and share it through an
/// `Arc`. Invocations are independent and may interleave freely on the runtime.
pub struct ParsingService {
    resolver: SourceResolver,
    client: MineruClient,
}

impl ParsingService {
    /// Build the service from the process configuration.
    pub fn new(config: &Config) -> Result<Self, ParseError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        tracing::debug!(
            endpoint = %config.mineru_url,
            temp_dir = %config.temp_dir.display(),
            "Initialized MinerU HTTP client"
        );
        Ok(Self::from_parts(
            SourceResolver::new(http.clone(), config.temp_dir.clone()),
            MineruClient::new(http, config.mineru_url.clone(), ParseOptions::default()),
        ))
    }

    /// Assemble a service from preconfigured components.
    pub fn from_parts(resolver: SourceResolver, client: MineruClient) -> Self {
        Self { resolver, client }
    }

    /// Resolve `file_source`, upload it to MinerU, and return the Markdown.
    ///
    /// Downloaded sources are deleted before this returns, whether or not the upload
    /// succeeded.
    pub async fn parse_document(&self, file_source: &str) -> Result<String, ParseError> {
        let result = self.run(file_source).await;
        match &result {
            Ok(markdown) => tracing::info!(
                source = file_source,
                chars = markdown.len(),
                "Successfully parsed document"
            ),
            Err(err) => tracing::error!(
                source = file_source,
                kind = ?err.kind(),
                error = %err,
                "Failed to parse document"
            ),
        }
        result
    }

    async fn run(&self, file_source: &str) -> Result<String, ParseError> {
        let resolved = self.resolver.resolve(file_source).await?;
        tracing::info!(path = %resolved.path().display(), "Parsing document");
        self.client.submit(resolved.path()).await
    }
}
