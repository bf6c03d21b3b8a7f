//! reqwest-backed executor.

use super::config::ExecutionConfig;
use super::error::RequestError;
use super::{method_allows_body, HttpExecutor};
use crate::models::request::{FormPart, MaterializedRequest};
use crate::models::response::RestResponse;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::redirect::Policy;
use std::time::Instant;

const MAX_REDIRECTS: usize = 10;

/// Executes requests with a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: reqwest::Client,
    config: ExecutionConfig,
}

impl ReqwestExecutor {
    pub fn new(config: ExecutionConfig) -> Result<Self, RequestError> {
        let redirect = if config.follow_redirects {
            Policy::limited(MAX_REDIRECTS)
        } else {
            Policy::none()
        };

        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .connect_timeout(config.connect_timeout_duration())
            .redirect(redirect)
            .danger_accept_invalid_certs(!config.validate_ssl)
            .build()?;

        Ok(Self { client, config })
    }

    /// Builds an executor from the global configuration.
    pub fn from_global_config() -> Result<Self, RequestError> {
        Self::new(ExecutionConfig::from_global_config())
    }

    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    async fn try_execute(
        &self,
        request: &MaterializedRequest,
        multipart: Option<&[FormPart]>,
    ) -> Result<(u16, Vec<(String, String)>, Vec<u8>), RequestError> {
        let url = url::Url::parse(&self.config.normalize_url(&request.url))?;
        let method = reqwest::Method::from_bytes(request.method.trim().to_ascii_uppercase().as_bytes())
            .map_err(|e| RequestError::Build(e.to_string()))?;

        let multipart = multipart.filter(|parts| !parts.is_empty());
        let mut builder = self.client.request(method, url);

        for header in request.headers.iter().filter(|h| !h.has_blank_name()) {
            // The multipart form supplies its own boundary-bearing type.
            if multipart.is_some() && header.name.eq_ignore_ascii_case("Content-Type") {
                continue;
            }
            builder = builder.header(header.name.as_str(), header.value.as_str());
        }

        match multipart {
            Some(parts) => {
                builder = builder.multipart(build_form(parts).await?);
            }
            None => {
                if request.header("Content-Type").is_none() {
                    if let Some(content_type) = &self.config.default_content_type {
                        builder = builder.header("Content-Type", content_type.as_str());
                    }
                }
                if let Some(body) = request.body.as_ref().filter(|b| !b.trim().is_empty()) {
                    if method_allows_body(&request.method) {
                        builder = builder.body(body.clone());
                    }
                }
            }
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok((status, headers, body))
    }
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    async fn execute(
        &self,
        request: &MaterializedRequest,
        multipart: Option<&[FormPart]>,
    ) -> RestResponse {
        let start = Instant::now();
        let result = self.try_execute(request, multipart).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok((status_code, headers, raw_body)) => {
                let mut response = RestResponse {
                    status_code,
                    body: String::from_utf8_lossy(&raw_body).into_owned(),
                    raw_body,
                    headers: Vec::new(),
                    duration_ms,
                };
                for (name, value) in headers {
                    response.add_header(name, value);
                }
                log::debug!(
                    "{} {} -> {} in {}ms",
                    request.method,
                    request.url,
                    status_code,
                    duration_ms
                );
                response
            }
            Err(e) => {
                log::warn!("{} {} failed: {}", request.method, request.url, e);
                RestResponse::transport_failure(e, duration_ms)
            }
        }
    }
}

async fn build_form(parts: &[FormPart]) -> Result<Form, RequestError> {
    let mut form = Form::new();

    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name.clone(), value.clone()),
            FormPart::File { name, path } => {
                let bytes = tokio::fs::read(path).await?;
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| name.clone());
                form.part(name.clone(), Part::bytes(bytes).file_name(file_name))
            }
        };
    }

    Ok(form)
}
