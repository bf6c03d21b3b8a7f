//! HTTP request execution.
//!
//! The engine only knows the [`HttpExecutor`] trait: hand it a materialized
//! request, get a [`RestResponse`] back. Transport failures never surface as
//! errors; they come back as a response with status `0` and the failure
//! message in the body.
//!
//! The reqwest-backed executor lives behind the `native` feature.

pub mod config;
pub mod error;

#[cfg(feature = "native")]
pub mod native;

pub use config::ExecutionConfig;
pub use error::RequestError;

#[cfg(feature = "native")]
pub use native::ReqwestExecutor;

use crate::models::request::{FormPart, MaterializedRequest};
use crate::models::response::RestResponse;
use async_trait::async_trait;
use std::sync::Arc;

/// Sends materialized requests.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    /// Executes `request`. When `multipart` is given, the parts replace the
    /// request body.
    async fn execute(
        &self,
        request: &MaterializedRequest,
        multipart: Option<&[FormPart]>,
    ) -> RestResponse;
}

#[async_trait]
impl<E: HttpExecutor + ?Sized> HttpExecutor for Arc<E> {
    async fn execute(
        &self,
        request: &MaterializedRequest,
        multipart: Option<&[FormPart]>,
    ) -> RestResponse {
        (**self).execute(request, multipart).await
    }
}

/// Whether a method sends its body. `GET`, `HEAD` and `DELETE` never do.
pub fn method_allows_body(method: &str) -> bool {
    !matches!(
        method.trim().to_ascii_uppercase().as_str(),
        "GET" | "HEAD" | "DELETE"
    )
}
