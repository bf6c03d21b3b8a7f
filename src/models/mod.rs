//! Data models for request templates, resolved requests and responses.
//!
//! This module contains the core data structures shared by the curl
//! converter, the materializer, the executor boundary and the extractor.

pub mod request;
pub mod response;

pub use request::{BodyType, ExtractRule, FormPart, MaterializedRequest, Param, RequestTemplate};
pub use response::{looks_like_json, RestResponse};
