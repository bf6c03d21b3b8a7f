//! Request sending pipeline.
//!
//! [`RequestSender`] ties the pieces together for one request:
//! materialize against the selected environment, record header names,
//! execute, pretty-print the body and, on success, run the template's
//! extraction rules against the selected environment.

use crate::config::get_config;
use crate::environment::EnvironmentSession;
use crate::executor::HttpExecutor;
use crate::formatter::prettify_body;
use crate::headers::HeaderSuggestions;
use crate::materializer::materialize;
use crate::models::request::{FormPart, MaterializedRequest, RequestTemplate};
use crate::models::response::RestResponse;
use std::sync::{Arc, RwLock};

/// What [`RequestSender::send`] produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SendOutcome {
    /// The request as it went out.
    pub request: MaterializedRequest,
    pub response: RestResponse,
    /// Number of variables written by extraction rules.
    pub extracted: usize,
}

pub struct RequestSender<E: HttpExecutor> {
    executor: E,
    session: EnvironmentSession,
    suggestions: Arc<RwLock<HeaderSuggestions>>,
    pretty_print_json: bool,
}

impl<E: HttpExecutor> RequestSender<E> {
    pub fn new(executor: E, session: EnvironmentSession) -> Self {
        Self {
            executor,
            session,
            suggestions: Arc::new(RwLock::new(HeaderSuggestions::new())),
            pretty_print_json: get_config().pretty_print_json,
        }
    }

    /// Overrides the `prettyPrintJson` setting read at construction.
    pub fn with_pretty_print(mut self, enabled: bool) -> Self {
        self.pretty_print_json = enabled;
        self
    }

    /// Shares an existing suggestion store instead of a private one.
    pub fn with_suggestions(mut self, suggestions: Arc<RwLock<HeaderSuggestions>>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn session(&self) -> &EnvironmentSession {
        &self.session
    }

    pub fn suggestions(&self) -> Arc<RwLock<HeaderSuggestions>> {
        Arc::clone(&self.suggestions)
    }

    /// Sends `template` through the executor.
    ///
    /// `multipart` replaces the body for `multipart/form-data` requests.
    pub async fn send(
        &self,
        template: &RequestTemplate,
        multipart: Option<&[FormPart]>,
    ) -> SendOutcome {
        let environment = self.session.active_snapshot();
        let materialized = materialize(template, environment.as_ref());

        if let Ok(mut suggestions) = self.suggestions.write() {
            suggestions.record_all(&materialized.observed_header_names);
        }

        let request = materialized.request;
        let mut response = self.executor.execute(&request, multipart).await;

        if self.pretty_print_json {
            response.body = prettify_body(&response.body);
        }

        let extracted = if response.is_success() && !template.extract_rules.is_empty() {
            match self
                .session
                .apply_extraction(&response.body, &template.extract_rules)
            {
                Ok(count) => count,
                Err(e) => {
                    log::warn!("variable extraction skipped: {}", e);
                    0
                }
            }
        } else {
            0
        };

        SendOutcome {
            request,
            response,
            extracted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{Environment, Environments};
    use crate::models::request::ExtractRule;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replies with a fixed response and remembers what it was asked.
    struct CannedExecutor {
        response: RestResponse,
        seen: Mutex<Vec<(MaterializedRequest, usize)>>,
    }

    impl CannedExecutor {
        fn new(status: u16, body: &str) -> Self {
            Self {
                response: RestResponse::new(status, body),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpExecutor for CannedExecutor {
        async fn execute(
            &self,
            request: &MaterializedRequest,
            multipart: Option<&[FormPart]>,
        ) -> RestResponse {
            self.seen
                .lock()
                .unwrap()
                .push((request.clone(), multipart.map_or(0, |p| p.len())));
            self.response.clone()
        }
    }

    fn session() -> EnvironmentSession {
        let mut envs = Environments::new();
        let mut dev = Environment::new("dev");
        dev.set("host", "a.com");
        envs.add(dev);
        let session = EnvironmentSession::new(envs);
        session.select("dev").unwrap();
        session
    }

    fn login_template() -> RequestTemplate {
        let mut template = RequestTemplate::new("POST", "https://{{host}}/login");
        template.add_header("X-Client", "tests");
        template.extract_rules.push(ExtractRule::new("token", "data.token"));
        template
    }

    #[tokio::test]
    async fn test_send_materializes_and_extracts() {
        let sender = RequestSender::new(
            CannedExecutor::new(200, r#"{"data":{"token":"abc"}}"#),
            session(),
        );

        let outcome = sender.send(&login_template(), None).await;

        assert_eq!(outcome.request.url, "https://a.com/login");
        assert_eq!(outcome.extracted, 1);
        assert_eq!(sender.session().get_variable("token").as_deref(), Some("abc"));
        assert!(sender
            .suggestions()
            .read()
            .unwrap()
            .custom()
            .any(|n| n == "X-Client"));
    }

    #[tokio::test]
    async fn test_failure_status_skips_extraction() {
        let sender = RequestSender::new(
            CannedExecutor::new(401, r#"{"data":{"token":"abc"}}"#),
            session(),
        );

        let outcome = sender.send(&login_template(), None).await;
        assert_eq!(outcome.extracted, 0);
        assert!(sender.session().get_variable("token").is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_passes_through() {
        let executor = CannedExecutor {
            response: RestResponse::transport_failure("connection refused", 3),
            seen: Mutex::new(Vec::new()),
        };
        let sender = RequestSender::new(executor, session());

        let outcome = sender.send(&login_template(), None).await;
        assert_eq!(outcome.response.status_code, 0);
        assert_eq!(outcome.response.body, "Error: connection refused");
    }

    #[tokio::test]
    async fn test_json_body_is_pretty_printed() {
        let sender = RequestSender::new(CannedExecutor::new(200, r#"{"a":1}"#), session())
            .with_pretty_print(true);
        let outcome = sender
            .send(&RequestTemplate::new("GET", "http://h"), None)
            .await;
        assert!(outcome.response.body.contains('\n'));
        assert_eq!(outcome.response.raw_body, br#"{"a":1}"#.to_vec());

        let sender = RequestSender::new(CannedExecutor::new(200, r#"{"a":1}"#), session())
            .with_pretty_print(false);
        let outcome = sender
            .send(&RequestTemplate::new("GET", "http://h"), None)
            .await;
        assert_eq!(outcome.response.body, r#"{"a":1}"#);
    }

    #[tokio::test]
    async fn test_without_selection_placeholders_remain() {
        let sender = RequestSender::new(
            CannedExecutor::new(200, r#"{"data":{"token":"abc"}}"#),
            EnvironmentSession::default(),
        );

        let outcome = sender.send(&login_template(), None).await;
        assert_eq!(outcome.request.url, "https://{{host}}/login");
        assert_eq!(outcome.extracted, 0);
    }

    #[tokio::test]
    async fn test_multipart_forwarded() {
        let executor = Arc::new(CannedExecutor::new(200, "ok"));
        let sender = RequestSender::new(Arc::clone(&executor), session());

        let parts = [FormPart::Text {
            name: "a".to_string(),
            value: "b".to_string(),
        }];
        sender
            .send(&RequestTemplate::new("POST", "http://h"), Some(&parts))
            .await;

        assert_eq!(executor.seen.lock().unwrap()[0].1, 1);
    }
}
