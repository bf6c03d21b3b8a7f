//! Request chaining: a login response feeds the next request through the
//! selected environment.

use super::init_test_env;
use async_trait::async_trait;
use rest_client_core::auth::AuthConfig;
use rest_client_core::environment::{
    load_environments, save_environments, Environment, EnvironmentSession, Environments,
    ENV_FILE_NAME,
};
use rest_client_core::executor::HttpExecutor;
use rest_client_core::models::{
    ExtractRule, FormPart, MaterializedRequest, RequestTemplate, RestResponse,
};
use rest_client_core::sender::RequestSender;
use serde_json::json;
use std::sync::Mutex;
use tempfile::TempDir;

/// Answers `/login` with a token and echoes the Authorization header of
/// every other request.
struct FakeApi {
    requests: Mutex<Vec<MaterializedRequest>>,
}

impl FakeApi {
    fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl HttpExecutor for FakeApi {
    async fn execute(
        &self,
        request: &MaterializedRequest,
        _multipart: Option<&[FormPart]>,
    ) -> RestResponse {
        self.requests.lock().unwrap().push(request.clone());

        if request.url.ends_with("/login") {
            let body = json!({"data": {"token": "tok-123", "user": {"id": 42}}});
            RestResponse::new(200, body.to_string())
        } else if request.url.contains("/missing") {
            RestResponse::new(404, r#"{"error": "not found"}"#)
        } else {
            let auth = request.header("Authorization").unwrap_or("");
            RestResponse::new(200, json!({"auth": auth}).to_string())
        }
    }
}

fn dev_environments() -> Environments {
    let mut envs = Environments::new();
    let mut dev = Environment::new("dev");
    dev.set("host", "api.example.com");
    envs.add(dev);
    envs.add(Environment::new("prod"));
    envs.select("dev");
    envs
}

fn login_template() -> RequestTemplate {
    let mut login = RequestTemplate::new("POST", "https://{{host}}/login");
    login.set_body(
        rest_client_core::models::BodyType::RawJson,
        r#"{"user": "ada"}"#,
    );
    login.extract_rules = vec![
        ExtractRule::new("token", "data.token"),
        ExtractRule::new("userId", "data.user.id"),
        ExtractRule::new("unused", "data.nothing"),
    ];
    login
}

fn profile_template() -> RequestTemplate {
    let mut profile = RequestTemplate::new("GET", "https://{{host}}/users/{{userId}}");
    profile.auth = AuthConfig::Bearer {
        token: "{{token}}".to_string(),
    };
    profile
}

#[tokio::test]
async fn test_login_then_profile() {
    init_test_env();

    let session = EnvironmentSession::new(dev_environments());
    let sender = RequestSender::new(FakeApi::new(), session.clone());

    let login = sender.send(&login_template(), None).await;
    assert_eq!(login.response.status_code, 200);
    assert_eq!(login.extracted, 2);
    assert_eq!(session.get_variable("token").as_deref(), Some("tok-123"));
    assert_eq!(session.get_variable("userId").as_deref(), Some("42"));

    let profile = sender.send(&profile_template(), None).await;
    assert_eq!(profile.request.url, "https://api.example.com/users/42");
    assert_eq!(
        profile.request.header("Authorization"),
        Some("Bearer tok-123")
    );
}

#[tokio::test]
async fn test_failed_request_leaves_environment_alone() {
    init_test_env();

    let session = EnvironmentSession::new(dev_environments());
    let sender = RequestSender::new(FakeApi::new(), session.clone());

    let mut template = RequestTemplate::new("GET", "https://{{host}}/missing");
    template.extract_rules = vec![ExtractRule::new("error", "error")];

    let outcome = sender.send(&template, None).await;
    assert_eq!(outcome.response.status_code, 404);
    assert_eq!(outcome.extracted, 0);
    assert!(session.get_variable("error").is_none());
}

#[tokio::test]
async fn test_switching_environment_changes_resolution() {
    init_test_env();

    let session = EnvironmentSession::new(dev_environments());
    let sender = RequestSender::new(FakeApi::new(), session.clone());

    sender.send(&login_template(), None).await;

    session.select("prod").unwrap();
    let profile = sender.send(&profile_template(), None).await;

    assert_eq!(profile.request.url, "https://{{host}}/users/{{userId}}");
    assert_eq!(
        profile.request.header("Authorization"),
        Some("Bearer {{token}}")
    );
}

#[tokio::test]
async fn test_extracted_values_persist_to_file() {
    init_test_env();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(ENV_FILE_NAME);
    save_environments(&path, &dev_environments()).unwrap();

    let session = EnvironmentSession::new(load_environments(&path).unwrap());
    let sender = RequestSender::new(FakeApi::new(), session.clone());
    sender.send(&login_template(), None).await;

    save_environments(&path, &session.snapshot()).unwrap();

    let reloaded = load_environments(&path).unwrap();
    let dev = reloaded.active().unwrap();
    assert_eq!(dev.name, "dev");
    assert_eq!(dev.get("token").map(String::as_str), Some("tok-123"));
}

#[tokio::test]
async fn test_observed_headers_become_suggestions() {
    init_test_env();

    let sender = RequestSender::new(FakeApi::new(), EnvironmentSession::new(dev_environments()));

    let mut template = RequestTemplate::new("GET", "https://{{host}}/ping");
    template.add_header("X-Correlation-Id", "abc");
    template.add_header("Accept", "*/*");
    sender.send(&template, None).await;

    let suggestions = sender.suggestions();
    let suggestions = suggestions.read().unwrap();
    let all = suggestions.all();
    assert!(all.contains(&"X-Correlation-Id".to_string()));
    assert_eq!(suggestions.custom().count(), 1);
}
