//! Import/export workflow: paste a curl command, edit it as a template,
//! resolve it and copy it back out.

use super::init_test_env;
use rest_client_core::auth::AuthConfig;
use rest_client_core::codegen::{generate_code, Language};
use rest_client_core::curl::{generate_curl_command, parse_curl_command, ParseError};
use rest_client_core::environment::Environment;
use rest_client_core::materializer::materialize;
use rest_client_core::models::{BodyType, Param, RequestTemplate};

#[test]
fn test_import_multiline_chrome_copy() {
    init_test_env();

    let pasted = "curl 'https://api.example.com/v1/orders?limit=5' \\\n  -H 'accept: application/json' \\\n  -H 'authorization: Bearer abc' \\\n  --compressed";

    let parsed = parse_curl_command(pasted).unwrap();
    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.url, "https://api.example.com/v1/orders?limit=5");
    assert_eq!(
        parsed.headers,
        vec![
            Param::new("accept", "application/json"),
            Param::new("authorization", "Bearer abc"),
        ]
    );
}

#[test]
fn test_import_smart_quotes_and_nbsp() {
    init_test_env();

    let pasted = "curl\u{00a0}-X\u{00a0}PUT \u{201c}https://h/x\u{201d} -d \u{2018}a=1\u{2019}";
    let parsed = parse_curl_command(pasted).unwrap();

    assert_eq!(parsed.method, "PUT");
    assert_eq!(parsed.url, "https://h/x");
    assert_eq!(parsed.body.as_deref(), Some("a=1"));
}

#[test]
fn test_plain_url_is_not_curl() {
    init_test_env();

    assert_eq!(
        parse_curl_command("https://example.com"),
        Err(ParseError::NotACurlCommand)
    );
    assert_eq!(parse_curl_command(" \n "), Err(ParseError::EmptyInput));
}

#[test]
fn test_import_edit_export() {
    init_test_env();

    let parsed = parse_curl_command(
        r#"curl -X POST https://{{host}}/users -H "Content-Type: application/json" -d '{"name":"{{name}}"}'"#,
    )
    .unwrap();

    let mut template = RequestTemplate::from(parsed);
    assert_eq!(template.body_type, BodyType::RawJson);

    template.add_param("notify", "true");
    template.auth = AuthConfig::Bearer {
        token: "{{token}}".to_string(),
    };

    let mut env = Environment::new("dev");
    env.set("host", "api.example.com");
    env.set("name", "Ada");
    env.set("token", "t-1");

    let request = materialize(&template, Some(&env)).request;
    let exported = generate_curl_command(&request);

    assert_eq!(
        exported,
        "curl -X POST 'https://api.example.com/users?notify=true' \\\n  -H 'Content-Type: application/json' \\\n  -H 'Authorization: Bearer t-1' \\\n  -d '{\"name\":\"Ada\"}'"
    );

    let reimported = parse_curl_command(&exported).unwrap();
    assert_eq!(reimported.url, "https://api.example.com/users?notify=true");
    assert_eq!(reimported.headers, request.headers);
    assert_eq!(reimported.body, request.body);
}

#[test]
fn test_template_exports_placeholders_verbatim() {
    init_test_env();

    let mut template = RequestTemplate::new("GET", "https://{{host}}/items");
    template.add_header("X-Key", "{{key}}");

    assert_eq!(
        generate_curl_command(&template),
        "curl 'https://{{host}}/items' \\\n  -H 'X-Key: {{key}}'"
    );
}

#[test]
fn test_code_snippets_from_materialized_request() {
    init_test_env();

    let mut template = RequestTemplate::new("POST", "https://{{host}}/items");
    template.set_body(BodyType::RawJson, r#"{"id":1}"#);

    let mut env = Environment::new("dev");
    env.set("host", "a.com");
    let request = materialize(&template, Some(&env)).request;

    let java = generate_code(&request, Language::Java).unwrap();
    assert!(java.contains("URI.create(\"https://a.com/items\")"));
    assert!(java.contains(".header(\"Content-Type\", \"application/json\")"));

    let kotlin = generate_code(&request, Language::Kotlin).unwrap();
    assert!(kotlin.contains(".post(\"{\\\"id\\\":1}\".toRequestBody("));
}
