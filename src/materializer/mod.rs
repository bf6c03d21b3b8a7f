//! Request materialization.
//!
//! Turns a stored [`RequestTemplate`] plus the active environment into the
//! [`MaterializedRequest`] handed to the executor. Materialization is pure:
//! the same template against the same environment always produces the same
//! request. Header names seen along the way are returned alongside the
//! request so the caller can feed its suggestion store.

use crate::auth::AuthOutcome;
use crate::environment::Environment;
use crate::models::request::{BodyType, MaterializedRequest, Param, RequestTemplate};
use crate::variables::substitution::resolve;
use std::collections::BTreeSet;

/// The result of [`materialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    pub request: MaterializedRequest,
    /// Names of the template's own headers, in sorted order. Headers added
    /// by auth or content-type inference are not included.
    pub observed_header_names: BTreeSet<String>,
}

/// Materializes `template` against `environment`.
///
/// Steps, in order:
/// 1. resolve the URL and body
/// 2. build the query string from the params with non-blank names
/// 3. resolve the values of headers with non-blank names
/// 4. apply auth, which may add a header or a query pair
/// 5. append the query string, joining with `&` if the URL already has `?`
/// 6. infer a Content-Type from the body type unless one is present or the
///    body is multipart
///
/// # Examples
///
/// ```
/// use rest_client_core::environment::Environment;
/// use rest_client_core::materializer::materialize;
/// use rest_client_core::models::RequestTemplate;
///
/// let mut env = Environment::new("dev");
/// env.set("host", "a.com");
///
/// let mut template = RequestTemplate::new("GET", "https://{{host}}/items");
/// template.add_param("page", "2");
///
/// let materialized = materialize(&template, Some(&env));
/// assert_eq!(materialized.request.url, "https://a.com/items?page=2");
/// ```
pub fn materialize(template: &RequestTemplate, environment: Option<&Environment>) -> Materialized {
    let variables = environment.map(|env| &env.variables);

    let url = resolve(Some(&template.url), variables);
    let body = template.body.as_deref().map(|b| resolve(Some(b), variables));

    let mut query: Vec<Param> = template
        .params
        .iter()
        .filter(|p| !p.has_blank_name())
        .map(|p| Param::new(p.name.clone(), resolve(Some(&p.value), variables)))
        .collect();

    let mut observed_header_names = BTreeSet::new();
    let mut headers: Vec<Param> = Vec::with_capacity(template.headers.len() + 2);
    for header in template.headers.iter().filter(|h| !h.has_blank_name()) {
        observed_header_names.insert(header.name.clone());
        headers.push(Param::new(
            header.name.clone(),
            resolve(Some(&header.value), variables),
        ));
    }

    match template.auth.resolve(variables) {
        AuthOutcome::Header(header) => headers.push(header),
        AuthOutcome::Query(pair) => query.push(pair),
        AuthOutcome::Nothing => {}
    }

    let url = append_query(url, &query);

    if !has_content_type(&headers) {
        if let Some(content_type) = inferred_content_type(template.body_type) {
            headers.push(Param::new("Content-Type", content_type));
        }
    }

    Materialized {
        request: MaterializedRequest {
            method: template.method.clone(),
            url,
            headers,
            body,
        },
        observed_header_names,
    }
}

/// Builds `?a=1&b=2` (no encoding) and appends it to `url`.
fn append_query(mut url: String, query: &[Param]) -> String {
    if query.is_empty() {
        return url;
    }

    let joined = query
        .iter()
        .map(|p| format!("{}={}", p.name, p.value))
        .collect::<Vec<_>>()
        .join("&");

    url.push(if url.contains('?') { '&' } else { '?' });
    url.push_str(&joined);
    url
}

fn has_content_type(headers: &[Param]) -> bool {
    headers
        .iter()
        .any(|h| h.name.eq_ignore_ascii_case("Content-Type"))
}

fn inferred_content_type(body_type: BodyType) -> Option<&'static str> {
    // Multipart carries a boundary the executor chooses.
    if body_type == BodyType::Multipart {
        return None;
    }
    body_type.implied_content_type()
}
