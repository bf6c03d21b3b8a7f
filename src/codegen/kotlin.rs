//! Kotlin OkHttp snippets.

use super::escape_string_literal;
use crate::curl::CurlRequestLike;

/// Kotlin string literals also interpolate `$`.
fn esc(s: &str) -> String {
    escape_string_literal(s).replace('$', "\\$")
}

/// Generates a Kotlin OkHttp snippet that sends `request`.
///
/// A non-blank body on `POST`, `PUT` or `PATCH` is sent as JSON. Any other
/// non-`GET` method is sent without a body.
pub fn generate_okhttp_code<R: CurlRequestLike + ?Sized>(request: &R) -> String {
    let method = request.method().trim().to_uppercase();
    let mut code = String::new();

    code.push_str("val client = OkHttpClient()\n");
    code.push_str("val request = Request.Builder()\n");
    code.push_str(&format!("    .url(\"{}\")\n", esc(request.url())));

    for header in request.headers().iter().filter(|h| !h.has_blank_name()) {
        code.push_str(&format!(
            "    .addHeader(\"{}\", \"{}\")\n",
            esc(&header.name),
            esc(&header.value)
        ));
    }

    let body = request.body().filter(|b| !b.trim().is_empty());
    match (body, method.as_str()) {
        (Some(body), "POST" | "PUT" | "PATCH") => code.push_str(&format!(
            "    .{}(\"{}\".toRequestBody(\"application/json\".toMediaType()))\n",
            method.to_lowercase(),
            esc(body)
        )),
        (_, "GET") => {}
        (_, other) => code.push_str(&format!("    .method(\"{}\", null)\n", esc(other))),
    }

    code.push_str("    .build()\n\n");
    code.push_str("client.newCall(request).execute().use { response ->\n");
    code.push_str("    println(response.body?.string())\n");
    code.push('}');
    code
}
