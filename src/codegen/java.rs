//! Java 11 `HttpClient` snippets.

use super::escape_string_literal as esc;
use crate::curl::CurlRequestLike;

/// Generates a Java 11 snippet that sends `request` and prints the body.
///
/// `GET` and `DELETE` use their dedicated builder methods. Every other
/// method gets a body publisher, `noBody()` when the body is blank.
pub fn generate_java11_code<R: CurlRequestLike + ?Sized>(request: &R) -> String {
    let method = request.method().trim().to_uppercase();
    let mut code = String::new();

    code.push_str("import java.net.URI;\n");
    code.push_str("import java.net.http.HttpClient;\n");
    code.push_str("import java.net.http.HttpRequest;\n");
    code.push_str("import java.net.http.HttpResponse;\n\n");

    code.push_str("HttpClient client = HttpClient.newHttpClient();\n");
    code.push_str("HttpRequest request = HttpRequest.newBuilder()\n");
    code.push_str(&format!("    .uri(URI.create(\"{}\"))\n", esc(request.url())));

    for header in request.headers().iter().filter(|h| !h.has_blank_name()) {
        code.push_str(&format!(
            "    .header(\"{}\", \"{}\")\n",
            esc(&header.name),
            esc(&header.value)
        ));
    }

    let publisher = match request.body().filter(|b| !b.trim().is_empty()) {
        Some(body) => format!("HttpRequest.BodyPublishers.ofString(\"{}\")", esc(body)),
        None => "HttpRequest.BodyPublishers.noBody()".to_string(),
    };

    match method.as_str() {
        "GET" | "DELETE" => code.push_str(&format!("    .{}()\n", method)),
        "POST" | "PUT" => code.push_str(&format!("    .{}({})\n", method, publisher)),
        other => code.push_str(&format!("    .method(\"{}\", {})\n", esc(other), publisher)),
    }

    code.push_str("    .build();\n\n");
    code.push_str(
        "HttpResponse<String> response = client.send(request, HttpResponse.BodyHandlers.ofString());\n",
    );
    code.push_str("System.out.println(response.body());");
    code
}
