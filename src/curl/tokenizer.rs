//! Shell-like tokenizer for pasted cURL commands.
//!
//! This is deliberately not a POSIX shell lexer. The quoting rules are:
//!
//! - a backslash outside quotes is dropped and does not escape anything
//! - inside double quotes a backslash makes the next character literal
//! - inside single quotes a backslash is an ordinary character
//! - unescaped quotes toggle their mode and are not emitted
//! - unquoted spaces separate tokens; runs of spaces collapse

use once_cell::sync::Lazy;
use regex::Regex;

/// Any run of Unicode separator or control characters.
static WHITESPACE_RUN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Z}\p{C}]+").expect("Failed to compile whitespace regex"));

/// Normalizes text pasted from documentation or chat tools.
///
/// Typographic quotes become ASCII quotes, every run of Unicode whitespace or
/// control characters (newlines and tabs included) becomes one ASCII space,
/// and the ends are trimmed.
///
/// # Examples
///
/// ```
/// use rest_client_core::curl::tokenizer::normalize;
///
/// assert_eq!(normalize("curl \u{201C}a b\u{201D}\n\t-k "), "curl \"a b\" -k");
/// ```
pub fn normalize(input: &str) -> String {
    let quotes_fixed: String = input
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect();

    WHITESPACE_RUN_REGEX
        .replace_all(&quotes_fixed, " ")
        .trim()
        .to_string()
}

/// Splits normalized command text into tokens.
///
/// Unbalanced quotes are not an error: the pending token is flushed at the
/// end of input with whatever it collected.
///
/// # Examples
///
/// ```
/// use rest_client_core::curl::tokenizer::tokenize;
///
/// let tokens = tokenize(r#"curl -H 'X: a b' -d "it's""#);
/// assert_eq!(tokens, vec!["curl", "-H", "X: a b", "-d", "it's"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_single_quote = false;
    let mut in_double_quote = false;
    let mut escaped = false;

    for c in text.chars() {
        if escaped {
            current.push(c);
            escaped = false;
            continue;
        }

        if c == '\\' {
            if in_single_quote {
                current.push(c);
            } else if in_double_quote {
                escaped = true;
            }
            continue;
        }

        match c {
            '\'' if !in_double_quote => in_single_quote = !in_single_quote,
            '"' if !in_single_quote => in_double_quote = !in_double_quote,
            ' ' if !in_single_quote && !in_double_quote => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
