//! Identifier normalization.
//!
//! Every name the definition carries (route identifiers, interactor names,
//! synthesized schema names, parameter names) is produced here. Output only
//! contains ASCII alphanumerics and `_`, and never starts with a digit, so it
//! is a valid identifier in every target language.

/// `/api/Todo/{id}` → `ApiTodoId`.
///
/// Splits on `/`, drops empty segments, strips parameter braces and
/// upper-cases the first letter of each segment. Characters that cannot
/// appear in an identifier also act as separators.
pub fn path_to_identifier(path: &str) -> String {
    let joined: String = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|segment| {
            let stripped: String = segment.chars().filter(|c| !matches!(c, '{' | '}')).collect();
            split_words(&stripped, false)
                .into_iter()
                .map(upper_first)
                .collect::<String>()
        })
        .collect();
    guard_leading_digit(joined)
}

/// `get` → `Get`. Only the first letter changes.
pub fn verb_to_identifier(verb: &str) -> String {
    upper_first(verb)
}

/// `account_holders` → `AccountHolders`.
pub fn snake_to_pascal(s: &str) -> String {
    let joined: String = split_words(s, true).into_iter().map(upper_first).collect();
    guard_leading_digit(joined)
}

/// `X-Request-Id` → `xRequestId`, `user_id` → `userId`.
pub fn header_name_to_parameter_name(s: &str) -> String {
    let pascal: String = split_words(s, true).into_iter().map(upper_first).collect();
    guard_leading_digit(lower_first(&pascal))
}

/// Concatenate `parts`, normalizing each one the way path segments are.
///
/// Used for request and response schema names:
/// `["/api/Todo", "post", "application/json", "Request"]` →
/// `ApiTodoPostApplicationJsonRequest`.
pub fn composite_identifier(parts: &[&str]) -> String {
    let joined: String = parts.iter().map(|p| path_to_identifier(p)).collect();
    guard_leading_digit(joined)
}

/// Name of the definition synthesized for an anonymous property schema:
/// `{context}{Property}SubType`.
pub fn subtype_name(context: &str, property: &str) -> String {
    format!("{context}{}SubType", snake_to_pascal(property))
}

/// Upper-case the first character, leaving the rest untouched.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split on every character that cannot appear in an identifier. When
/// `underscore` is set, `_` is a separator too.
fn split_words(s: &str, underscore: bool) -> Vec<&str> {
    s.split(|c: char| !(c.is_ascii_alphanumeric() || (!underscore && c == '_')))
        .filter(|w| !w.is_empty())
        .collect()
}

fn guard_leading_digit(s: String) -> String {
    if s.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{s}")
    } else {
        s
    }
}
