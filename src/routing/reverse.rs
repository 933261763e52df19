//! Reverse generation: substitute values back into a pattern.

use serde_json::Value;

use crate::routing::pattern::tokens;

/// Build a concrete path from `pattern`.
///
/// Each `@name[:regex]` token is replaced, in order, by the next value.
/// When the pattern contains a `*`, the values left after the tokens are
/// joined with `/` and substituted for it. Returns `None` when there are
/// fewer values than tokens.
pub fn make(pattern: &str, values: &[Value]) -> Option<String> {
    let has_star = pattern.contains('*');
    if !has_star && !pattern.contains('@') {
        return Some(pattern.to_string());
    }

    let found: Vec<_> = tokens(pattern).collect();
    if values.len() < found.len() {
        tracing::debug!(
            pattern,
            tokens = found.len(),
            values = values.len(),
            "Not enough values to build path"
        );
        return None;
    }

    let rest = has_star.then(|| {
        values[found.len()..]
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join("/")
    });
    let literal = |text: &str| match &rest {
        Some(rest) => text.replace('*', rest),
        None => text.to_string(),
    };

    let mut path = String::with_capacity(pattern.len());
    let mut cursor = 0;
    for (token, value) in found.iter().zip(values) {
        path.push_str(&literal(&pattern[cursor..token.span.start]));
        path.push_str(&render(value));
        cursor = token.span.end;
    }
    path.push_str(&literal(&pattern[cursor..]));

    Some(path)
}

/// String form of a value as it appears in a path.
pub fn render(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "1".to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}
