//! Values extracted by a successful match.

use serde_json::{Map, Value};
use url::form_urlencoded;

/// Ordered named values plus an optional wildcard remainder.
///
/// Named values appear in the order their tokens first appear in the
/// pattern. A token inside an optional group that did not take part in the
/// match is present with a `None` value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    named: Vec<(String, Option<String>)>,
    splat: Option<String>,
}

impl Params {
    pub fn new(named: Vec<(String, Option<String>)>, splat: Option<String>) -> Self {
        Self { named, splat }
    }

    /// Value of a named token; `None` when unknown or unmatched.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.named
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    /// Whether the pattern declared a token called `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.named.iter().any(|(n, _)| n == name)
    }

    pub fn named(&self) -> &[(String, Option<String>)] {
        &self.named
    }

    /// The raw (undecoded) wildcard remainder.
    pub fn splat(&self) -> Option<&str> {
        self.splat.as_deref()
    }

    /// Number of positional values.
    pub fn len(&self) -> usize {
        self.named.len() + usize::from(self.splat.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Positional values with names dropped; the wildcard comes last.
    pub fn values(&self) -> Vec<Option<String>> {
        self.clone().into_values()
    }

    pub fn into_values(self) -> Vec<Option<String>> {
        let mut values: Vec<_> = self.named.into_iter().map(|(_, v)| v).collect();
        if let Some(splat) = self.splat {
            values.push(Some(splat));
        }
        values
    }

    /// JSON object of named values, with the wildcard under `"*"`.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        for (name, value) in &self.named {
            let value = value.clone().map(Value::String).unwrap_or(Value::Null);
            map.insert(name.clone(), value);
        }
        if let Some(splat) = &self.splat {
            map.insert("*".to_string(), Value::String(splat.clone()));
        }
        Value::Object(map)
    }
}

/// Decode a captured segment: `+` becomes a space, `%XX` escapes are resolved.
pub(crate) fn decode_segment(raw: &str) -> String {
    // `&` and `=` delimit form pairs; keep them literal
    let escaped = raw.replace('&', "%26").replace('=', "%3D");
    form_urlencoded::parse(escaped.as_bytes())
        .next()
        .map(|(value, _)| value.into_owned())
        .unwrap_or_default()
}
