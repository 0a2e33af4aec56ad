//! Decoding the extraction tool's JSON response.

use serde_json::{Map, Value};

/// Title used when the response has none.
pub const FALLBACK_TITLE: &str = "article";

/// A scraped article: display title and an HTML fragment for the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub content: String,
}

/// JSON truthiness: null, false, 0, and empty strings/arrays/objects are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Parses the tool's stdout into an [`Article`].
///
/// Only `title` and `content` are read; other fields (byline, excerpt, ...)
/// are ignored. Returns the parser's message when the text is not a JSON
/// object; arrays are rejected rather than read by position.
pub fn parse_article(stdout: &str) -> Result<Article, String> {
    let mut fields: Map<String, Value> =
        serde_json::from_str(stdout).map_err(|e| e.to_string())?;

    let title = match fields.remove("title") {
        Some(v) if is_truthy(&v) => value_text(v),
        _ => FALLBACK_TITLE.to_string(),
    };
    let content = match fields.remove("content") {
        None | Some(Value::Null) => String::new(),
        Some(v) => value_text(v),
    };

    Ok(Article { title, content })
}
