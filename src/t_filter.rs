//! Decoding the `tokens` dump and picking out declaration sites.

use crate::t_types::{TokenDump, TokenRecord};
use serde_json::Value;

/// Fields every record must carry for the declaration-site check.
const REQUIRED_FIELDS: [&str; 2] = ["definition", "location"];

#[derive(Debug, thiserror::Error)]
pub enum TokenDumpError {
    #[error("token dump is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("token dump must be an array or an object with a \"file\" array, found {0}")]
    UnexpectedShape(&'static str),
    #[error("token record #{index} is missing `{field}`")]
    MalformedTokenRecord { index: usize, field: &'static str },
    #[error("token record #{index} is invalid: {source}")]
    InvalidTokenRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parses the compiler's stdout into a [`TokenDump`].
///
/// Both a bare array of records and the `{"file": [...], "mod": {...}}`
/// envelope are accepted. A record without `definition` or `location` fails
/// the whole dump with its index.
///
/// # Example
/// ```
/// use agal_tokens::t_filter::decode_dump;
///
/// let json = r#"[{"definition":{"line":1,"column":4},
///                 "location":{"start":{"line":1,"column":4},"end":{"line":1,"column":7}}}]"#;
/// let dump = decode_dump(json).unwrap();
/// assert_eq!(dump.tokens.len(), 1);
/// assert!(dump.module.is_none());
/// ```
pub fn decode_dump(json: &str) -> Result<TokenDump, TokenDumpError> {
    let value: Value = serde_json::from_str(json)?;
    let (items, module) = match value {
        Value::Array(items) => (items, None),
        Value::Object(mut map) => {
            let items = match map.remove("file") {
                Some(Value::Array(items)) => items,
                Some(other) => return Err(TokenDumpError::UnexpectedShape(shape_of(&other))),
                None => {
                    return Err(TokenDumpError::UnexpectedShape(
                        "an object without \"file\"",
                    ))
                }
            };
            (items, map.remove("mod"))
        }
        other => return Err(TokenDumpError::UnexpectedShape(shape_of(&other))),
    };

    let mut tokens = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        tokens.push(decode_record(index, item)?);
    }
    log::debug!("decoded {} token records", tokens.len());
    Ok(TokenDump { tokens, module })
}

fn decode_record(index: usize, item: Value) -> Result<TokenRecord, TokenDumpError> {
    if let Value::Object(ref map) = item {
        let missing = REQUIRED_FIELDS
            .iter()
            .copied()
            .find(|f| map.get(*f).map_or(true, Value::is_null));
        if let Some(field) = missing {
            return Err(TokenDumpError::MalformedTokenRecord { index, field });
        }
    }
    serde_json::from_value(item)
        .map_err(|source| TokenDumpError::InvalidTokenRecord { index, source })
}

/// Lazily yields the tokens that sit on their own declaration site, in input order.
pub fn declaration_sites<'a, I>(tokens: I) -> impl Iterator<Item = &'a TokenRecord>
where
    I: IntoIterator<Item = &'a TokenRecord>,
{
    tokens.into_iter().filter(|t| t.is_declaration_site())
}
