//! Decoding of 5etools adventure JSON into the typed wire model.
//!
//! The main entry point is [`decode`], which parses a byte buffer and
//! walks the resulting `serde_json::Value`, resolving each element of an
//! `entries` array into either a text leaf or a branch.

use crate::error::DecodeError;
use crate::types::*;
use crate::DecodeOptions;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Decode a 5etools adventure document.
///
/// Missing or `null` optional fields decode to their zero value. Entry
/// elements that are not strings or typed objects become text leaves
/// holding their JSON rendering, unless `options.strict` is set.
///
/// Nesting is only bounded by `options.max_depth`; the parser grows its
/// stack on demand instead of applying serde_json's recursion limit.
pub fn decode(bytes: &[u8], options: &DecodeOptions) -> Result<Adventure, DecodeError> {
    let root = parse_value(bytes)?;

    let obj = root.as_object().ok_or_else(|| {
        DecodeError::shape("$", format!("expected an object, found {}", json_type(&root)))
    })?;

    let sections = match obj.get("data") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(arr)) => arr
            .iter()
            .enumerate()
            .map(|(i, s)| decode_section(s, &format!("data[{}]", i), options))
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(DecodeError::shape(
                "data",
                format!("expected an array, found {}", json_type(other)),
            ))
        }
    };

    Ok(Adventure { sections })
}

fn parse_value(bytes: &[u8]) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

fn decode_section(
    value: &Value,
    path: &str,
    options: &DecodeOptions,
) -> Result<Section, DecodeError> {
    let obj = value.as_object().ok_or_else(|| {
        DecodeError::shape(path, format!("expected an object, found {}", json_type(value)))
    })?;

    Ok(Section {
        kind: optional_str(obj, "type", path)?,
        name: optional_str(obj, "name", path)?,
        page: optional_u64(obj, "page", path)?,
        id: optional_str(obj, "id", path)?,
        entries: decode_entries(entries_array(obj, path)?, path, 1, options)?,
    })
}

/// Decode the elements of an `entries` array, which sit at `depth`.
fn decode_entries(
    arr: &[Value],
    path: &str,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Vec<Entry>, DecodeError> {
    arr.iter()
        .enumerate()
        .map(|(i, e)| decode_entry(e, &format!("{}.entries[{}]", path, i), depth, options))
        .collect()
}

fn decode_entry(
    value: &Value,
    path: &str,
    depth: usize,
    options: &DecodeOptions,
) -> Result<Entry, DecodeError> {
    if let Some(limit) = options.max_depth {
        if depth > limit {
            return Err(DecodeError::TooDeep {
                path: path.to_string(),
                limit,
            });
        }
    }

    match value {
        Value::String(s) => Ok(Entry::Text(s.clone())),
        Value::Object(obj) => match obj.get("type") {
            Some(Value::String(kind)) if !kind.is_empty() => {
                // Wrong-typed branch fields only fail in strict mode.
                let id = match optional_str(obj, "id", path) {
                    Ok(id) => id,
                    Err(_) if !options.strict => String::new(),
                    Err(e) => return Err(e),
                };
                let children = match entries_array(obj, path) {
                    Ok(arr) => arr,
                    Err(_) if !options.strict => &[][..],
                    Err(e) => return Err(e),
                };
                Ok(Entry::Branch(Branch {
                    kind: kind.clone(),
                    id,
                    entries: decode_entries(children, path, depth + 1, options)?,
                }))
            }
            // An object without a usable `type` is the leaf signal.
            _ => text_fallback(value, path, options),
        },
        _ => text_fallback(value, path, options),
    }
}

fn text_fallback(
    value: &Value,
    path: &str,
    options: &DecodeOptions,
) -> Result<Entry, DecodeError> {
    if options.strict {
        let found = match value {
            Value::Object(_) => "an object without a 'type' field".to_string(),
            other => json_type(other).to_string(),
        };
        return Err(DecodeError::UnexpectedEntryShape {
            path: path.to_string(),
            found,
        });
    }
    Ok(Entry::Text(value.to_string()))
}

// ── Field helpers ───────────────────────────────────────────────────

fn optional_str(obj: &Map<String, Value>, field: &str, path: &str) -> Result<String, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(DecodeError::shape(
            format!("{}.{}", path, field),
            format!("expected a string, found {}", json_type(other)),
        )),
    }
}

fn entries_array<'a>(
    obj: &'a Map<String, Value>,
    path: &str,
) -> Result<&'a [Value], DecodeError> {
    match obj.get("entries") {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(arr)) => Ok(arr),
        Some(other) => Err(DecodeError::shape(
            format!("{}.entries", path),
            format!("expected an array, found {}", json_type(other)),
        )),
    }
}

fn optional_u64(obj: &Map<String, Value>, field: &str, path: &str) -> Result<u64, DecodeError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(0),
        Some(v) => v.as_u64().ok_or_else(|| {
            DecodeError::shape(
                format!("{}.{}", path, field),
                format!("expected a non-negative integer, found {}", v),
            )
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
