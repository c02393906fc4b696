//! JSON-pointer editing for the config file.
//!
//! `config set` and `config remove` round-trip [`SlugConfig`] through a
//! `serde_json::Value`, edit it at a pointer, and deserialize it back so
//! the result is always a well-formed config.

use crate::defaults::SlugConfig;
use crate::error::Error;
use crate::Result;
use serde_json::{Map, Value};

// ============================================================================
// Config edits
// ============================================================================

/// Set the value at `pointer` and return the updated config.
pub fn set_config_value(config: &SlugConfig, pointer: &str, value: Value) -> Result<SlugConfig> {
    let mut root = to_value(config)?;
    set_json_pointer(&mut root, pointer, value)?;
    from_value(root)
}

/// Remove the value at `pointer` and return the updated config.
/// Removed fields fall back to their defaults.
pub fn remove_config_value(config: &SlugConfig, pointer: &str) -> Result<SlugConfig> {
    let mut root = to_value(config)?;
    remove_json_pointer(&mut root, pointer)?;
    from_value(root)
}

fn to_value(config: &SlugConfig) -> Result<Value> {
    serde_json::to_value(config)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize config".to_string())))
}

fn from_value(value: Value) -> Result<SlugConfig> {
    let config: SlugConfig = serde_json::from_value(value)
        .map_err(|e| Error::validation_invalid_json(e, Some("deserialize config".to_string())))?;
    config.defaults.slug.validate()?;
    Ok(config)
}

// ============================================================================
// JSON Pointer Operations
// ============================================================================
//
// The config only nests objects, plus the `reserved` string array, so
// pointers walk objects by key and arrays by index. `-` as the last
// token appends to an array.

pub(crate) fn set_json_pointer(root: &mut Value, pointer: &str, new_value: Value) -> Result<()> {
    let (parents, last) = pointer_tokens(pointer)?;

    let mut current = root;
    for token in &parents {
        if current.is_null() {
            *current = Value::Object(Map::new());
        }
        current = match current {
            Value::Object(map) => map
                .entry(token.as_str())
                .or_insert_with(|| Value::Object(Map::new())),
            Value::Array(arr) => array_slot(arr, token, pointer)?,
            _ => return Err(not_a_container(pointer)),
        };
    }

    match current {
        Value::Object(map) => {
            map.insert(last, new_value);
        }
        Value::Array(arr) if last == "-" => arr.push(new_value),
        Value::Array(arr) => *array_slot(arr, &last, pointer)? = new_value,
        _ => return Err(not_a_container(pointer)),
    }

    Ok(())
}

pub(crate) fn remove_json_pointer(root: &mut Value, pointer: &str) -> Result<()> {
    let (parents, last) = pointer_tokens(pointer)?;
    let missing = || Error::config_invalid_value(pointer, None, "No value at pointer");

    let mut current = root;
    for token in &parents {
        current = match current {
            Value::Object(map) => map.get_mut(token.as_str()),
            Value::Array(arr) => token.parse::<usize>().ok().and_then(|i| arr.get_mut(i)),
            _ => None,
        }
        .ok_or_else(missing)?;
    }

    let removed = match current {
        Value::Object(map) => map.remove(&last).is_some(),
        Value::Array(arr) => match last.parse::<usize>() {
            Ok(index) if index < arr.len() => {
                arr.remove(index);
                true
            }
            _ => false,
        },
        _ => false,
    };

    if removed {
        Ok(())
    } else {
        Err(missing())
    }
}

/// Split `/a/b/c` into (`[a, b]`, `c`), unescaping `~1` and `~0`.
fn pointer_tokens(pointer: &str) -> Result<(Vec<String>, String)> {
    let Some(rest) = pointer.strip_prefix('/') else {
        return Err(Error::validation_invalid_argument(
            "pointer",
            format!("JSON pointer must start with '/': {}", pointer),
            None,
            None,
        ));
    };

    let mut tokens: Vec<String> = rest
        .split('/')
        .map(|token| token.replace("~1", "/").replace("~0", "~"))
        .collect();

    if tokens.iter().any(String::is_empty) {
        return Err(Error::validation_invalid_argument(
            "pointer",
            format!("JSON pointer has an empty segment: {}", pointer),
            None,
            None,
        ));
    }

    let last = tokens.pop().unwrap_or_default();
    Ok((tokens, last))
}

fn array_slot<'a>(arr: &'a mut [Value], token: &str, pointer: &str) -> Result<&'a mut Value> {
    let len = arr.len();
    token
        .parse::<usize>()
        .ok()
        .and_then(|index| arr.get_mut(index))
        .ok_or_else(|| {
            Error::config_invalid_value(
                pointer,
                Some(token.to_string()),
                format!("Array index must be below {}", len),
            )
        })
}

fn not_a_container(pointer: &str) -> Error {
    Error::config_invalid_value(pointer, None, "Expected object or array at pointer")
}
