//! The key-value context threaded through serialization and hook execution.
//!
//! Keys passed to the lookup helpers use dot notation: `dict.deep.path` walks
//! nested objects and numeric segments such as `list.0` index into arrays.

use serde_json::{Map, Value};

/// Ordered mapping from string keys to JSON values.
pub type Context = Map<String, Value>;

/// Returns the value referenced by a dot-notation `key`, if any.
///
/// # Arguments
/// * `context` - Value to search in (usually a context object)
/// * `key` - Dot separated path, e.g. `dict.deep.path.list.0`
///
/// # Returns
/// * `Option<&Value>` - The referenced value or `None` when any segment is missing
pub fn get_from_context<'a>(context: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(context, |current, part| match current {
        Value::Object(map) => map.get(part),
        Value::Array(items) => part.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    })
}

/// Returns the value referenced by `key`, creating missing object keys on the way.
///
/// Missing intermediate segments become empty objects and the last segment is
/// initialised with `default`. Existing values are left untouched.
///
/// # Returns
/// * `Option<&mut Value>` - The stored value, or `None` when the path crosses a
///   scalar or an out of range array index
pub fn get_or_insert<'a>(
    context: &'a mut Value,
    key: &str,
    default: Value,
) -> Option<&'a mut Value> {
    let mut current = context;
    let mut parts = key.split('.').peekable();

    while let Some(part) = parts.next() {
        let is_last = parts.peek().is_none();
        current = match current {
            Value::Object(map) => map.entry(part.to_string()).or_insert_with(|| {
                if is_last {
                    default.clone()
                } else {
                    Value::Object(Map::new())
                }
            }),
            Value::Array(items) => items.get_mut(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Whether a context value counts as "set" for boolean flags.
///
/// Mirrors the usual truthiness rules: `null`, `false`, `0`, empty strings,
/// empty arrays and empty objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
