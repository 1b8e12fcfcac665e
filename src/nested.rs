// Nested JSON map traversal.
// Walks a key path through nested objects, failing on the first missing step.

use serde_json::Value;
use tracing::trace;

use crate::error::{GhorgError, Result};

/// Follow `path` through nested JSON objects starting at `map`.
///
/// Each key is looked up in the value reached so far. The walk stops at the
/// first step where the current value is not an object or does not contain
/// the key, and reports that key with its position. An empty path returns
/// `map` itself.
///
/// ```
/// use serde_json::json;
/// let map = json!({"a": {"b": {"c": 1}}});
/// let value = ghorg::nested::access_nested_map(&map, &["a", "b", "c"]).unwrap();
/// assert_eq!(value, &json!(1));
/// ```
pub fn access_nested_map<'a, K>(map: &'a Value, path: &[K]) -> Result<&'a Value>
where
    K: AsRef<str>,
{
    let mut current = map;

    for (step, key) in path.iter().enumerate() {
        let key = key.as_ref();
        match current.as_object().and_then(|object| object.get(key)) {
            Some(next) => current = next,
            None => {
                trace!(key, step, "nested lookup stopped");
                return Err(GhorgError::MissingKey {
                    key: key.to_string(),
                    step,
                });
            }
        }
    }

    Ok(current)
}

/// Follow `path` and require the value found there to be a string.
pub fn access_nested_str<'a, K>(map: &'a Value, path: &[K]) -> Result<&'a str>
where
    K: AsRef<str>,
{
    access_nested_map(map, path)?
        .as_str()
        .ok_or_else(|| GhorgError::UnexpectedType {
            path: join_path(path),
            expected: "string",
        })
}

/// Render a key path as `a.b.c` for error messages.
pub(crate) fn join_path<K: AsRef<str>>(path: &[K]) -> String {
    path.iter()
        .map(|key| key.as_ref())
        .collect::<Vec<_>>()
        .join(".")
}
