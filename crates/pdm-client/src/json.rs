//! JSON text parsing shared by the request editor and the response path.
//!
//! Nesting depth is unbounded (deep documents grow the stack on the heap
//! instead of hitting serde_json's 128-level limit) and numbers keep their
//! literal text, so out-of-range values such as `1e400` still parse.

use serde::Deserialize;
use serde_json::Value;

/// Parses `text` as a single JSON value.
pub fn parse(text: &str) -> serde_json::Result<Value> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}
