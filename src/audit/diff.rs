//! Field-level diffs for audit entries

use serde_json::{Map, Value};

const MAX_TEXT_CHARS: usize = 50;

/// Describe the changes between two record snapshots
///
/// Records are flat JSON objects, so only top-level fields are compared.
/// Changed and removed fields come first, then fields that only exist in
/// `after`. Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let empty = Map::new();
    let before_obj = before.as_object().unwrap_or(&empty);
    let after_obj = after.as_object().unwrap_or(&empty);

    let changed = before_obj.iter().filter_map(|(key, old)| match after_obj.get(key) {
        Some(new) if new == old => None,
        Some(new) => Some(format!("{}: {} -> {}", key, format_value(old), format_value(new))),
        None => Some(format!("{}: {} -> (removed)", key, format_value(old))),
    });

    let added = after_obj
        .iter()
        .filter(|(key, _)| !before_obj.contains_key(*key))
        .map(|(key, new)| format!("{}: (added) -> {}", key, format_value(new)));

    let changes: Vec<String> = changed.chain(added).collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Format a JSON value for a one-line summary
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > MAX_TEXT_CHARS => {
            let head: String = s.chars().take(MAX_TEXT_CHARS - 3).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
        other => other.to_string(),
    }
}
