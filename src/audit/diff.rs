//! Field-level change summary for edited entries

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::{Map, Value};

/// One-line summary of the fields an edit changed, by wire name
///
/// The id is fixed across an edit and is left out. Returns `None` when both
/// entries serialize to the same fields.
pub fn describe_edit<T: Serialize>(before: &T, after: &T) -> Option<String> {
    let before = fields(before);
    let after = fields(after);

    let names: BTreeSet<&String> = before.keys().chain(after.keys()).collect();
    let changes: Vec<String> = names
        .into_iter()
        .filter(|name| name.as_str() != "id")
        .filter_map(|name| {
            let (old, new) = (before.get(name), after.get(name));
            (old != new).then(|| format!("{}: {} -> {}", name, show(old), show(new)))
        })
        .collect();

    (!changes.is_empty()).then(|| changes.join(", "))
}

fn fields<T: Serialize>(entry: &T) -> Map<String, Value> {
    match serde_json::to_value(entry) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

fn show(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "(none)".to_string(),
        Some(Value::String(s)) if s.chars().count() > 40 => {
            let head: String = s.chars().take(37).collect();
            format!("\"{}...\"", head)
        }
        Some(Value::String(s)) => format!("\"{}\"", s),
        Some(other) => other.to_string(),
    }
}
