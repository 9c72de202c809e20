//! Coercion helpers for loosely shaped list columns.
//!
//! The remote store keeps `image_url`, `side_locations` and `inclusions` as
//! JSON columns that accumulated several shapes over time: bare strings,
//! flat lists, nested lists, and maps written by older admin builds. These
//! functions are the single place that turns any of those shapes into the
//! clean `Vec<String>` the domain models expose. All of them trim entries
//! and drop the ones that end up empty.

use serde_json::Value;

/// Normalizes an image column value to a list of non-empty URL strings.
///
/// Accepts `null`, a single string, or a list; list elements that are not
/// strings are dropped. Never returns a string or null shape to the caller.
pub fn normalize_image_list(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Vec::new()
            } else {
                vec![trimmed.to_string()]
            }
        }
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => {
                    let trimmed = s.trim();
                    if trimmed.is_empty() {
                        None
                    } else {
                        Some(trimmed.to_string())
                    }
                }
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Flattens a side-locations value into a de-duplicated list of names.
///
/// Legacy rows nest lists inside lists, or wrap a location in a map such as
/// `{"City": "Kyoto"}`. A map entry contributes a single string: the join of
/// its string-typed values with `", "`. Order of first appearance is kept;
/// later duplicates are dropped.
pub fn flatten_locations(value: &Value) -> Vec<String> {
    let mut flat = Vec::new();
    collect_locations(value, &mut flat);

    let mut seen = Vec::with_capacity(flat.len());
    for entry in flat {
        if !seen.contains(&entry) {
            seen.push(entry);
        }
    }
    seen
}

fn collect_locations(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                out.push(trimmed.to_string());
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_locations(item, out);
            }
        }
        Value::Object(map) => {
            let joined = map
                .values()
                .filter_map(|v| match v {
                    Value::String(s) => {
                        let trimmed = s.trim();
                        if trimmed.is_empty() {
                            None
                        } else {
                            Some(trimmed.to_string())
                        }
                    }
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join(", ");
            if !joined.is_empty() {
                out.push(joined);
            }
        }
        _ => {}
    }
}

/// Flattens an inclusions value into a list of display strings.
///
/// String entries pass through as-is. A `{label: note}` map entry becomes
/// `"<label> (<note>)"` when the note is a non-empty string, otherwise just
/// `"<label>"`. Order is preserved and duplicates are kept.
pub fn flatten_inclusions(value: &Value) -> Vec<String> {
    let mut out = Vec::new();
    match value {
        Value::String(_) => collect_inclusion(value, &mut out),
        Value::Array(items) => {
            for item in items {
                collect_inclusion(item, &mut out);
            }
        }
        Value::Object(_) => collect_inclusion(value, &mut out),
        _ => {}
    }
    out
}

fn collect_inclusion(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                out.push(trimmed.to_string());
            }
        }
        Value::Object(map) => {
            for (label, note) in map {
                let label = label.trim();
                if label.is_empty() {
                    continue;
                }
                let note = match note {
                    Value::String(s) => s.trim(),
                    _ => "",
                };
                if note.is_empty() {
                    out.push(label.to_string());
                } else {
                    out.push(format!("{} ({})", label, note));
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_image_list_shapes() {
        assert_eq!(normalize_image_list(&Value::Null), Vec::<String>::new());
        assert_eq!(normalize_image_list(&json!("x")), vec!["x"]);
        assert_eq!(
            normalize_image_list(&json!(["x", "", null, "y"])),
            vec!["x", "y"]
        );
        assert_eq!(normalize_image_list(&json!(42)), Vec::<String>::new());
        assert_eq!(normalize_image_list(&json!("   ")), Vec::<String>::new());
    }

    #[test]
    fn test_flatten_locations_mixed_shapes() {
        assert_eq!(
            flatten_locations(&json!([{ "City": "Kyoto" }, "Osaka"])),
            vec!["Kyoto", "Osaka"]
        );
        assert_eq!(
            flatten_locations(&json!(["Kyoto", ["Nara", "Kyoto"], "Osaka"])),
            vec!["Kyoto", "Nara", "Osaka"]
        );
        assert_eq!(flatten_locations(&Value::Null), Vec::<String>::new());
    }

    #[test]
    fn test_flatten_locations_joins_map_values() {
        assert_eq!(
            flatten_locations(&json!([{ "City": "Kyoto", "Region": "Kansai" }])),
            vec!["Kyoto, Kansai"]
        );
    }

    #[test]
    fn test_flatten_inclusions_label_note_pairs() {
        assert_eq!(
            flatten_inclusions(&json!([{ "Hotel": "No breakfast" }, "Airport transfer"])),
            vec!["Hotel (No breakfast)", "Airport transfer"]
        );
        assert_eq!(
            flatten_inclusions(&json!([{ "Hotel": "" }, { "Guide": null }])),
            vec!["Hotel", "Guide"]
        );
        assert_eq!(flatten_inclusions(&json!("Visa support")), vec!["Visa support"]);
    }
}
