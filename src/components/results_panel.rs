//! Extracted data panel
//!
//! The backend returns extracted data as arbitrary JSON with no fixed
//! schema. Two conventions are recognized: an `items` array (rendered as a
//! scannable list) and a `detected_type` tag (rendered as a badge). Anything
//! else falls back to pretty-printed JSON, so no payload shape can break the
//! panel.

use dioxus::prelude::*;
use serde_json::Value;

/// Items rendered individually before collapsing into a "+N more" line.
const MAX_ITEMS: usize = 10;
/// Key/value pairs shown per list item.
const MAX_ITEM_FIELDS: usize = 6;

/// How a payload should be displayed.
#[derive(Debug, Clone, PartialEq)]
pub enum DataView {
    /// The payload carried a non-empty `items` array.
    Items { shown: Vec<Value>, remainder: usize },
    /// Catch-all: the payload pretty-printed as JSON text.
    Raw(String),
}

/// Best-effort shape sniffing for an unknown payload.
pub fn classify(data: &Value) -> DataView {
    if let Some(items) = data.get("items").and_then(Value::as_array) {
        if !items.is_empty() {
            return DataView::Items {
                shown: items.iter().take(MAX_ITEMS).cloned().collect(),
                remainder: items.len().saturating_sub(MAX_ITEMS),
            };
        }
    }

    DataView::Raw(serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string()))
}

/// Count shown in the header badge: the `items` array length when present,
/// else the number of top-level keys.
pub fn item_count(data: &Value) -> usize {
    if let Some(items) = data.get("items").and_then(Value::as_array) {
        return items.len();
    }
    data.as_object().map(|object| object.len()).unwrap_or(0)
}

/// Optional content-category tag attached by the backend.
pub fn detected_type(data: &Value) -> Option<&str> {
    data.get("detected_type").and_then(Value::as_str)
}

/// Shallow one-line rendering of a single value. Nested structure is
/// deliberately not expanded; the list view has to stay scannable.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::Bool(true) => "\u{2713}".to_string(),  // ✓
        Value::Bool(false) => "\u{2717}".to_string(), // ✗
        Value::Number(number) => format_number(&number.to_string()),
        Value::String(text) => text.clone(),
        Value::Array(array) => format!("[{} items]", array.len()),
        Value::Object(_) => "{...}".to_string(),
    }
}

/// First [`MAX_ITEM_FIELDS`] key/value pairs of an object item, in the
/// payload's own key order. `None` when the item is not an object.
pub fn item_fields(item: &Value) -> Option<Vec<(String, String)>> {
    item.as_object().map(|object| {
        object
            .iter()
            .take(MAX_ITEM_FIELDS)
            .map(|(key, value)| (key.clone(), format_value(value)))
            .collect()
    })
}

/// Group the integer digits of a rendered number with thousands separators.
fn format_number(raw: &str) -> String {
    let (int_part, rest) = match raw.find('.') {
        Some(index) => raw.split_at(index),
        None => (raw, ""),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    // Exponent notation and other oddities pass through untouched.
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return raw.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped}{rest}")
}

/// Panel displaying the extracted data of a quick-scrape result
#[component]
pub fn ResultsPanel(data: Option<Value>, raw_content: Option<String>) -> Element {
    let Some(data) = data else {
        return rsx! {};
    };

    let count = item_count(&data);
    let detected = detected_type(&data).map(str::to_string);
    let view = classify(&data);

    rsx! {
        div {
            class: "bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden",

            // Header
            div {
                class: "flex items-center gap-2 px-4 py-3 border-b border-gray-100 bg-gray-50",
                h3 { class: "font-semibold text-gray-900", "Extracted Data" }
                span { class: "ml-auto text-xs text-gray-500", "{count} items" }
            }

            div {
                class: "p-4 max-h-[500px] overflow-auto",

                if let Some(detected) = detected {
                    div {
                        class: "mb-4 flex items-center gap-2",
                        span { class: "text-sm text-gray-500", "Detected type:" }
                        span {
                            class: "px-2 py-0.5 bg-blue-100 text-blue-700 text-sm rounded-full",
                            "{detected}"
                        }
                    }
                }

                {match view {
                    DataView::Items { shown, remainder } => rsx! {
                        div {
                            class: "space-y-3",
                            for (index, item) in shown.iter().enumerate() {
                                div {
                                    key: "{index}",
                                    class: "p-3 bg-gray-50 rounded-lg border border-gray-200/60",
                                    DataItem { item: item.clone() }
                                }
                            }
                            if remainder > 0 {
                                p {
                                    class: "text-sm text-gray-500 text-center py-2",
                                    "+{remainder} more"
                                }
                            }
                        }
                    },
                    DataView::Raw(text) => rsx! {
                        div {
                            class: "p-4 bg-gray-50 rounded-lg",
                            pre { class: "text-sm whitespace-pre-wrap break-all", "{text}" }
                        }
                    },
                }}

                // Raw content preview, collapsed by default
                if let Some(raw) = raw_content {
                    details {
                        class: "mt-4",
                        summary {
                            class: "cursor-pointer text-sm text-gray-500 hover:text-gray-700",
                            "Raw content preview"
                        }
                        pre {
                            class: "mt-2 p-3 bg-gray-50 rounded-lg text-xs whitespace-pre-wrap break-all max-h-40 overflow-auto",
                            "{raw}"
                        }
                    }
                }
            }
        }
    }
}

/// A single entry of the items list
#[component]
fn DataItem(item: Value) -> Element {
    match item_fields(&item) {
        Some(fields) => rsx! {
            dl {
                class: "grid grid-cols-2 gap-x-4 gap-y-1 text-sm",
                for (key, value) in fields {
                    div {
                        key: "{key}",
                        class: "contents",
                        dt { class: "text-gray-500 truncate", "{key}:" }
                        dd { class: "font-medium text-gray-900 truncate", "{value}" }
                    }
                }
            }
        },
        None => rsx! {
            span { class: "text-sm", {format_value(&item)} }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_count_prefers_the_items_array() {
        assert_eq!(item_count(&json!({ "items": ["a", "b", "c"] })), 3);
        assert_eq!(item_count(&json!({ "foo": 1, "bar": 2 })), 2);
        assert_eq!(item_count(&json!({})), 0);
        assert_eq!(item_count(&json!("just a string")), 0);
        // A non-array `items` field counts as an ordinary key.
        assert_eq!(item_count(&json!({ "items": "nope" })), 1);
    }

    #[test]
    fn classify_truncates_long_item_lists() {
        let items: Vec<_> = (0..15).map(|n| json!({ "n": n })).collect();
        match classify(&json!({ "items": items })) {
            DataView::Items { shown, remainder } => {
                assert_eq!(shown.len(), 10);
                assert_eq!(remainder, 5);
                assert_eq!(shown[0], json!({ "n": 0 }));
            }
            other => panic!("expected items view, got {other:?}"),
        }
    }

    #[test]
    fn classify_shows_no_remainder_at_exactly_ten_items() {
        let items: Vec<_> = (0..10).map(|n| json!(n)).collect();
        match classify(&json!({ "items": items })) {
            DataView::Items { shown, remainder } => {
                assert_eq!(shown.len(), 10);
                assert_eq!(remainder, 0);
            }
            other => panic!("expected items view, got {other:?}"),
        }
    }

    #[test]
    fn classify_falls_back_to_raw_json() {
        assert!(matches!(classify(&json!({ "items": [] })), DataView::Raw(_)));
        assert!(matches!(classify(&json!({ "title": "x" })), DataView::Raw(_)));
        assert!(matches!(classify(&json!([1, 2, 3])), DataView::Raw(_)));
        assert!(matches!(classify(&json!(null)), DataView::Raw(_)));
    }

    #[test]
    fn classify_survives_deep_nesting() {
        let mut value = json!("leaf");
        for _ in 0..500 {
            value = json!({ "nested": value });
        }
        match classify(&value) {
            DataView::Raw(text) => assert!(text.contains("leaf")),
            other => panic!("expected raw view, got {other:?}"),
        }
    }

    #[test]
    fn classify_handles_mixed_item_types() {
        let data = json!({ "items": [null, true, 1, "x", [1], { "a": 1 }] });
        match classify(&data) {
            DataView::Items { shown, .. } => assert_eq!(shown.len(), 6),
            other => panic!("expected items view, got {other:?}"),
        }
    }

    #[test]
    fn detected_type_requires_a_string_tag() {
        assert_eq!(detected_type(&json!({ "detected_type": "product_list" })), Some("product_list"));
        assert_eq!(detected_type(&json!({ "detected_type": 7 })), None);
        assert_eq!(detected_type(&json!({})), None);
    }

    #[test]
    fn format_value_per_type_rules() {
        assert_eq!(format_value(&json!(null)), "-");
        assert_eq!(format_value(&json!(true)), "\u{2713}");
        assert_eq!(format_value(&json!(false)), "\u{2717}");
        assert_eq!(format_value(&json!(1234567)), "1,234,567");
        assert_eq!(format_value(&json!("abc")), "abc");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({ "a": 1 })), "{...}");
    }

    #[test]
    fn format_value_number_edge_cases() {
        assert_eq!(format_value(&json!(0)), "0");
        assert_eq!(format_value(&json!(999)), "999");
        assert_eq!(format_value(&json!(1000)), "1,000");
        assert_eq!(format_value(&json!(-1234567)), "-1,234,567");
        assert_eq!(format_value(&json!(1234.5)), "1,234.5");
    }

    #[test]
    fn item_fields_takes_the_first_six_pairs_in_order() {
        let item = json!({
            "a": 1, "b": 2, "c": 3, "d": 4, "e": 5, "f": 6, "g": 7
        });
        let fields = item_fields(&item).unwrap();
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[0], ("a".to_string(), "1".to_string()));
        assert_eq!(fields[5], ("f".to_string(), "6".to_string()));

        assert!(item_fields(&json!("scalar")).is_none());
    }
}
