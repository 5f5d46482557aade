//! URL input control

use dioxus::prelude::*;

use crate::components::LoadingDots;

/// Submission gate: a trimmed non-empty value and no request in flight.
pub fn can_submit(value: &str, loading: bool) -> bool {
    !loading && !value.trim().is_empty()
}

/// URL input with a submit button. The value is owned by the parent; this
/// control only reports changes and submit intents.
#[component]
pub fn UrlInput(
    value: String,
    loading: bool,
    on_change: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let mut focused = use_signal(|| false);

    let submit_enabled = can_submit(&value, loading);

    rsx! {
        div {
            class: if focused() {
                "relative flex items-center gap-2 p-2 bg-white border-2 border-blue-500 ring-4 ring-blue-500/10 rounded-xl shadow-lg transition-all"
            } else {
                "relative flex items-center gap-2 p-2 bg-white border-2 border-gray-200 rounded-xl shadow-lg transition-all"
            },

            input {
                r#type: "url",
                value: "{value}",
                oninput: move |event| on_change.call(event.value()),
                onfocus: move |_| focused.set(true),
                onblur: move |_| focused.set(false),
                onkeydown: move |event| {
                    if event.key() == Key::Enter && submit_enabled {
                        on_submit.call(());
                    }
                },
                placeholder: "Enter a URL to analyze (e.g. https://example.com/products)",
                disabled: loading,
                class: "flex-1 px-3 py-2 bg-transparent text-lg outline-none placeholder-gray-400"
            }

            button {
                onclick: move |_| {
                    if submit_enabled {
                        on_submit.call(());
                    }
                },
                disabled: !submit_enabled,
                class: if submit_enabled {
                    "flex items-center gap-2 px-6 py-3 rounded-lg font-medium bg-blue-600 text-white hover:bg-blue-700 transition-all"
                } else {
                    "flex items-center gap-2 px-6 py-3 rounded-lg font-medium bg-gray-100 text-gray-400 cursor-not-allowed transition-all"
                },
                if loading {
                    LoadingDots { label: "Analyzing...".to_string() }
                } else {
                    span { "Analyze" }
                    span { "\u{2192}" } // →
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_requires_non_whitespace_content() {
        assert!(!can_submit("", false));
        assert!(!can_submit("   ", false));
        assert!(!can_submit("\t\n", false));
        assert!(can_submit("h", false));
        assert!(can_submit("  https://example.com  ", false));
    }

    #[test]
    fn submission_is_blocked_while_a_request_is_pending() {
        assert!(!can_submit("https://example.com", true));
    }
}
