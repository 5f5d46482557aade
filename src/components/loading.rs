//! Loading components

use dioxus::prelude::*;

/// Inline busy indicator: three staggered dots in the current text color,
/// with an optional trailing label.
#[component]
pub fn LoadingDots(#[props(default)] label: Option<String>) -> Element {
    rsx! {
        span {
            class: "inline-flex items-center gap-1 align-middle",
            span { class: "w-1.5 h-1.5 bg-current rounded-full animate-bounce" }
            span { class: "w-1.5 h-1.5 bg-current rounded-full animate-bounce", style: "animation-delay: 0.15s" }
            span { class: "w-1.5 h-1.5 bg-current rounded-full animate-bounce", style: "animation-delay: 0.3s" }
            if let Some(label) = label {
                span { class: "ml-1", "{label}" }
            }
        }
    }
}
