//! AI insights panel
//!
//! Every insight field is independently optional; a block only renders when
//! its field is present and, for lists, non-empty. Block order is fixed:
//! summary, findings, trends, recommendations, risks.

use dioxus::prelude::*;

use crate::types::Insights;

/// Confidence score rendered as a rounded percentage.
pub fn confidence_pct(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// A list field only produces a block when it is present and non-empty.
pub fn non_empty(field: &Option<Vec<String>>) -> Option<&[String]> {
    field.as_deref().filter(|items| !items.is_empty())
}

/// Panel displaying AI-generated insights for a quick-scrape result
#[component]
pub fn InsightsPanel(insights: Option<Insights>) -> Element {
    let Some(insights) = insights else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "bg-white rounded-xl shadow-sm border border-gray-200 overflow-hidden",

            // Header
            div {
                class: "flex items-center gap-2 px-4 py-3 border-b border-gray-100 bg-gradient-to-r from-blue-50 to-indigo-50",
                h3 { class: "font-semibold text-gray-900", "AI Insights" }
                if let Some(score) = insights.confidence_score {
                    span {
                        class: "ml-auto text-xs px-2 py-0.5 bg-blue-100 text-blue-700 rounded-full",
                        "Confidence: {confidence_pct(score)}%"
                    }
                }
            }

            div {
                class: "p-4 space-y-5",

                if let Some(summary) = insights.summary.as_deref().filter(|s| !s.is_empty()) {
                    div {
                        h4 { class: "font-medium text-sm text-gray-500 mb-2", "Summary" }
                        p { class: "text-gray-900 leading-relaxed", "{summary}" }
                    }
                }

                if let Some(findings) = non_empty(&insights.key_findings) {
                    div {
                        h4 { class: "font-medium text-sm text-gray-500 mb-2", "Key Findings" }
                        ul {
                            class: "space-y-2",
                            for (index, finding) in findings.iter().enumerate() {
                                li {
                                    key: "{index}",
                                    class: "flex items-start gap-2 text-sm",
                                    span {
                                        class: "w-5 h-5 rounded-full bg-green-100 text-green-700 text-xs flex items-center justify-center flex-shrink-0 mt-0.5",
                                        "{index + 1}"
                                    }
                                    span { "{finding}" }
                                }
                            }
                        }
                    }
                }

                if let Some(trends) = non_empty(&insights.trends) {
                    div {
                        h4 { class: "font-medium text-sm text-gray-500 mb-2", "Trends" }
                        div {
                            class: "flex flex-wrap gap-2",
                            for (index, trend) in trends.iter().enumerate() {
                                span {
                                    key: "{index}",
                                    class: "px-3 py-1 bg-blue-50 text-blue-700 text-sm rounded-full",
                                    "{trend}"
                                }
                            }
                        }
                    }
                }

                if let Some(recommendations) = non_empty(&insights.recommendations) {
                    div {
                        h4 { class: "font-medium text-sm text-gray-500 mb-2", "Recommendations" }
                        ul {
                            class: "space-y-2",
                            for (index, recommendation) in recommendations.iter().enumerate() {
                                li {
                                    key: "{index}",
                                    class: "flex items-start gap-2 text-sm p-2 bg-blue-50/60 rounded-lg",
                                    span { class: "text-blue-600", "\u{2192}" } // →
                                    span { "{recommendation}" }
                                }
                            }
                        }
                    }
                }

                if let Some(risks) = non_empty(&insights.risk_factors) {
                    div {
                        h4 { class: "font-medium text-sm text-gray-500 mb-2", "Risk Factors" }
                        ul {
                            class: "space-y-1",
                            for (index, risk) in risks.iter().enumerate() {
                                li {
                                    key: "{index}",
                                    class: "flex items-start gap-2 text-sm text-amber-700",
                                    span { "\u{26A0}" } // ⚠
                                    span { "{risk}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_score_rounds_to_a_percentage() {
        assert_eq!(confidence_pct(0.873), 87);
        assert_eq!(confidence_pct(0.875), 88);
        assert_eq!(confidence_pct(0.0), 0);
        assert_eq!(confidence_pct(1.0), 100);
    }

    #[test]
    fn empty_and_missing_lists_produce_no_block() {
        assert!(non_empty(&None).is_none());
        assert!(non_empty(&Some(vec![])).is_none());

        let findings = Some(vec!["pricing went up".to_string()]);
        assert_eq!(non_empty(&findings).map(<[String]>::len), Some(1));
    }

    #[test]
    fn summary_alone_is_enough() {
        let insights = Insights {
            summary: Some("x".to_string()),
            ..Default::default()
        };
        assert!(insights.summary.is_some());
        assert!(non_empty(&insights.key_findings).is_none());
        assert!(non_empty(&insights.trends).is_none());
        assert!(non_empty(&insights.recommendations).is_none());
        assert!(non_empty(&insights.risk_factors).is_none());
        assert!(insights.confidence_score.is_none());
    }
}
