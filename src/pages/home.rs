//! Home page component

use dioxus::prelude::*;

use crate::components::{InsightsPanel, ResultsPanel, UrlInput};
use crate::pages::server_error_message;
use crate::routes::Route;
use crate::state::{RequestSeq, RequestState};
use crate::types::QuickScrapeResponse;

/// Fallback branding when no override is configured.
const DEFAULT_SITE_NAME: &str = "ScrapeSight";

/// Branding text from the server-resolved fetch; the default covers the
/// not-yet-loaded and error cases.
fn resolve_site_name(value: Option<&Result<String, ServerFnError>>) -> String {
    match value {
        Some(Ok(configured)) => configured.clone(),
        _ => DEFAULT_SITE_NAME.to_string(),
    }
}

/// Home page - submit a URL, view extracted data and AI insights
#[component]
pub fn Home() -> Element {
    // Resolved on the server so the env override survives hydration
    let site_name = use_server_future(fetch_site_name)?;

    let mut url = use_signal(String::new);
    let mut scrape_state = use_signal(|| RequestState::<QuickScrapeResponse>::Idle);
    let mut latest_seq = use_signal(RequestSeq::default);

    let state = scrape_state.read().clone();
    let is_pending = state.is_pending();
    let name = resolve_site_name(site_name.value().as_ref().as_deref());

    let mut run_scrape = move || {
        let value = url.peek().trim().to_string();
        if value.is_empty() || scrape_state.peek().is_pending() {
            return;
        }

        let issued = latest_seq.write().advance();
        scrape_state.set(RequestState::Pending);

        spawn(async move {
            let result = quick_scrape(value).await;

            // A newer submission supersedes this one; drop the result.
            if !latest_seq.peek().is_current(issued) {
                return;
            }

            match result {
                Ok(response) => scrape_state.set(RequestState::Success(response)),
                Err(error) => {
                    scrape_state.set(RequestState::Error(server_error_message(error)))
                }
            }
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white flex flex-col",

            // Header
            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between",
                    div {
                        class: "flex items-center gap-2",
                        div {
                            class: "h-8 w-8 rounded-lg bg-blue-600 flex items-center justify-center",
                            span { class: "text-white font-bold text-sm", "S" }
                        }
                        h1 { class: "text-xl font-bold text-gray-900", "{name}" }
                    }
                    nav {
                        class: "flex items-center gap-4",
                        Link {
                            to: Route::Tools {},
                            class: "text-sm text-gray-500 hover:text-gray-900 transition-colors",
                            "Tools"
                        }
                    }
                }
            }

            main {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8 w-full flex-grow",

                // Hero
                div {
                    class: "text-center mb-12",
                    h2 {
                        class: "text-4xl font-bold text-gray-900 mb-4",
                        "From URL to insights in one step"
                    }
                    p {
                        class: "text-lg text-gray-600 max-w-2xl mx-auto",
                        "Enter a website URL and the AI extracts its structured data and generates business insights."
                    }
                }

                // URL input
                div {
                    class: "max-w-3xl mx-auto mb-12",
                    UrlInput {
                        value: url(),
                        loading: is_pending,
                        on_change: move |value| url.set(value),
                        on_submit: move |_| run_scrape(),
                    }
                }

                // Error alert
                if let Some(message) = state.error() {
                    div {
                        class: "max-w-3xl mx-auto mb-8 p-4 bg-red-50 border border-red-200 rounded-lg",
                        p { class: "text-red-700 text-sm", "Something went wrong: {message}" }
                    }
                }

                // Results
                if let Some(response) = state.data() {
                    div {
                        class: "grid lg:grid-cols-2 gap-8",
                        ResultsPanel {
                            data: response.extracted_data.clone(),
                            raw_content: response.raw_content.clone(),
                        }
                        InsightsPanel { insights: response.insights.clone() }
                    }
                }

                // Empty state
                if state.data().is_none() && !is_pending {
                    div {
                        class: "text-center py-16",
                        div {
                            class: "max-w-md mx-auto",
                            div { class: "text-6xl mb-4", "\u{1F50D}" } // 🔍
                            h3 { class: "text-xl font-semibold text-gray-900 mb-2", "Get started" }
                            p {
                                class: "text-gray-500",
                                "Paste the URL of a page you want to analyze. Product listings, news articles, and blogs all work."
                            }
                            div {
                                class: "mt-6 flex flex-wrap justify-center gap-2",
                                ExampleButton {
                                    url: "https://news.ycombinator.com",
                                    label: "Hacker News",
                                    on_select: move |value| url.set(value),
                                }
                                ExampleButton {
                                    url: "https://example.com/products",
                                    label: "Product catalog",
                                    on_select: move |value| url.set(value),
                                }
                            }
                        }
                    }
                }
            }

            // Footer
            footer {
                class: "bg-white border-t border-gray-100 mt-12",
                div {
                    class: "max-w-7xl mx-auto px-4 py-6 text-center text-sm text-gray-500",
                    "\u{00A9} 2026 {name}. AI data intelligence platform."
                }
            }
        }
    }
}

/// Clickable example URL chip for the empty state
#[component]
fn ExampleButton(url: &'static str, label: &'static str, on_select: EventHandler<String>) -> Element {
    rsx! {
        button {
            onclick: move |_| on_select.call(url.to_string()),
            class: "px-3 py-1.5 text-sm border border-gray-200 rounded-full hover:bg-gray-50 transition-colors",
            "{label}"
        }
    }
}

/// Server function resolving the branding text from deployment configuration
#[server]
async fn fetch_site_name() -> Result<String, ServerFnError> {
    Ok(std::env::var("SITE_NAME").unwrap_or_else(|_| DEFAULT_SITE_NAME.to_string()))
}

/// Server function running the quick-scrape operation against the backend
#[server]
async fn quick_scrape(url: String) -> Result<QuickScrapeResponse, ServerFnError> {
    use crate::api::ApiClient;
    use crate::types::QuickScrapeRequest;

    let client = ApiClient::from_env();
    client
        .quick_scrape(&QuickScrapeRequest::new(url))
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branding_uses_the_server_resolved_name() {
        let configured = Ok("Acme Data Studio".to_string());
        assert_eq!(resolve_site_name(Some(&configured)), "Acme Data Studio");
    }

    #[test]
    fn branding_falls_back_while_loading_or_on_error() {
        assert_eq!(resolve_site_name(None), DEFAULT_SITE_NAME);

        let failed: Result<String, ServerFnError> = Err(ServerFnError::new("boom"));
        assert_eq!(resolve_site_name(Some(&failed)), DEFAULT_SITE_NAME);
    }
}
