//! Scraping tools page
//!
//! Direct access to the raw-scrape and schema-guided-extract operations,
//! with results shown as pretty-printed JSON.

use dioxus::prelude::*;

use crate::components::{can_submit, LoadingDots};
use crate::pages::server_error_message;
use crate::routes::Route;

/// Tools page - raw scrape and schema-guided extraction
#[component]
pub fn Tools() -> Element {
    // Raw scrape state
    let mut scrape_url = use_signal(String::new);
    let mut main_content_only = use_signal(|| true);
    let mut scrape_loading = use_signal(|| false);
    let mut scrape_result = use_signal(|| None::<String>);

    // Extraction state
    let mut extract_url = use_signal(String::new);
    let mut prompt = use_signal(String::new);
    let mut schema_text = use_signal(String::new);
    let mut extract_loading = use_signal(|| false);
    let mut extract_result = use_signal(|| None::<String>);

    let handle_scrape = move |_| {
        let url = scrape_url.peek().trim().to_string();
        if !can_submit(&url, *scrape_loading.peek()) {
            return;
        }

        // Flip the flag before spawning so a second click cannot slip in
        // ahead of the future's first poll.
        scrape_loading.set(true);
        scrape_result.set(None);

        let only_main = main_content_only();
        spawn(async move {
            match raw_scrape(url, only_main).await {
                Ok(result) => scrape_result.set(Some(result)),
                Err(error) => {
                    scrape_result.set(Some(format!("Error: {}", server_error_message(error))))
                }
            }

            scrape_loading.set(false);
        });
    };

    let handle_extract = move |_| {
        let url = extract_url.peek().trim().to_string();
        let prompt_value = prompt.peek().trim().to_string();
        if !can_submit(&url, *extract_loading.peek()) || prompt_value.is_empty() {
            return;
        }

        extract_loading.set(true);
        extract_result.set(None);

        let schema = schema_text.peek().trim().to_string();
        spawn(async move {
            let schema = if schema.is_empty() { None } else { Some(schema) };
            match extract_data(url, prompt_value, schema).await {
                Ok(result) => extract_result.set(Some(result)),
                Err(error) => {
                    extract_result.set(Some(format!("Error: {}", server_error_message(error))))
                }
            }

            extract_loading.set(false);
        });
    };

    rsx! {
        div {
            class: "min-h-screen bg-gradient-to-b from-blue-50 to-white",

            header {
                class: "bg-white border-b border-gray-100",
                div {
                    class: "max-w-5xl mx-auto px-4 py-8",
                    Link {
                        to: Route::Home {},
                        class: "text-blue-600 hover:text-blue-700 text-sm mb-4 inline-block",
                        "\u{2190} Back to Home"
                    }
                    h1 { class: "text-3xl font-bold text-gray-900 mb-2", "Scraping Tools" }
                    p {
                        class: "text-gray-600",
                        "Run the raw scrape and schema-guided extraction operations directly."
                    }
                }
            }

            main {
                class: "max-w-5xl mx-auto px-4 py-8",
                div {
                    class: "grid grid-cols-1 lg:grid-cols-2 gap-6",

                    // Raw Scrape card
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                        h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Raw Scrape" }
                        p {
                            class: "text-sm text-gray-600 mb-4",
                            "Fetch a page and return its content without extraction."
                        }

                        div {
                            class: "space-y-4",
                            div {
                                label { class: "block text-sm font-medium text-gray-700 mb-1", "URL" }
                                input {
                                    r#type: "url",
                                    value: "{scrape_url}",
                                    oninput: move |e| scrape_url.set(e.value()),
                                    placeholder: "https://example.com",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                                }
                            }
                            label {
                                class: "flex items-center gap-2 text-sm text-gray-700",
                                input {
                                    r#type: "checkbox",
                                    checked: main_content_only(),
                                    onchange: move |e| main_content_only.set(e.checked()),
                                }
                                "Main content only"
                            }
                            button {
                                class: "w-full py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50",
                                disabled: scrape_loading() || scrape_url().trim().is_empty(),
                                onclick: handle_scrape,
                                if scrape_loading() {
                                    LoadingDots { label: "Scraping...".to_string() }
                                } else {
                                    "Run Scrape"
                                }
                            }
                        }

                        if let Some(result) = scrape_result() {
                            pre {
                                class: "mt-4 p-3 bg-gray-50 rounded text-xs overflow-auto max-h-64 whitespace-pre-wrap break-all",
                                "{result}"
                            }
                        }
                    }

                    // Schema Extraction card
                    div {
                        class: "bg-white rounded-lg shadow-sm border border-gray-200 p-6",
                        h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Schema Extraction" }
                        p {
                            class: "text-sm text-gray-600 mb-4",
                            "Extract structured data guided by a prompt and an optional JSON schema."
                        }

                        div {
                            class: "space-y-4",
                            div {
                                label { class: "block text-sm font-medium text-gray-700 mb-1", "URL" }
                                input {
                                    r#type: "url",
                                    value: "{extract_url}",
                                    oninput: move |e| extract_url.set(e.value()),
                                    placeholder: "https://example.com/products",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                                }
                            }
                            div {
                                label { class: "block text-sm font-medium text-gray-700 mb-1", "Prompt" }
                                textarea {
                                    value: "{prompt}",
                                    oninput: move |e| prompt.set(e.value()),
                                    placeholder: "e.g. List every product with its name and price",
                                    rows: "3",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 resize-none"
                                }
                            }
                            div {
                                label { class: "block text-sm font-medium text-gray-700 mb-1", "Schema (optional)" }
                                textarea {
                                    value: "{schema_text}",
                                    oninput: move |e| schema_text.set(e.value()),
                                    placeholder: "{{ \"type\": \"object\", ... }}",
                                    rows: "4",
                                    class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 font-mono text-xs resize-none"
                                }
                            }
                            button {
                                class: "w-full py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700 disabled:opacity-50",
                                disabled: extract_loading() || extract_url().trim().is_empty() || prompt().trim().is_empty(),
                                onclick: handle_extract,
                                if extract_loading() {
                                    LoadingDots { label: "Extracting...".to_string() }
                                } else {
                                    "Run Extraction"
                                }
                            }
                        }

                        if let Some(result) = extract_result() {
                            pre {
                                class: "mt-4 p-3 bg-gray-50 rounded text-xs overflow-auto max-h-64 whitespace-pre-wrap break-all",
                                "{result}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[server]
async fn raw_scrape(url: String, only_main_content: bool) -> Result<String, ServerFnError> {
    use crate::api::ApiClient;
    use crate::types::RawScrapeRequest;

    let client = ApiClient::from_env();
    let response = client
        .scrape(&RawScrapeRequest {
            url,
            formats: Some(vec!["markdown".to_string()]),
            only_main_content: Some(only_main_content),
        })
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(serde_json::to_string_pretty(&response).unwrap_or_default())
}

#[server]
async fn extract_data(
    url: String,
    prompt: String,
    schema: Option<String>,
) -> Result<String, ServerFnError> {
    use crate::api::ApiClient;
    use crate::types::ExtractRequest;

    // The schema is opaque to us; it only has to be valid JSON.
    let schema = match schema {
        Some(text) => Some(
            serde_json::from_str(&text)
                .map_err(|e| ServerFnError::new(format!("Invalid schema JSON: {e}")))?,
        ),
        None => None,
    };

    let client = ApiClient::from_env();
    let response = client
        .extract(&ExtractRequest { url, prompt, schema })
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(serde_json::to_string_pretty(&response).unwrap_or_default())
}
