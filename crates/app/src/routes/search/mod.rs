use dioxus::prelude::*;
use shared_types::{
    jurisdiction_param, match_score, OpinionResult, OpinionSearchRequest, OpinionSearchResponse,
    GENERIC_ERROR_MESSAGE, JURISDICTIONS, MIN_SEARCH_DATE, RESULT_LIMITS,
};
use shared_ui::components::{
    Alert, AlertVariant, Badge, BadgeVariant, Button, ButtonVariant, Card, CardAction,
    CardContent, CardDescription, CardFooter, CardHeader, CardTitle, FormSelect, Input,
    PageHeader, PageSubtitle, PageTitle, Skeleton,
};

use crate::format_helpers::format_date_long;

/// Lifecycle of one search submission. Each submit replaces the previous
/// outcome wholesale, so stale results never mix with new ones.
#[derive(Clone, PartialEq)]
enum SearchPhase {
    Idle,
    Submitting,
    Loaded(OpinionSearchResponse),
    Failed,
}

/// Legal opinion search page: the query form plus rendered result cards.
#[component]
pub fn OpinionSearch() -> Element {
    let mut query = use_signal(String::new);
    let mut jurisdiction = use_signal(|| "All".to_string());
    let mut after_date = use_signal(String::new);
    let mut before_date = use_signal(String::new);
    let mut result_limit = use_signal(|| RESULT_LIMITS[0].to_string());
    let mut phase = use_signal(|| SearchPhase::Idle);

    let today = chrono::Utc::now().date_naive().to_string();

    let do_search = move || {
        let q = query.read().trim().to_string();
        if q.is_empty() {
            return;
        }

        let request = OpinionSearchRequest {
            query: q,
            jurisdiction: jurisdiction_param(&jurisdiction.read()),
            after_date: Some(after_date.read().clone()).filter(|d| !d.is_empty()),
            before_date: Some(before_date.read().clone()).filter(|d| !d.is_empty()),
            k: result_limit.read().parse().unwrap_or(RESULT_LIMITS[0]),
        };

        phase.set(SearchPhase::Submitting);
        spawn(async move {
            match server::api::search_opinions(request).await {
                Ok(response) => phase.set(SearchPhase::Loaded(response)),
                Err(e) => {
                    tracing::error!(error = %e, "Opinion search failed");
                    phase.set(SearchPhase::Failed);
                }
            }
        });
    };

    let mut do_search_for_btn = do_search.clone();
    let mut do_search_for_enter = do_search.clone();

    let submitting = matches!(&*phase.read(), SearchPhase::Submitting);
    let current_phase = phase.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./search.css") }

        div { class: "search-page",
            PageHeader {
                PageTitle { "OpenProBono" }
                PageSubtitle { "Court Opinion Search" }
            }

            div { class: "search-notes",
                Alert { variant: AlertVariant::Info,
                    "Note: Search may be slow as opinions are summarized by AI."
                }
                Alert { variant: AlertVariant::Warning,
                    "Disclaimer: AI summaries are not always 100% accurate."
                }
            }

            Card {
                CardContent {
                    div { class: "search-form",
                        div { class: "search-query-row",
                            Input {
                                label: "Search query".to_string(),
                                placeholder: "Describe a legal question or situation...".to_string(),
                                value: "{query}",
                                disabled: submitting,
                                on_input: move |e: FormEvent| query.set(e.value()),
                                on_keydown: move |e: KeyboardEvent| {
                                    if matches!(e.key(), Key::Enter) {
                                        e.prevent_default();
                                        do_search_for_enter();
                                    }
                                },
                            }
                        }
                        div { class: "search-filters",
                            FormSelect {
                                label: "Jurisdiction".to_string(),
                                value: jurisdiction.read().clone(),
                                disabled: submitting,
                                onchange: move |e: Event<FormData>| jurisdiction.set(e.value()),
                                for option_value in JURISDICTIONS.iter() {
                                    option { value: *option_value, "{option_value}" }
                                }
                            }
                            Input {
                                label: "After date".to_string(),
                                input_type: "date".to_string(),
                                value: "{after_date}",
                                min: MIN_SEARCH_DATE.to_string(),
                                max: today.clone(),
                                disabled: submitting,
                                on_input: move |e: FormEvent| after_date.set(e.value()),
                            }
                            Input {
                                label: "Before date".to_string(),
                                input_type: "date".to_string(),
                                value: "{before_date}",
                                min: MIN_SEARCH_DATE.to_string(),
                                max: today.clone(),
                                disabled: submitting,
                                on_input: move |e: FormEvent| before_date.set(e.value()),
                            }
                            FormSelect {
                                label: "Results".to_string(),
                                value: result_limit.read().clone(),
                                disabled: submitting,
                                onchange: move |e: Event<FormData>| result_limit.set(e.value()),
                                for limit in RESULT_LIMITS.iter() {
                                    option { value: "{limit}", "{limit}" }
                                }
                            }
                        }
                        div { class: "search-submit-row",
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: submitting,
                                onclick: move |_| do_search_for_btn(),
                                if submitting { "Searching..." } else { "Search" }
                            }
                        }
                    }
                }
            }

            match current_phase {
                SearchPhase::Idle => rsx! {
                    div { class: "search-empty",
                        "Enter a query to search published opinions."
                    }
                },
                SearchPhase::Submitting => rsx! {
                    div { class: "search-loading",
                        Skeleton { style: "height: 160px;" }
                        Skeleton { style: "height: 160px;" }
                        Skeleton { style: "height: 160px;" }
                    }
                },
                SearchPhase::Failed => rsx! {
                    Alert { variant: AlertVariant::Error, "{GENERIC_ERROR_MESSAGE}" }
                },
                SearchPhase::Loaded(response) => rsx! {
                    if response.results.is_empty() {
                        div { class: "search-empty",
                            "No matching opinions found."
                        }
                    } else {
                        div { class: "search-results",
                            for (i, result) in response.results.iter().enumerate() {
                                OpinionCard { index: i + 1, result: result.clone() }
                            }
                        }
                    }
                },
            }
        }
    }
}

/// One search hit rendered as a card. `index` is 1-based display order.
#[component]
fn OpinionCard(index: usize, result: OpinionResult) -> Element {
    let metadata = &result.entity.metadata;
    let case_name = metadata.display_case_name();
    let court_name = metadata.display_court_name().to_string();
    let author = metadata.display_author().to_string();
    let summary = metadata.display_summary().to_string();
    let date_filed = metadata
        .date_filed
        .as_deref()
        .map(format_date_long)
        .unwrap_or_else(|| "Unknown Date".to_string());
    let score = format!("{:.5}", match_score(result.distance));
    // The server absolutizes courtlistener URLs before they reach us;
    // other sources never get a link
    let full_text_url = result.full_text_link().map(str::to_string);

    rsx! {
        Card { class: "search-result-card",
            CardHeader {
                div {
                    CardTitle { "{index}. {case_name}" }
                    CardDescription { "{court_name} · Filed {date_filed} · {author}" }
                }
                CardAction {
                    Badge { variant: BadgeVariant::Primary, "Match score: {score}" }
                }
            }
            CardContent {
                div { class: "search-result-section",
                    h4 { class: "search-result-heading", "AI summary" }
                    p { class: "search-result-summary", "{summary}" }
                }
                div { class: "search-result-section",
                    h4 { class: "search-result-heading", "Matched excerpt" }
                    if result.is_courtlistener() {
                        // Excerpt HTML comes from the server, which has already
                        // absolutized its links
                        div {
                            class: "search-result-excerpt",
                            dangerous_inner_html: "{result.entity.text}",
                        }
                    } else {
                        div { class: "search-result-excerpt", "{result.entity.text}" }
                    }
                }
            }
            CardFooter {
                if let Some(url) = full_text_url {
                    a {
                        class: "search-result-link",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Read full opinion"
                    }
                } else {
                    span { class: "search-result-no-link", "Full text unavailable" }
                }
            }
        }
    }
}
