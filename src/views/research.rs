use crate::state::ResearchState;
use crate::state::research::{RECENT_TOPICS, SEARCH_DELAY};
use crate::views::tasks::{DashboardTasks, use_dashboard_tasks};
use dioxus::prelude::*;

/// Run the simulated search for the current query. Returns false when the
/// query is blank or a search is already running.
pub fn start_search(tasks: DashboardTasks, mut research: Signal<ResearchState>) -> bool {
    if research.write().begin_search().is_none() {
        return false;
    }
    tasks.spawn(async move {
        tokio::time::sleep(SEARCH_DELAY).await;
        research.write().finish_search();
    });
    true
}

#[component]
pub fn ResearchView() -> Element {
    let tasks = use_dashboard_tasks();
    let mut research = use_context::<Signal<ResearchState>>();
    let snapshot = research();

    rsx! {
        div { class: "main-container",
            div { class: "page-header",
                div {
                    p { class: "breadcrumb", "Synapse / Research" }
                    h2 { class: "page-title", "Deep Research" }
                }
            }
            div { class: "research-hero",
                h3 { "What are we researching today?" }
                p { class: "text-muted",
                    "Search the web, query your documents, or let the agent synthesize information."
                }
                form {
                    class: "research-form",
                    onsubmit: move |ev| {
                        ev.prevent_default();
                        start_search(tasks, research);
                    },
                    input {
                        r#type: "text",
                        placeholder: "Ask a question or enter a topic...",
                        value: "{snapshot.query}",
                        disabled: snapshot.is_searching(),
                        oninput: move |ev| research.write().query = ev.value(),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: !snapshot.can_submit(),
                        if snapshot.is_searching() { "Searching..." } else { "Search" }
                    }
                }
            }
            div { class: "settings-section",
                h3 { class: "section-title", "Recent Research Sessions" }
                ul { class: "upload-list",
                    for topic in RECENT_TOPICS {
                        li { class: "upload-item",
                            span { class: "upload-name", "{topic.title}" }
                            span { class: "upload-meta", "{topic.source.label()} · {topic.when}" }
                        }
                    }
                }
            }
        }
    }
}
