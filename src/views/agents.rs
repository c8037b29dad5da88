use dioxus::prelude::*;

#[component]
pub fn AgentsView() -> Element {
    rsx! {
        div { class: "main-container",
            div { class: "page-header",
                div {
                    p { class: "breadcrumb", "Synapse / Agents" }
                    h2 { class: "page-title", "Manage Agents" }
                }
                button { class: "btn btn-primary", r#type: "button", disabled: true, "Create Agent" }
            }
            div { class: "coming-soon",
                h3 { "Agent Orchestration Coming Soon" }
                p { class: "text-muted",
                    "Soon you will be able to create, configure, and orchestrate specialized lightweight AI agents locally to manage different domains of knowledge and tasks."
                }
            }
        }
    }
}
