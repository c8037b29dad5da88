use crate::api::SynapseBackend;
use crate::state::ChatState;
use crate::state::chat::{sources_label, truncate_source};
use crate::types::{ChatMessage, Role};
use crate::ui::AppServices;
use crate::views::knowledge::MemoryDropzone;
use crate::views::shared::{format_message_time, markdown_to_html};
use crate::views::tasks::{DashboardTasks, use_dashboard_tasks};
use dioxus::events::Key;
use dioxus::prelude::*;
use std::sync::Arc;

const SOURCE_PREVIEW_CHARS: usize = 80;

/// Start an `/ask` round trip for `text`. Returns false when the chat
/// refused the input (empty, or a reply is still pending).
pub fn send_chat(
    tasks: DashboardTasks,
    mut chat: Signal<ChatState>,
    backend: Arc<dyn SynapseBackend>,
    text: &str,
) -> bool {
    let Some(query) = chat.write().begin_send(text) else {
        return false;
    };
    tasks.spawn(async move {
        let result = backend.ask(&query).await;
        chat.write().receive(result);
    });
    true
}

#[component]
pub fn ChatView() -> Element {
    let services = use_context::<AppServices>();
    let tasks = use_dashboard_tasks();
    let chat = use_context::<Signal<ChatState>>();
    let mut input = use_signal(String::new);

    let send_message = use_callback(move |text: String| {
        if send_chat(tasks, chat, services.backend.clone(), &text) {
            input.set(String::new());
        }
    });

    let snapshot = chat();

    rsx! {
        div { class: "chat-layout",
            aside { class: "chat-aside", MemoryDropzone {} }
            section { class: "chat-panel",
                div { class: "chat-list",
                    if snapshot.is_empty() {
                        div { class: "chat-empty",
                            h2 { "Ask your second brain" }
                            p { class: "text-muted",
                                "Drop a document into memory, then ask anything about it."
                            }
                        }
                    }
                    for msg in snapshot.messages().iter() {
                        MessageBubble { key: "{msg.id}", message: msg.clone() }
                    }
                    if snapshot.is_loading() {
                        div { class: "message-row assistant",
                            div { class: "shimmer-line",
                                span { class: "shimmer-text", "Thinking…" }
                            }
                        }
                    }
                }

                form { class: "composer",
                    onsubmit: move |ev| ev.prevent_default(),
                    textarea {
                        rows: "1",
                        placeholder: "Ask Synapse about your documents...",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                send_message.call(input());
                            }
                        },
                        disabled: snapshot.is_loading(),
                        autofocus: true,
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: snapshot.is_loading() || input().trim().is_empty(),
                        onclick: move |_| send_message.call(input()),
                        "Send"
                    }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let role_class = match message.role {
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    let time = format_message_time(message.created_at);

    rsx! {
        div { class: "message-row {role_class}",
            div { class: "bubble {role_class}",
                if message.role == Role::Assistant {
                    AssistantBody { content: message.content.clone() }
                } else {
                    "{message.content}"
                }
            }
            if !message.sources.is_empty() {
                SourceList { sources: message.sources.clone() }
            }
            div { class: "message-meta",
                span { class: "message-timestamp", "{time}" }
                if let Some(flow) = message.hardware_flow.as_deref() {
                    span { class: "hardware-flow", "⚡ {flow}" }
                }
            }
        }
    }
}

#[component]
fn AssistantBody(content: String) -> Element {
    let html = markdown_to_html(&content);
    #[cfg_attr(not(feature = "desktop"), allow(unused_variables))]
    let copy_payload = content.clone();
    let on_copy = move |_| {
        #[cfg(feature = "desktop")]
        {
            match arboard::Clipboard::new() {
                Ok(mut clipboard) => {
                    if let Err(err) = clipboard.set_text(copy_payload.clone()) {
                        tracing::warn!(error = %err, "clipboard write failed");
                    }
                }
                Err(err) => tracing::warn!(error = %err, "clipboard unavailable"),
            }
        }
    };

    rsx! {
        if cfg!(feature = "desktop") {
            div { class: "bubble-controls",
                button { class: "action-btn", title: "Copy markdown", onclick: on_copy, "Copy" }
            }
        }
        div { class: "md", dangerous_inner_html: "{html}" }
    }
}

#[component]
fn SourceList(sources: Vec<String>) -> Element {
    let mut open = use_signal(|| false);
    let label = sources_label(sources.len());
    rsx! {
        div { class: "sources",
            button {
                class: "sources-toggle",
                r#type: "button",
                onclick: move |_| open.toggle(),
                if open() { "▾ {label}" } else { "▸ {label}" }
            }
            if open() {
                ul { class: "sources-list",
                    for (i, source) in sources.iter().enumerate() {
                        li { key: "{i}", title: "{source}", "{truncate_source(source, SOURCE_PREVIEW_CHARS)}" }
                    }
                }
            }
        }
    }
}
