use crate::state::MeetingBoard;
use dioxus::prelude::*;

#[component]
pub fn MeetingsView() -> Element {
    let mut board = use_context::<Signal<MeetingBoard>>();
    let mut draft = use_signal(String::new);
    let snapshot = board();

    let on_draft_key = move |ev: KeyboardEvent| {
        if ev.key() != Key::Enter {
            return;
        }
        ev.prevent_default();
        let added = board.write().add_item(&draft.peek());
        if added.is_some() {
            draft.set(String::new());
        }
    };

    rsx! {
        div { class: "main-container",
            div { class: "page-header",
                div {
                    p { class: "breadcrumb", "Synapse / Meetings" }
                    h2 { class: "page-title", "Meetings & Notes" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| board.write().new_note(),
                    "New Note"
                }
            }
            div { class: "meetings-grid",
                div { class: "panel",
                    h3 { class: "section-title", "Meeting Notes" }
                    textarea {
                        class: "notes-input",
                        placeholder: "Start typing your meeting notes here...",
                        value: "{snapshot.notes}",
                        oninput: move |ev| board.write().notes = ev.value(),
                    }
                }
                div { class: "panel",
                    h3 { class: "section-title", "Action Items ({snapshot.open_count()})" }
                    ul { class: "action-list",
                        for item in snapshot.items().iter().cloned() {
                            li {
                                key: "{item.id}",
                                class: format_args!("action-item {}", if item.completed { "done" } else { "" }),
                                label {
                                    input {
                                        r#type: "checkbox",
                                        checked: item.completed,
                                        onchange: move |_| {
                                            board.write().toggle(item.id);
                                        },
                                    }
                                    span { "{item.text}" }
                                }
                            }
                        }
                    }
                    input {
                        class: "action-input",
                        r#type: "text",
                        placeholder: "+ Add a task (press Enter)",
                        value: "{draft}",
                        oninput: move |ev| draft.set(ev.value()),
                        onkeydown: on_draft_key,
                    }
                }
            }
        }
    }
}
