use crate::config::DEFAULT_LLM_URL;
use crate::types::ThemeMode;
use dioxus::prelude::*;

#[component]
pub fn SettingsView(theme: Signal<ThemeMode>) -> Element {
    let mut theme = theme;
    rsx! {
        div { class: "main-container",
            div { class: "settings-section",
                h3 { class: "section-title", "Appearance" }
                div { class: "theme-toggle",
                    button {
                        class: format_args!(
                            "theme-option {}",
                            if matches!(theme(), ThemeMode::Light) { "active" } else { "" }
                        ),
                        r#type: "button",
                        onclick: move |_| theme.set(ThemeMode::Light),
                        "Light"
                    }
                    button {
                        class: format_args!(
                            "theme-option {}",
                            if matches!(theme(), ThemeMode::Dark) { "active" } else { "" }
                        ),
                        r#type: "button",
                        onclick: move |_| theme.set(ThemeMode::Dark),
                        "Dark"
                    }
                }
            }
            div { class: "settings-section",
                h3 { class: "section-title", "Local LLM" }
                div { class: "locked-input",
                    input {
                        r#type: "text",
                        value: DEFAULT_LLM_URL,
                        readonly: true,
                        disabled: true,
                    }
                    span { class: "lock-icon", dangerous_inner_html: "&#128274;" }
                }
            }
            div { class: "settings-section",
                h3 { class: "section-title", "Privacy" }
                p { class: "text-muted",
                    "All documents, embeddings and conversations stay on this device. Synapse never sends your data to a cloud service."
                }
            }
        }
    }
}
