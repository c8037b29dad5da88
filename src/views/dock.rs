use crate::state::ModeDock;
use crate::types::OrchestratorMode;
use crate::ui::AppServices;
use crate::views::shared::{push_toast, use_toasts};
use crate::views::tasks::use_dashboard_tasks;
use dioxus::prelude::*;

/// Bottom dock switching the orchestrator between workflow modes.
#[component]
pub fn ModeDockView() -> Element {
    let services = use_context::<AppServices>();
    let tasks = use_dashboard_tasks();
    let mut dock = use_context::<Signal<ModeDock>>();
    let toasts = use_toasts();

    let switch_mode = use_callback(move |mode: OrchestratorMode| {
        let Some(wire) = dock.write().begin_switch(mode) else {
            return;
        };
        let backend = services.backend.clone();
        tasks.spawn(async move {
            let result = backend.set_mode(wire).await;
            if let Some(toast) = dock.write().finish_switch(result) {
                push_toast(toasts, toast);
            }
        });
    });

    let snapshot = dock();
    let active = snapshot.active();

    rsx! {
        div { class: "dock",
            div { class: "dock-modes",
                for mode in OrchestratorMode::ALL {
                    button {
                        key: "{mode.wire_name()}",
                        class: format_args!("dock-mode {}", if mode == active { "active" } else { "" }),
                        r#type: "button",
                        disabled: snapshot.pending().is_some(),
                        onclick: move |_| switch_mode.call(mode),
                        span { class: "dock-emoji", "{mode.emoji()}" }
                        span { class: "dock-label", "{mode.label()}" }
                        if snapshot.pending() == Some(mode) {
                            span { class: "dock-spinner" }
                        }
                    }
                }
            }
            div { class: "dock-description", "{active.description()}" }
        }
    }
}
