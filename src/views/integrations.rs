use crate::integrations::IntegrationService;
use crate::state::integrations::PlatformCard;
use crate::state::{ConnectionStatus, IntegrationsPage, LogKind, Toast, ToastQueue};
use crate::types::Platform;
use crate::ui::AppServices;
use crate::views::shared::{push_toast, use_toasts};
use crate::views::tasks::{DashboardTasks, use_dashboard_tasks};
use dioxus::prelude::*;
use std::sync::Arc;
use time::OffsetDateTime;

#[component]
pub fn IntegrationsView() -> Element {
    let services = use_context::<AppServices>();
    let tasks = use_dashboard_tasks();
    let page = use_context::<Signal<IntegrationsPage>>();
    let connecting = use_signal(|| Option::<Platform>::None);

    let sync_now = use_callback({
        let mut page = page;
        move |platform: Platform| {
            if !page.write().begin_sync(platform, OffsetDateTime::now_utc()) {
                return;
            }
            let integrations = services.integrations.clone();
            tasks.spawn(async move {
                let sync = integrations.trigger_sync(platform).await;
                page.write()
                    .finish_sync(platform, Ok(sync), OffsetDateTime::now_utc());
            });
        }
    });

    let snapshot = page();

    rsx! {
        div { class: "main-container",
            div { class: "settings-section",
                h3 { class: "section-title", "Connected Brains" }
                p { class: "text-muted",
                    "Connect your tools so Synapse can pull their context into local memory."
                }
            }
            div { class: "integration-grid",
                for platform in Platform::ALL {
                    IntegrationCard {
                        key: "{platform.id()}",
                        platform,
                        card: snapshot.card(platform).clone(),
                        connecting,
                        page,
                        on_sync: sync_now,
                    }
                }
            }
            SyncLog { page }
            if let Some(platform) = connecting() {
                ConnectModal { platform, connecting, page }
            }
        }
    }
}

#[component]
fn IntegrationCard(
    platform: Platform,
    card: PlatformCard,
    connecting: Signal<Option<Platform>>,
    page: Signal<IntegrationsPage>,
    on_sync: Callback<Platform>,
) -> Element {
    let mut connecting = connecting;
    let mut page = page;
    let (badge_class, badge_label) = match card.status {
        ConnectionStatus::Disconnected => ("status-badge", "Not connected"),
        ConnectionStatus::Connected => ("status-badge connected", "Connected"),
        ConnectionStatus::Syncing => ("status-badge syncing", "Syncing"),
    };
    let enabled = card.enabled;

    rsx! {
        div { class: format_args!("integration-card {}", if enabled { "" } else { "muted" }),
            div { class: "integration-head",
                h4 { "{platform.name()}" }
                span { class: badge_class, "{badge_label}" }
            }
            p { class: "text-muted", "{platform.description()}" }
            if let Some(synced) = card.last_synced.as_deref() {
                p { class: "integration-synced", "Last synced: {synced}" }
            }
            div { class: "integration-actions",
                if card.status == ConnectionStatus::Disconnected {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| connecting.set(Some(platform)),
                        "Connect"
                    }
                } else {
                    button {
                        class: "btn",
                        r#type: "button",
                        disabled: card.status == ConnectionStatus::Syncing || !enabled,
                        onclick: move |_| on_sync.call(platform),
                        if card.status == ConnectionStatus::Syncing { "Syncing..." } else { "Sync Now" }
                    }
                }
                label { class: "switch",
                    input {
                        r#type: "checkbox",
                        checked: enabled,
                        onchange: move |ev| {
                            page.write().toggle(platform, ev.checked(), OffsetDateTime::now_utc());
                        },
                    }
                    span { class: "switch-track" }
                }
            }
        }
    }
}

/// Persist `key` for `platform` and mark the card connected. The save keeps
/// running if the modal closes; `done` reports whether it succeeded.
pub fn save_key(
    tasks: DashboardTasks,
    integrations: Arc<IntegrationService>,
    mut page: Signal<IntegrationsPage>,
    toasts: Signal<ToastQueue>,
    platform: Platform,
    key: String,
    done: impl FnOnce(bool) + 'static,
) {
    tasks.spawn(async move {
        match integrations.save_integration_key(platform, &key).await {
            Ok(_) => {
                page.write().key_saved(platform, OffsetDateTime::now_utc());
                done(true);
            }
            Err(err) => {
                tracing::error!(%platform, error = %err, "could not persist integration key");
                push_toast(toasts, Toast::error("Could not save key", err.to_string()));
                done(false);
            }
        }
    });
}

#[component]
fn ConnectModal(
    platform: Platform,
    connecting: Signal<Option<Platform>>,
    page: Signal<IntegrationsPage>,
) -> Element {
    let mut connecting = connecting;
    let services = use_context::<AppServices>();
    let tasks = use_dashboard_tasks();
    let toasts = use_toasts();
    let mut key = use_signal(String::new);
    let mut show_key = use_signal(|| false);
    let mut saving = use_signal(|| false);

    let save = move |_| {
        let value = key().trim().to_string();
        if value.is_empty() || saving() {
            return;
        }
        saving.set(true);
        save_key(
            tasks,
            services.integrations.clone(),
            page,
            toasts,
            platform,
            value,
            move |saved| {
                // the modal may already be closed
                if let Ok(mut flag) = saving.try_write() {
                    *flag = false;
                }
                if saved {
                    if let Ok(mut open) = connecting.try_write() {
                        if *open == Some(platform) {
                            *open = None;
                        }
                    }
                }
            },
        );
    };

    let input_type = if show_key() { "text" } else { "password" };

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| connecting.set(None),
            div { class: "modal", onclick: move |ev| ev.stop_propagation(),
                h3 { "Connect {platform.name()}" }
                p { class: "text-muted", "Your key is stored on this device only." }
                div { class: "key-input",
                    input {
                        r#type: input_type,
                        placeholder: "Paste your {platform.name()} token...",
                        value: "{key}",
                        oninput: move |ev| key.set(ev.value()),
                        disabled: saving(),
                        autofocus: true,
                    }
                    button {
                        class: "btn-ghost",
                        r#type: "button",
                        onclick: move |_| show_key.toggle(),
                        if show_key() { "Hide" } else { "Show" }
                    }
                }
                div { class: "modal-actions",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| connecting.set(None),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        disabled: saving() || key().trim().is_empty(),
                        onclick: save,
                        if saving() { "Connecting..." } else { "Save & Connect" }
                    }
                }
            }
        }
    }
}

#[component]
fn SyncLog(page: Signal<IntegrationsPage>) -> Element {
    let snapshot = page();
    rsx! {
        div { class: "sync-log",
            h3 { class: "section-title", "Sync Activity" }
            if snapshot.log().is_empty() {
                p { class: "text-muted", "No activity yet." }
            }
            ul {
                for entry in snapshot.log().iter().rev() {
                    li {
                        key: "{entry.id}",
                        class: log_class(entry.kind),
                        span { class: "log-time", "{entry.timestamp}" }
                        span { class: "log-source", "[{entry.source}]" }
                        span { class: "log-message", "{entry.message}" }
                    }
                }
            }
        }
    }
}

fn log_class(kind: LogKind) -> &'static str {
    match kind {
        LogKind::Info => "log-entry info",
        LogKind::Success => "log-entry success",
        LogKind::Error => "log-entry error",
    }
}
