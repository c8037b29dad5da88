use crate::state::HealthBanner;
use crate::ui::AppServices;
use dioxus::prelude::*;

/// Top strip polling `/health`.
#[component]
pub fn HealthBannerView() -> Element {
    let services = use_context::<AppServices>();
    let mut banner = use_signal(HealthBanner::default);

    use_future(move || {
        let backend = services.backend.clone();
        let interval = services.config.health_poll_interval;
        async move {
            loop {
                let result = backend.check_health().await;
                banner.write().apply(result);
                tokio::time::sleep(interval).await;
            }
        }
    });

    let snapshot = banner();
    let agents = snapshot.agents_active().join(", ");
    let dot_class = if snapshot.is_online() { "status-dot online" } else { "status-dot offline" };

    rsx! {
        div { class: "banner",
            div { class: "banner-item",
                span { class: dot_class }
                span { "{snapshot.status_label()}" }
            }
            div { class: "banner-item",
                span { class: "banner-key", "Memory" }
                span { class: "hw-badge {snapshot.hardware_kind().css_class()}", "{snapshot.hardware_label()}" }
            }
            div { class: "banner-item",
                span { class: "banner-key", "Generation" }
                span { "{snapshot.generation_label()}" }
            }
            div { class: "banner-item",
                span { class: "banner-key", "Mode" }
                span { "{snapshot.orchestrator_label()}" }
            }
            if !agents.is_empty() {
                div { class: "banner-item",
                    span { class: "banner-key", "Agents" }
                    span { "{agents}" }
                }
            }
        }
    }
}
