use crate::api::{HttpBackend, SynapseBackend};
use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::integrations::{IntegrationService, KeyStore};
use crate::state::{
    ChatState, IntegrationsPage, MeetingBoard, ModeDock, ResearchState, ToastQueue, UploadState,
};
use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::{
    AgentsView, AuthView, ChatView, HealthBannerView, IntegrationsView, KnowledgeView, LandingView,
    MeetingsView, ModeDockView, ResearchView, SettingsView, ToastStack,
};
use crate::views::tasks::use_dashboard_tasks_provider;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use std::sync::Arc;

const SYNAPSE_CSS: Asset = asset!("/assets/synapse.css");

static STARTUP_CONFIG: OnceCell<ClientConfig> = OnceCell::new();

/// Hand the resolved config to the app before `dioxus::launch`.
pub fn set_startup_config(config: ClientConfig) {
    if STARTUP_CONFIG.set(config).is_err() {
        tracing::warn!("startup config was already set");
    }
}

/// Shared clients, provided as context to every view.
#[derive(Clone)]
pub struct AppServices {
    pub config: ClientConfig,
    pub backend: Arc<dyn SynapseBackend>,
    pub integrations: Arc<IntegrationService>,
}

impl AppServices {
    pub fn from_config(config: ClientConfig) -> ApiResult<Self> {
        let backend = HttpBackend::new(&config)?;
        let integrations = IntegrationService::new(&config, key_store(&config));
        Ok(Self {
            config,
            backend: Arc::new(backend),
            integrations: Arc::new(integrations),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn key_store(config: &ClientConfig) -> Arc<dyn KeyStore> {
    Arc::new(crate::integrations::FileKeyStore::in_dir(config.data_dir.clone()))
}

#[cfg(target_arch = "wasm32")]
fn key_store(_config: &ClientConfig) -> Arc<dyn KeyStore> {
    Arc::new(crate::integrations::MemoryKeyStore::new())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Landing,
    Auth,
    Dashboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardTab {
    Chat,
    Knowledge,
    Agents,
    Meetings,
    Research,
    Integrations,
    Settings,
}

impl DashboardTab {
    const ALL: [DashboardTab; 7] = [
        Self::Chat,
        Self::Knowledge,
        Self::Agents,
        Self::Meetings,
        Self::Research,
        Self::Integrations,
        Self::Settings,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Chat => "Chat & Orchestrator",
            Self::Knowledge => "Knowledge Base",
            Self::Agents => "Agents",
            Self::Meetings => "Meetings",
            Self::Research => "Research",
            Self::Integrations => "Integrations",
            Self::Settings => "Settings",
        }
    }
}

#[component]
pub fn App() -> Element {
    let services = use_hook(|| {
        let config = STARTUP_CONFIG.get().cloned().unwrap_or_default();
        AppServices::from_config(config).map_err(|err| err.to_string())
    });
    let page = use_context_provider(|| Signal::new(Page::Landing));
    let theme = use_context_provider(|| Signal::new(ThemeMode::Light));
    use_context_provider(|| Signal::new(ToastQueue::default()));

    let services = match services {
        Ok(services) => services,
        Err(err) => {
            tracing::error!(error = %err, "failed to build HTTP client");
            return rsx! {
                ThemeStyles { theme }
                div { class: "fatal", "Synapse could not start: {err}" }
            };
        }
    };
    use_context_provider(|| services);

    rsx! {
        ThemeStyles { theme }
        {match page() {
            Page::Landing => rsx! { LandingView {} },
            Page::Auth => rsx! { AuthView {} },
            Page::Dashboard => rsx! { Dashboard {} },
        }}
        ToastStack {}
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: SYNAPSE_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn Dashboard() -> Element {
    let services = use_context::<AppServices>();
    let active_tab = use_signal(|| DashboardTab::Chat);
    // view-models and their pending requests survive tab switches
    use_dashboard_tasks_provider();
    use_context_provider(|| Signal::new(ChatState::new()));
    use_context_provider(|| Signal::new(UploadState::new()));
    use_context_provider(|| Signal::new(ModeDock::default()));
    use_context_provider(|| Signal::new(MeetingBoard::default()));
    use_context_provider(|| Signal::new(ResearchState::default()));
    use_context_provider(|| {
        let statuses = services.integrations.integration_statuses();
        Signal::new(IntegrationsPage::from_statuses(&statuses))
    });
    let theme = use_context::<Signal<ThemeMode>>();
    let root_class = theme_definition(theme()).root_class;

    rsx! {
        div { class: "dashboard {root_class}",
            HealthBannerView {}
            Sidebar { active_tab }
            main { class: "dashboard-main",
                {match active_tab() {
                    DashboardTab::Chat => rsx! { ChatView {} },
                    DashboardTab::Knowledge => rsx! { KnowledgeView {} },
                    DashboardTab::Agents => rsx! { AgentsView {} },
                    DashboardTab::Meetings => rsx! { MeetingsView {} },
                    DashboardTab::Research => rsx! { ResearchView {} },
                    DashboardTab::Integrations => rsx! { IntegrationsView {} },
                    DashboardTab::Settings => rsx! { SettingsView { theme } },
                }}
            }
            if active_tab() == DashboardTab::Chat {
                ModeDockView {}
            }
        }
    }
}

#[component]
fn Sidebar(active_tab: Signal<DashboardTab>) -> Element {
    let mut page = use_context::<Signal<Page>>();
    rsx! {
        nav { class: "sidebar",
            div { class: "sidebar-brand", onclick: move |_| page.set(Page::Landing), "Synapse" }
            for tab in DashboardTab::ALL {
                SidebarItem { active_tab, tab }
            }
        }
    }
}

#[component]
fn SidebarItem(active_tab: Signal<DashboardTab>, tab: DashboardTab) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab {
        "sidebar-item active"
    } else {
        "sidebar-item"
    };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| active_tab.set(tab),
            "{tab.label()}"
        }
    }
}
