pub mod agents;
pub mod auth;
pub mod chat;
pub mod dock;
pub mod integrations;
pub mod knowledge;
pub mod landing;
pub mod meetings;
pub mod research;
pub mod settings;
pub mod shared;
pub mod status;
pub mod tasks;
pub mod toasts;

pub use agents::AgentsView;
pub use auth::AuthView;
pub use chat::ChatView;
pub use dock::ModeDockView;
pub use integrations::IntegrationsView;
pub use knowledge::KnowledgeView;
pub use landing::LandingView;
pub use meetings::MeetingsView;
pub use research::ResearchView;
pub use settings::SettingsView;
pub use status::HealthBannerView;
pub use toasts::ToastStack;
