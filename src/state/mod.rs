//! Renderer-independent view-models.
//!
//! Each screen keeps its state in one of these structs; the Dioxus views hold
//! them in signals and call the transition methods from event handlers.
pub mod auth;
pub mod boot;
pub mod chat;
pub mod dock;
pub mod health;
pub mod integrations;
pub mod meetings;
pub mod research;
pub mod toast;
pub mod upload;

pub use auth::{AuthForm, AuthMode};
pub use boot::BootSequence;
pub use chat::ChatState;
pub use dock::ModeDock;
pub use health::HealthBanner;
pub use integrations::{ConnectionStatus, IntegrationsPage, LogKind, SyncLogEntry};
pub use meetings::{ActionItem, MeetingBoard};
pub use research::ResearchState;
pub use toast::{Toast, ToastKind, ToastQueue};
pub use upload::{UploadState, UploadedFile};
