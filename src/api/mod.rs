//! HTTP contract between the Synapse UI and its backend.
//!
//! The backend owns retrieval, generation and hardware routing; this module
//! only knows the four endpoints it exposes:
//!
//! | Operation | Endpoint |
//! |---|---|
//! | health | `GET /` |
//! | upload | `POST /upload` (multipart `file`) |
//! | ask | `POST /ask` `{text}` |
//! | set mode | `POST /set_mode` `{mode}` |
//!
//! # Usage
//!
//! ```rust,no_run
//! use synapse::api::{HttpBackend, SynapseBackend};
//! use synapse::config::ClientConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let backend = HttpBackend::new(&ClientConfig::from_env()?)?;
//! let reply = backend.ask("What did we decide about the launch?").await?;
//! println!("{} ({})", reply.answer, reply.hardware_flow);
//! # Ok(())
//! # }
//! ```

mod backend;
mod types;

pub use backend::{HttpBackend, SynapseBackend};
pub use types::{
    AskRequest, AskResponse, HealthResponse, ModeRequest, ModeResponse, OrchestratorResponse,
    UploadResponse,
};
