use crate::api::HealthResponse;
use crate::error::ApiResult;

pub const FALLBACK_HARDWARE: &str = "CPU_MOCK";
const DISCONNECTED_LLM: &str = "LLM Disconnected";
const NO_ORCHESTRATOR: &str = "—";

/// Compute unit reported by the backend, used to pick the badge style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HardwareKind {
    Npu,
    Gpu,
    CpuMock,
}

impl HardwareKind {
    pub fn from_label(label: &str) -> Self {
        match label {
            "NPU" => Self::Npu,
            "GPU" => Self::Gpu,
            _ => Self::CpuMock,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Npu => "hw-npu",
            Self::Gpu => "hw-gpu",
            Self::CpuMock => "hw-cpu",
        }
    }
}

/// Status strip shown across the dashboard.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HealthBanner {
    online: bool,
    health: Option<HealthResponse>,
}

impl HealthBanner {
    pub fn apply(&mut self, result: ApiResult<HealthResponse>) {
        match result {
            Ok(health) => {
                if !self.online {
                    tracing::info!(status = %health.status, "backend online");
                }
                self.online = true;
                self.health = Some(health);
            }
            Err(err) => {
                if self.online {
                    tracing::warn!(error = %err, "backend went offline");
                }
                // last known engine labels stay on screen
                self.online = false;
            }
        }
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn status_label(&self) -> &'static str {
        if self.online { "Synapse Online" } else { "Offline" }
    }

    pub fn hardware_label(&self) -> &str {
        self.health
            .as_ref()
            .map(|h| h.memory_engine.as_str())
            .unwrap_or(FALLBACK_HARDWARE)
    }

    pub fn hardware_kind(&self) -> HardwareKind {
        HardwareKind::from_label(self.hardware_label())
    }

    pub fn generation_label(&self) -> &str {
        self.health
            .as_ref()
            .map(|h| h.generation_engine.as_str())
            .unwrap_or(DISCONNECTED_LLM)
    }

    pub fn orchestrator_label(&self) -> &str {
        self.health
            .as_ref()
            .map(|h| h.orchestrator.as_str())
            .unwrap_or(NO_ORCHESTRATOR)
    }

    pub fn agents_active(&self) -> &[String] {
        self.health
            .as_ref()
            .map(|h| h.agents_active.as_slice())
            .unwrap_or(&[])
    }
}
