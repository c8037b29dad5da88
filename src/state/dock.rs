use super::toast::Toast;
use crate::api::{ModeResponse, SynapseBackend};
use crate::error::ApiResult;
use crate::types::OrchestratorMode;

/// Orchestrator mode switcher.
///
/// The active mode only changes after the backend confirms the switch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModeDock {
    active: OrchestratorMode,
    pending: Option<OrchestratorMode>,
}

impl ModeDock {
    pub fn new(active: OrchestratorMode) -> Self {
        Self {
            active,
            pending: None,
        }
    }

    pub fn active(&self) -> OrchestratorMode {
        self.active
    }

    pub fn pending(&self) -> Option<OrchestratorMode> {
        self.pending
    }

    /// Start switching to `mode`. Returns the wire name to send, or `None`
    /// when the mode is already active or another switch is in flight.
    pub fn begin_switch(&mut self, mode: OrchestratorMode) -> Option<&'static str> {
        if mode == self.active || self.pending.is_some() {
            return None;
        }
        self.pending = Some(mode);
        Some(mode.wire_name())
    }

    pub fn finish_switch(&mut self, result: ApiResult<ModeResponse>) -> Option<Toast> {
        let mode = self.pending.take()?;
        match result {
            Ok(response) => {
                tracing::info!(
                    mode = mode.wire_name(),
                    confirmed = %response.orchestrator_response.current_mode,
                    hardware = %response.hardware_used,
                    "orchestrator mode switched"
                );
                self.active = mode;
                Some(Toast::success(
                    format!("Switched to {}", mode.label()),
                    mode.description(),
                ))
            }
            Err(err) => {
                tracing::warn!(mode = mode.wire_name(), error = %err, "mode switch failed");
                Some(Toast::error(
                    "Failed to switch mode",
                    "Could not reach Synapse backend.",
                ))
            }
        }
    }

    /// Full switch against `backend`; no request is made when nothing would change.
    pub async fn switch(
        &mut self,
        backend: &dyn SynapseBackend,
        mode: OrchestratorMode,
    ) -> Option<Toast> {
        let wire = self.begin_switch(mode)?;
        let result = backend.set_mode(wire).await;
        self.finish_switch(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::OrchestratorResponse;
    use crate::error::ApiError;
    use crate::state::toast::ToastKind;

    fn confirmed(mode: &str) -> ModeResponse {
        ModeResponse {
            status: "success".into(),
            orchestrator_response: OrchestratorResponse {
                status: "ok".into(),
                current_mode: mode.into(),
            },
            hardware_used: "CPU".into(),
        }
    }

    #[test]
    fn defaults_to_focus() {
        assert_eq!(ModeDock::default().active(), OrchestratorMode::Focus);
    }

    #[test]
    fn active_mode_needs_no_request() {
        let mut dock = ModeDock::default();
        assert_eq!(dock.begin_switch(OrchestratorMode::Focus), None);
        assert_eq!(dock.pending(), None);
    }

    #[test]
    fn success_updates_active_mode() {
        let mut dock = ModeDock::default();
        assert_eq!(dock.begin_switch(OrchestratorMode::Meeting), Some("MEETING"));
        let toast = dock.finish_switch(Ok(confirmed("MEETING"))).unwrap();
        assert_eq!(dock.active(), OrchestratorMode::Meeting);
        assert_eq!(toast.title, "Switched to Meeting");
        assert_eq!(toast.description, "Open notepad & tools");
    }

    #[test]
    fn failure_keeps_previous_mode() {
        let mut dock = ModeDock::default();
        dock.begin_switch(OrchestratorMode::Research).unwrap();
        let toast = dock
            .finish_switch(Err(ApiError::Status {
                status: reqwest::StatusCode::BAD_GATEWAY,
                body: String::new(),
            }))
            .unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(dock.active(), OrchestratorMode::Focus);
        assert_eq!(dock.pending(), None);
    }

    #[test]
    fn concurrent_switch_is_refused() {
        let mut dock = ModeDock::default();
        dock.begin_switch(OrchestratorMode::Meeting).unwrap();
        assert_eq!(dock.begin_switch(OrchestratorMode::Research), None);
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut dock = ModeDock::default();
        assert!(dock.finish_switch(Ok(confirmed("FOCUS"))).is_none());
    }
}
