use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub memory_engine: String,
    pub generation_engine: String,
    pub orchestrator: String,
    #[serde(default)]
    pub agents_active: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub status: String,
    pub filename: String,
    pub chunks_processed: u32,
    pub hardware: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AskRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub hardware_flow: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModeRequest<'a> {
    pub mode: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestratorResponse {
    pub status: String,
    pub current_mode: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeResponse {
    pub status: String,
    pub orchestrator_response: OrchestratorResponse,
    pub hardware_used: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_response_tolerates_missing_sources() {
        let parsed: AskResponse =
            serde_json::from_str(r#"{"answer":"42","hardware_flow":"NPU → GPU"}"#).unwrap();
        assert_eq!(parsed.answer, "42");
        assert!(parsed.sources.is_empty());
        assert_eq!(parsed.hardware_flow, "NPU → GPU");
    }

    #[test]
    fn mode_response_reads_nested_orchestrator() {
        let body = r#"{
            "status": "success",
            "orchestrator_response": {"status": "ok", "current_mode": "MEETING"},
            "hardware_used": "CPU"
        }"#;
        let parsed: ModeResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.orchestrator_response.current_mode, "MEETING");
        assert_eq!(parsed.hardware_used, "CPU");
    }

    #[test]
    fn requests_use_backend_field_names() {
        let ask = serde_json::to_value(AskRequest { text: "hi" }).unwrap();
        assert_eq!(ask, serde_json::json!({"text": "hi"}));
        let mode = serde_json::to_value(ModeRequest { mode: "FOCUS" }).unwrap();
        assert_eq!(mode, serde_json::json!({"mode": "FOCUS"}));
    }
}
