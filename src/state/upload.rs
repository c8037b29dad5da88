use super::toast::Toast;
use crate::api::{SynapseBackend, UploadResponse};
use crate::error::ApiResult;
use std::path::Path;
use time::OffsetDateTime;

/// Extensions offered by the file picker.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "doc", "docx"];

#[derive(Clone, Debug, PartialEq)]
pub struct UploadedFile {
    pub filename: String,
    pub chunks: u32,
    pub hardware: String,
    pub uploaded_at: OffsetDateTime,
}

/// Memory-bank dropzone state. Recent uploads are kept newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    is_uploading: bool,
    is_dragging: bool,
    uploaded: Vec<UploadedFile>,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_uploading(&self) -> bool {
        self.is_uploading
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn uploaded(&self) -> &[UploadedFile] {
        &self.uploaded
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    /// Mark an upload as started. Dropping a file also ends the drag hover.
    pub fn begin(&mut self) {
        self.is_dragging = false;
        self.is_uploading = true;
    }

    pub fn finish(&mut self, result: ApiResult<UploadResponse>) -> Toast {
        self.is_uploading = false;
        match result {
            Ok(response) => {
                tracing::info!(
                    filename = %response.filename,
                    chunks = response.chunks_processed,
                    "document ingested"
                );
                let toast = Toast::success(
                    format!("Ingested: {}", response.filename),
                    format!(
                        "{} chunks processed via {}",
                        response.chunks_processed, response.hardware
                    ),
                );
                self.uploaded.insert(
                    0,
                    UploadedFile {
                        filename: response.filename,
                        chunks: response.chunks_processed,
                        hardware: response.hardware,
                        uploaded_at: OffsetDateTime::now_utc(),
                    },
                );
                toast
            }
            Err(err) => {
                tracing::warn!(error = %err, "document upload failed");
                Toast::error("Upload failed", "Could not reach Synapse backend.")
            }
        }
    }

    /// The picked file could not be read, so nothing was sent.
    pub fn read_failed(&mut self) -> Toast {
        self.is_uploading = false;
        Toast::error("Upload failed", "Could not read the file.")
    }

    pub async fn upload(
        &mut self,
        backend: &dyn SynapseBackend,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Toast {
        self.begin();
        let result = backend.upload_document(filename, bytes).await;
        self.finish(result)
    }
}

pub fn is_accepted_file(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Value for the file input's `accept` attribute.
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::state::toast::ToastKind;

    fn ingested(name: &str, chunks: u32) -> UploadResponse {
        UploadResponse {
            status: "success".into(),
            filename: name.into(),
            chunks_processed: chunks,
            hardware: "NPU".into(),
        }
    }

    #[test]
    fn success_reports_chunk_count() {
        let mut state = UploadState::new();
        state.begin();
        assert!(state.is_uploading());

        let toast = state.finish(Ok(ingested("roadmap.pdf", 42)));
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.title, "Ingested: roadmap.pdf");
        assert_eq!(toast.description, "42 chunks processed via NPU");
        assert!(!state.is_uploading());
        assert_eq!(state.uploaded()[0].chunks, 42);
    }

    #[test]
    fn unreadable_file_ends_upload() {
        let mut state = UploadState::new();
        state.begin();
        let toast = state.read_failed();
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(!state.is_uploading());
        assert!(state.uploaded().is_empty());
    }

    #[test]
    fn failure_reports_single_error_toast() {
        let mut state = UploadState::new();
        state.begin();
        let toast = state.finish(Err(ApiError::Status {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".into(),
        }));
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Upload failed");
        assert!(!state.is_uploading());
        assert!(state.uploaded().is_empty());
    }

    #[test]
    fn newest_upload_is_listed_first() {
        let mut state = UploadState::new();
        state.begin();
        state.finish(Ok(ingested("a.txt", 1)));
        state.begin();
        state.finish(Ok(ingested("b.txt", 2)));
        let names: Vec<_> = state.uploaded().iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, ["b.txt", "a.txt"]);
    }

    #[test]
    fn drop_clears_drag_hover() {
        let mut state = UploadState::new();
        state.set_dragging(true);
        state.begin();
        assert!(!state.is_dragging());
    }

    #[test]
    fn accepted_extensions() {
        assert!(is_accepted_file("Notes.MD"));
        assert!(is_accepted_file("plan.docx"));
        assert!(!is_accepted_file("photo.png"));
        assert!(!is_accepted_file("README"));
        assert_eq!(accept_attribute(), ".pdf,.txt,.md,.doc,.docx");
    }
}
