use crate::state::upload::{ACCEPTED_EXTENSIONS, accept_attribute, is_accepted_file};
use crate::api::SynapseBackend;
use crate::state::{Toast, ToastQueue, UploadState};
use crate::ui::AppServices;
use crate::views::shared::{format_message_time, push_toast, use_toasts};
use crate::views::tasks::{DashboardTasks, use_dashboard_tasks};
use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;

#[component]
pub fn KnowledgeView() -> Element {
    let uploads = use_context::<Signal<UploadState>>();
    let snapshot = uploads();

    rsx! {
        div { class: "main-container",
            div { class: "settings-section",
                h3 { class: "section-title", "Knowledge Base" }
                p { class: "text-muted",
                    "Documents are chunked and embedded by the local memory engine. Nothing leaves this device."
                }
            }
            MemoryDropzone {}
            div { class: "settings-section",
                h3 { class: "section-title", "Recently ingested" }
                if snapshot.uploaded().is_empty() {
                    p { class: "text-muted", "No documents yet." }
                }
                ul { class: "upload-list",
                    for file in snapshot.uploaded().iter() {
                        li { class: "upload-item",
                            span { class: "upload-name", "{file.filename}" }
                            span { class: "upload-meta",
                                "{file.chunks} chunks · {file.hardware} · {format_message_time(file.uploaded_at)}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Upload one picked file. `read` yields its bytes, or `None` when the file
/// could not be read. Returns false when the file was rejected or another
/// upload is still running.
pub fn start_upload<R>(
    tasks: DashboardTasks,
    mut uploads: Signal<UploadState>,
    toasts: Signal<ToastQueue>,
    backend: Arc<dyn SynapseBackend>,
    filename: String,
    read: R,
) -> bool
where
    R: Future<Output = Option<Vec<u8>>> + 'static,
{
    if uploads.peek().is_uploading() {
        return false;
    }
    if !is_accepted_file(&filename) {
        push_toast(
            toasts,
            Toast::error(
                "Unsupported file",
                format!("Accepted types: {}", ACCEPTED_EXTENSIONS.join(", ")),
            ),
        );
        return false;
    }
    uploads.write().begin();
    tasks.spawn(async move {
        let toast = match read.await {
            Some(bytes) => {
                let result = backend.upload_document(&filename, bytes).await;
                uploads.write().finish(result)
            }
            None => {
                tracing::warn!(%filename, "could not read dropped file");
                uploads.write().read_failed()
            }
        };
        push_toast(toasts, toast);
    });
    true
}

/// Drop target and file picker feeding `/upload`.
#[component]
pub fn MemoryDropzone() -> Element {
    let services = use_context::<AppServices>();
    let tasks = use_dashboard_tasks();
    let mut uploads = use_context::<Signal<UploadState>>();
    let toasts = use_toasts();

    let pick_file = use_callback(move |engine: Arc<dyn FileEngine>| {
        let Some(path) = engine.files().into_iter().next() else {
            return;
        };
        let filename = display_name(&path);
        let read = async move { engine.read_file(&path).await };
        start_upload(tasks, uploads, toasts, services.backend.clone(), filename, read);
    });

    let snapshot = uploads();
    let zone_class = match (snapshot.is_uploading(), snapshot.is_dragging()) {
        (true, _) => "dropzone uploading",
        (false, true) => "dropzone dragging",
        _ => "dropzone",
    };

    rsx! {
        label { class: zone_class,
            ondragover: move |ev| {
                ev.prevent_default();
                uploads.write().set_dragging(true);
            },
            ondragleave: move |_| uploads.write().set_dragging(false),
            ondrop: move |ev| {
                ev.prevent_default();
                uploads.write().set_dragging(false);
                if let Some(engine) = ev.files() {
                    pick_file.call(engine);
                }
            },
            input {
                r#type: "file",
                class: "dropzone-input",
                accept: accept_attribute(),
                disabled: snapshot.is_uploading(),
                onchange: move |ev| {
                    if let Some(engine) = ev.files() {
                        pick_file.call(engine);
                    }
                },
            }
            if snapshot.is_uploading() {
                div { class: "dropzone-title shimmer-text", "Ingesting into memory…" }
            } else {
                div { class: "dropzone-title", "Memory Bank" }
                div { class: "dropzone-hint", "Drop a document or click to browse" }
                div { class: "dropzone-types", "PDF · TXT · MD · DOC · DOCX" }
            }
        }
    }
}

fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}
