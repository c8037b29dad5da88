use crate::effects::cursor::{CROSSHAIR_LENGTH, DOT_SIZE};
use crate::effects::frame_loop;
use crate::effects::mesh::pointer_to_world;
use crate::effects::{CursorFrame, CursorTracker, NeuralMesh};
use crate::state::BootSequence;
use crate::state::boot::{BOOT_FINAL_HOLD, BOOT_STEP};
use crate::types::Platform;
use crate::ui::Page;
use dioxus::prelude::*;
use rand_core::OsRng;
use std::time::Duration;

const FRAME_PERIOD: Duration = Duration::from_millis(33);
const MESH_VIEW_WIDTH: f32 = 14.0;
const MESH_VIEW_HEIGHT: f32 = 8.0;

struct ComparisonRow {
    title: &'static str,
    cloud: &'static str,
    local: &'static str,
}

const COMPARISON_ROWS: &[ComparisonRow] = &[
    ComparisonRow {
        title: "Data Privacy",
        cloud: "Sends private context to public cloud servers. Local OS search is shallow and disconnected.",
        local: "Zero-Knowledge Local RAG. Your data never leaves the device.",
    },
    ComparisonRow {
        title: "Context Depth",
        cloud: "Great reasoning, but blind to local files. OS search matches filenames, not meaning.",
        local: "Full Semantic Memory. Understands your PDFs, code, and docs at a deep level.",
    },
    ComparisonRow {
        title: "Latency & Speed",
        cloud: "Dependent on internet and server load. Complex queries stall behind queues.",
        local: "Hardware Accelerated. Instant response via local NPU/GPU with zero network round-trip.",
    },
    ComparisonRow {
        title: "OS Action",
        cloud: "A passive chatbot that can't touch your system. OS search opens apps, nothing more.",
        local: "Active Orchestrator. Switches modes, manages windows and launches tools on your behalf.",
    },
];

struct Showcase {
    platform: Platform,
    blurb: &'static str,
    tag: &'static str,
    activity: &'static str,
}

const SHOWCASE: &[Showcase] = &[
    Showcase {
        platform: Platform::GitHub,
        blurb: "Sync repositories, pull requests, issues, and code reviews into local memory.",
        tag: "Code & Reviews",
        activity: "Pulling commits...",
    },
    Showcase {
        platform: Platform::Slack,
        blurb: "Pull saved messages, channel threads, and team conversations for contextual answers.",
        tag: "Messages & Threads",
        activity: "Ingesting messages...",
    },
    Showcase {
        platform: Platform::Notion,
        blurb: "Ingest workspace docs, databases, meeting notes, and wikis for deep RAG queries.",
        tag: "Docs & Databases",
        activity: "Indexing pages...",
    },
    Showcase {
        platform: Platform::Jira,
        blurb: "Sync active sprint tickets, epics, stories, and bug reports into your knowledge base.",
        tag: "Sprints & Tickets",
        activity: "Syncing tickets...",
    },
];

struct StackLayer {
    title: &'static str,
    detail: &'static str,
}

const STACK_LAYERS: &[StackLayer] = &[
    StackLayer {
        title: "High-Speed API Engine",
        detail: "Async Python backend handling concurrent requests at blazing speed.",
    },
    StackLayer {
        title: "Vector Memory Store",
        detail: "Semantic search database for deep contextual retrieval across all your local files.",
    },
    StackLayer {
        title: "Local Language Model",
        detail: "On-device inference; your prompts never leave the machine. Complete privacy by default.",
    },
    StackLayer {
        title: "Neural Processing Unit",
        detail: "Hardware-accelerated AI inference via dedicated NPU silicon. No GPU dependency, instant response.",
    },
];

const BACKEND_COMMAND: &str = "uvicorn app.main:app --reload";

#[derive(Clone, Copy, Default)]
struct HeroRect {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

#[component]
pub fn LandingView() -> Element {
    let mut page = use_context::<Signal<Page>>();
    let mut boot = use_signal(BootSequence::default);
    let mut mesh = use_signal(|| NeuralMesh::new(&mut OsRng));
    let mut cursor = use_signal(CursorTracker::default);
    let mut cursor_frame = use_signal(|| Option::<CursorFrame>::None);
    let mut pointer = use_signal(|| Option::<(f32, f32)>::None);
    let mut hero_rect = use_signal(HeroRect::default);

    use_future(move || async move {
        while !boot.peek().is_final() {
            tokio::time::sleep(BOOT_STEP).await;
            boot.write().advance();
        }
        tokio::time::sleep(BOOT_FINAL_HOLD).await;
        boot.write().dismiss();
    });

    let frames = use_hook(|| {
        let (handle, mut frames) = frame_loop::start(FRAME_PERIOD);
        spawn(async move {
            while frames.next_frame().await.is_some() {
                let target = *pointer.peek();
                mesh.write().step(target);
                let next = cursor.write().frame();
                if next.is_some() {
                    cursor_frame.set(next);
                }
            }
        });
        handle
    });
    use_effect({
        let frames = frames.clone();
        // paused while the preloader covers the page
        move || frames.set_visible(!boot().is_visible())
    });
    use_drop(move || frames.stop());

    let on_move = move |ev: MouseEvent| {
        let at = ev.client_coordinates();
        cursor.write().pointer_moved(at.x, at.y);
        let rect = hero_rect();
        if rect.width > 0.0 && rect.height > 0.0 {
            let ndc_x = ((at.x - rect.left) / rect.width * 2.0 - 1.0) as f32;
            let ndc_y = (1.0 - (at.y - rect.top) / rect.height * 2.0) as f32;
            pointer.set(Some(pointer_to_world(ndc_x, ndc_y, MESH_VIEW_WIDTH, MESH_VIEW_HEIGHT)));
        }
    };

    let boot_state = boot();

    rsx! {
        div { class: "landing", onmousemove: on_move, onmouseleave: move |_| pointer.set(None),
            if boot_state.is_visible() {
                div { class: "preloader",
                    div { class: "preloader-line", key: "{boot_state.current_line()}",
                        "{boot_state.current_line()}"
                    }
                }
            }
            CustomCursor { frame: cursor_frame() }
            section {
                class: "hero",
                onmounted: move |ev| async move {
                    match ev.get_client_rect().await {
                        Ok(rect) => hero_rect.set(HeroRect {
                            left: rect.origin.x,
                            top: rect.origin.y,
                            width: rect.size.width,
                            height: rect.size.height,
                        }),
                        Err(err) => tracing::debug!(?err, "hero bounds unavailable"),
                    }
                },
                MeshCanvas { mesh }
                div { class: "hero-content",
                    p { class: "eyebrow", "Local-first AI operating system" }
                    h1 { class: "hero-title", "Your second brain. On your hardware." }
                    p { class: "hero-subtitle",
                        "Synapse indexes your documents and tools into private local memory, then answers with the NPU and GPU you already own."
                    }
                    div { class: "hero-actions",
                        CursorTarget { cursor,
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: move |_| page.set(Page::Dashboard),
                                "Open Dashboard"
                            }
                        }
                        CursorTarget { cursor,
                            button {
                                class: "btn",
                                r#type: "button",
                                onclick: move |_| page.set(Page::Auth),
                                "Sign In"
                            }
                        }
                    }
                }
            }
            ComparisonSection {}
            IntegrationsShowcase { cursor }
            TechStackSection {}
            FooterCta { cursor, mesh }
        }
    }
}

/// Wraps interactive children so the cursor dot grows over them.
#[component]
fn CursorTarget(cursor: Signal<CursorTracker>, children: Element) -> Element {
    let mut cursor = cursor;
    rsx! {
        span {
            class: "cursor-target",
            onmouseenter: move |_| cursor.write().set_hovering(true),
            onmouseleave: move |_| cursor.write().set_hovering(false),
            {children}
        }
    }
}

#[component]
fn CustomCursor(frame: Option<CursorFrame>) -> Element {
    let Some(frame) = frame else {
        return rsx! {};
    };
    let arm = CROSSHAIR_LENGTH;
    let offset = DOT_SIZE / 2.0 + 4.0;
    let half_dot = DOT_SIZE / 2.0;
    let scale = frame.line_scale;

    rsx! {
        div { class: "cursor", style: "transform: {frame.container_transform()};",
            div {
                class: "cursor-dot",
                style: "width: {DOT_SIZE}px; height: {DOT_SIZE}px; top: -{half_dot}px; left: -{half_dot}px; transform: scale({frame.dot_scale});",
            }
            div {
                class: "cursor-arm horizontal",
                style: "width: {arm}px; right: {offset}px; transform-origin: right center; transform: scaleX({scale});",
            }
            div {
                class: "cursor-arm horizontal",
                style: "width: {arm}px; left: {offset}px; transform-origin: left center; transform: scaleX({scale});",
            }
            div {
                class: "cursor-arm vertical",
                style: "height: {arm}px; bottom: {offset}px; transform-origin: bottom center; transform: scaleY({scale});",
            }
            div {
                class: "cursor-arm vertical",
                style: "height: {arm}px; top: {offset}px; transform-origin: top center; transform: scaleY({scale});",
            }
        }
    }
}

struct Segment {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    opacity: f32,
}

#[component]
fn MeshCanvas(mesh: Signal<NeuralMesh>) -> Element {
    let (segments, dots) = {
        let mesh = mesh.read();
        let segments: Vec<Segment> = mesh
            .connections()
            .into_iter()
            .map(|link| Segment {
                x1: link.from[0],
                y1: -link.from[1],
                x2: link.to[0],
                y2: -link.to[1],
                opacity: link.alpha * 0.4,
            })
            .collect();
        let dots: Vec<(f32, f32)> = mesh
            .particles()
            .iter()
            .map(|p| (p.position[0], -p.position[1]))
            .collect();
        (segments, dots)
    };
    let view_box = format!(
        "{} {} {} {}",
        -MESH_VIEW_WIDTH / 2.0,
        -MESH_VIEW_HEIGHT / 2.0,
        MESH_VIEW_WIDTH,
        MESH_VIEW_HEIGHT
    );

    rsx! {
        svg {
            class: "mesh",
            view_box: "{view_box}",
            preserve_aspect_ratio: "none",
            for segment in segments.iter() {
                line {
                    x1: "{segment.x1}",
                    y1: "{segment.y1}",
                    x2: "{segment.x2}",
                    y2: "{segment.y2}",
                    style: "stroke-opacity: {segment.opacity}",
                }
            }
            for (x, y) in dots.iter() {
                circle { cx: "{x}", cy: "{y}", r: "0.035" }
            }
        }
    }
}

#[component]
fn ComparisonSection() -> Element {
    rsx! {
        section { class: "comparison",
            p { class: "eyebrow", "Why Synapse" }
            h2 { "The Cost of Fragmented Context" }
            p { class: "text-muted",
                "Stop pasting private data into cloud chat windows. Start owning your intelligence."
            }
            div { class: "comparison-grid",
                div { class: "comparison-head" }
                div { class: "comparison-head", "Cloud AI & OS Search" }
                div { class: "comparison-head", "Synapse" }
                for row in COMPARISON_ROWS {
                    div { class: "comparison-title", "{row.title}" }
                    div { class: "comparison-cell bad", "✕ {row.cloud}" }
                    div { class: "comparison-cell good", "✓ {row.local}" }
                }
            }
        }
    }
}

#[component]
fn IntegrationsShowcase(cursor: Signal<CursorTracker>) -> Element {
    let mut page = use_context::<Signal<Page>>();
    let mut hovered = use_signal(|| Option::<Platform>::None);

    rsx! {
        section { class: "showcase",
            p { class: "eyebrow", "Integrations" }
            h2 { "Pull your world into Synapse" }
            p { class: "text-muted",
                "Connect your platforms and let Synapse ingest PRs, messages, docs, and tickets into local memory. Zero cloud leakage."
            }
            div { class: "showcase-grid",
                for card in SHOWCASE {
                    div {
                        key: "{card.platform.id()}",
                        class: "showcase-card",
                        onmouseenter: move |_| hovered.set(Some(card.platform)),
                        onmouseleave: move |_| hovered.set(None),
                        div { class: "integration-head",
                            h4 { "{card.platform.name()}" }
                            span { class: "status-badge", "{card.tag}" }
                        }
                        p { class: "text-muted", "{card.blurb}" }
                        p { class: "showcase-activity",
                            if hovered() == Some(card.platform) { "{card.activity}" } else { "Ready to connect" }
                        }
                    }
                }
            }
            CursorTarget { cursor,
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| page.set(Page::Dashboard),
                    "Connect Your Tools"
                }
            }
            p { class: "showcase-note", "API keys stay on your machine. Data is pulled, never pushed." }
        }
    }
}

#[component]
fn TechStackSection() -> Element {
    rsx! {
        section { class: "tech-stack",
            p { class: "eyebrow", "Infrastructure" }
            h2 { "Every layer engineered" }
            div { class: "stack-grid",
                for layer in STACK_LAYERS {
                    div { class: "stack-card",
                        h4 { "{layer.title}" }
                        p { class: "stack-detail", "{layer.detail}" }
                    }
                }
            }
            p { class: "stack-footnote", "Fully local · Zero cloud · Your hardware" }
        }
    }
}

#[component]
fn FooterCta(cursor: Signal<CursorTracker>, mesh: Signal<NeuralMesh>) -> Element {
    let mut page = use_context::<Signal<Page>>();
    rsx! {
        footer { class: "footer-cta",
            MeshCanvas { mesh }
            div { class: "footer-content",
                h2 { "Ready to deploy your local AI?" }
                p { class: "text-muted",
                    "Start the backend, open the dashboard, and let Synapse orchestrate your workflow entirely on your machine."
                }
                CursorTarget { cursor,
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| page.set(Page::Dashboard),
                        "Open Dashboard"
                    }
                }
                code { class: "footer-command", "$ {BACKEND_COMMAND}" }
            }
        }
    }
}
