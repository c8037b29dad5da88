use crate::state::{Toast, ToastKind};
use crate::views::shared::use_toasts;
use dioxus::prelude::*;

#[component]
pub fn ToastStack() -> Element {
    let toasts = use_toasts();
    let snapshot = toasts();

    rsx! {
        div { class: "toast-stack",
            for toast in snapshot.iter() {
                ToastCard { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;
    let class = match toast.kind {
        ToastKind::Success => "toast success",
        ToastKind::Error => "toast error",
    };

    rsx! {
        div { class: class, onclick: move |_| toasts.write().dismiss(id),
            div { class: "toast-title", "{toast.title}" }
            if !toast.description.is_empty() {
                div { class: "toast-description", "{toast.description}" }
            }
        }
    }
}
