use crate::state::auth::AuthFieldError;
use crate::state::{AuthForm, AuthMode};
use crate::ui::Page;
use dioxus::prelude::*;

#[component]
pub fn AuthView() -> Element {
    let mut page = use_context::<Signal<Page>>();
    let mut auth = use_signal(AuthForm::default);
    let mut errors = use_signal(Vec::<AuthFieldError>::new);

    let snapshot = auth();
    let error_list = errors();
    let mode = snapshot.mode;
    let slide_class = if snapshot.direction > 0 { "slide-left" } else { "slide-right" };
    let password_type = if snapshot.show_password { "text" } else { "password" };

    rsx! {
        div { class: "auth-page",
            button { class: "btn-ghost auth-back", r#type: "button",
                onclick: move |_| page.set(Page::Landing),
                "← Back"
            }
            div { class: "auth-card",
                div { class: "auth-tabs",
                    for tab in [AuthMode::Login, AuthMode::Signup] {
                        button {
                            class: format_args!("auth-tab {}", if tab == mode { "active" } else { "" }),
                            r#type: "button",
                            onclick: move |_| {
                                auth.write().switch_mode(tab);
                                errors.write().clear();
                            },
                            "{tab.tab_label()}"
                        }
                    }
                }
                form {
                    key: "{mode.tab_label()}",
                    class: "auth-form {slide_class}",
                    onsubmit: move |ev| {
                        ev.prevent_default();
                        match auth.read().submit() {
                            Ok(()) => errors.write().clear(),
                            Err(found) => errors.set(found),
                        }
                    },
                    h2 { "{mode.heading()}" }
                    p { class: "text-muted", "{mode.subheading()}" }
                    if mode == AuthMode::Signup {
                        label { class: "field",
                            span { "Full name" }
                            input {
                                r#type: "text",
                                placeholder: "John Doe",
                                value: "{snapshot.name}",
                                oninput: move |ev| auth.write().name = ev.value(),
                            }
                        }
                    }
                    label { class: "field",
                        span { "Email" }
                        input {
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{snapshot.email}",
                            oninput: move |ev| auth.write().email = ev.value(),
                        }
                    }
                    label { class: "field",
                        span { "Password" }
                        div { class: "key-input",
                            input {
                                r#type: password_type,
                                placeholder: "••••••••",
                                value: "{snapshot.password}",
                                oninput: move |ev| auth.write().password = ev.value(),
                            }
                            button {
                                class: "btn-ghost",
                                r#type: "button",
                                onclick: move |_| auth.write().toggle_password(),
                                if snapshot.show_password { "Hide" } else { "Show" }
                            }
                        }
                    }
                    if !error_list.is_empty() {
                        ul { class: "field-errors",
                            for error in error_list.iter() {
                                li { "{error.message()}" }
                            }
                        }
                    }
                    button { class: "btn btn-primary", r#type: "submit",
                        if mode == AuthMode::Login { "Sign In" } else { "Create Account" }
                    }
                }
            }
        }
    }
}
