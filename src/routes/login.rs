use dioxus::prelude::*;
use std::rc::Rc;

use crate::i18n::Locale;
use crate::services::http::BrowserTransport;
use crate::stores::login::LoginController;
use crate::stores::session::Session;

#[component]
pub fn Login() -> Element {
    let session = use_context::<Session>();
    let strings = use_context::<Locale>().strings();
    let revision = use_signal(|| 0u64);

    let controller: LoginController<BrowserTransport> = use_hook(|| {
        let notify: Rc<dyn Fn()> = Rc::new(move || {
            let mut revision = revision;
            *revision.write() += 1;
        });
        LoginController::new(Rc::new(BrowserTransport), session.clone(), strings, notify)
    });

    let _ = revision.read();
    let state = controller.snapshot();

    let on_username = {
        let controller = controller.clone();
        move |e: FormEvent| controller.set_username(e.value())
    };
    let on_password = {
        let controller = controller.clone();
        move |e: FormEvent| controller.set_password(e.value())
    };
    let on_submit = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let controller = controller.clone();
            spawn(async move {
                controller.submit().await;
            });
        }
    };

    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-background p-4",
            form {
                id: "login-form",
                class: "w-full max-w-sm p-6 border border-border rounded-xl grid gap-4",
                onsubmit: on_submit,

                h1 { class: "text-2xl font-bold", "{strings.login_title}" }

                label {
                    class: "flex flex-col gap-1",
                    span { class: "text-sm text-muted-foreground", "{strings.username}" }
                    input {
                        id: "username",
                        class: "px-3 py-2 border border-border rounded-lg bg-background",
                        r#type: "text",
                        autocomplete: "username",
                        value: "{state.username}",
                        oninput: on_username,
                    }
                }

                label {
                    class: "flex flex-col gap-1",
                    span { class: "text-sm text-muted-foreground", "{strings.password}" }
                    input {
                        id: "password",
                        class: "px-3 py-2 border border-border rounded-lg bg-background",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: "{state.password}",
                        oninput: on_password,
                    }
                }

                if let Some(message) = state.error.clone() {
                    p {
                        id: "error-message",
                        class: "text-sm text-destructive",
                        "{message}"
                    }
                }

                button {
                    r#type: "submit",
                    class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition disabled:opacity-50",
                    disabled: state.submitting,
                    "{strings.login_submit}"
                }
            }
        }
    }
}
