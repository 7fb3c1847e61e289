use dioxus::prelude::*;
use std::rc::Rc;

use crate::components::{AlertBanner, ConfirmHost, ModalConfirm, PendingConfirm, WalletFormPanel, WalletTable};
use crate::i18n::Locale;
use crate::routes::Route;
use crate::services::http::BrowserTransport;
use crate::services::wallet_api::WalletApi;
use crate::stores::dashboard::{DashboardController, FormField, RowAction, RowActionKind};
use crate::stores::session::{Session, SessionGate};
use crate::utils::dom;

type BrowserDashboard = DashboardController<WalletApi<BrowserTransport>, ModalConfirm>;

#[component]
pub fn Dashboard() -> Element {
    let session = use_context::<Session>();
    let strings = use_context::<Locale>().strings();
    let route = use_route::<Route>();

    // Guard runs once per mount, before any request is issued
    let gate = use_hook(|| session.require_session(&route.to_string()));

    let revision = use_signal(|| 0u64);
    let pending = use_signal(|| None::<PendingConfirm>);

    let controller: BrowserDashboard = use_hook(|| {
        let api = Rc::new(WalletApi::new(Rc::new(BrowserTransport), session.clone()));
        let notify: Rc<dyn Fn()> = Rc::new(move || {
            let mut revision = revision;
            *revision.write() += 1;
        });
        DashboardController::new(api, Rc::new(ModalConfirm::new(pending)), session.clone(), strings, notify)
    });

    let proceed = matches!(gate, SessionGate::Proceed { .. });

    use_effect({
        let controller = controller.clone();
        move || {
            if proceed {
                let controller = controller.clone();
                spawn(async move {
                    controller.refresh().await;
                });
            }
        }
    });

    if !proceed {
        return rsx! {};
    }

    // Subscribe to controller changes
    let _ = revision.read();
    let state = controller.snapshot();

    let on_action = {
        let controller = controller.clone();
        move |action: RowAction| match action.kind {
            RowActionKind::Edit => {
                if controller.on_edit_request(action.id) {
                    dom::scroll_to_form();
                }
            }
            RowActionKind::Delete => {
                let controller = controller.clone();
                spawn(async move {
                    controller.on_delete_request(action.id).await;
                });
            }
        }
    };
    let on_input = {
        let controller = controller.clone();
        move |(field, value): (FormField, String)| controller.set_field(field, value)
    };
    let on_submit = {
        let controller = controller.clone();
        move |_: ()| {
            let controller = controller.clone();
            spawn(async move {
                controller.on_submit().await;
            });
        }
    };
    let on_cancel = {
        let controller = controller.clone();
        move |_: ()| controller.enter_create_mode()
    };
    let on_dismiss = {
        let controller = controller.clone();
        move |_: ()| controller.dismiss_alert()
    };
    let on_logout = {
        let controller = controller.clone();
        move |_: MouseEvent| controller.logout()
    };

    rsx! {
        div {
            class: "min-h-screen bg-background",
            div {
                class: "max-w-5xl mx-auto p-6",

                header {
                    class: "flex items-center justify-between mb-6",
                    h1 { class: "text-2xl font-bold", "{strings.dashboard_title}" }
                    button {
                        id: "logout-btn",
                        class: "px-4 py-2 rounded-lg hover:bg-accent transition",
                        onclick: on_logout,
                        "{strings.logout}"
                    }
                }

                if let Some(message) = state.alert.clone() {
                    AlertBanner {
                        message,
                        dismiss_text: strings.dismiss.to_string(),
                        on_dismiss,
                    }
                }

                WalletTable {
                    rows: state.rows.clone(),
                    strings,
                    on_action,
                }

                WalletFormPanel {
                    form: state.form.clone(),
                    mode: state.mode,
                    title: state.form_title,
                    submit_label: state.submit_label,
                    error: state.form_error.clone(),
                    submitting: state.submitting,
                    strings,
                    on_input,
                    on_submit,
                    on_cancel,
                }
            }

            ConfirmHost {
                pending,
                title: strings.confirm_delete_title.to_string(),
                confirm_text: strings.delete.to_string(),
                cancel_text: strings.cancel.to_string(),
            }
        }
    }
}
