use async_trait::async_trait;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tokio::sync::oneshot;

use crate::stores::dashboard::Confirm;

/// Localized yes/no dialog over a dimmed page
#[component]
pub fn ConfirmModal(
    title: String,
    message: String,
    confirm_text: String,
    cancel_text: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        // Clicking the overlay cancels
        div {
            class: "fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "bg-card border border-border rounded-xl max-w-sm w-full p-6 shadow-xl",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "confirm-title",
                aria_describedby: "confirm-message",
                onclick: move |e| e.stop_propagation(),

                h2 {
                    class: "text-lg font-bold mb-2",
                    id: "confirm-title",
                    "{title}"
                }

                p {
                    class: "text-muted-foreground mb-6",
                    id: "confirm-message",
                    "{message}"
                }

                div {
                    class: "flex gap-3 justify-end",

                    button {
                        class: "px-4 py-2 rounded-lg hover:bg-accent transition",
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_text}"
                    }

                    // Destructive style
                    button {
                        class: "px-4 py-2 bg-destructive text-destructive-foreground rounded-lg hover:bg-destructive/90 transition",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_text}"
                    }
                }
            }
        }
    }
}

/// A question waiting on the modal, with the channel its answer goes back on
#[derive(Clone)]
pub struct PendingConfirm {
    pub message: String,
    reply: Rc<RefCell<Option<oneshot::Sender<bool>>>>,
}

impl PendingConfirm {
    pub fn new(message: String, reply: oneshot::Sender<bool>) -> Self {
        Self {
            message,
            reply: Rc::new(RefCell::new(Some(reply))),
        }
    }

    /// Send the answer. Only the first call has any effect.
    pub fn resolve(&self, answer: bool) {
        if let Some(tx) = self.reply.borrow_mut().take() {
            let _ = tx.send(answer);
        }
    }
}

/// `Confirm` implementation that shows `ConfirmHost` and waits for a click
#[derive(Clone, Copy)]
pub struct ModalConfirm {
    pending: Signal<Option<PendingConfirm>>,
}

impl ModalConfirm {
    pub fn new(pending: Signal<Option<PendingConfirm>>) -> Self {
        Self { pending }
    }
}

#[async_trait(?Send)]
impl Confirm for ModalConfirm {
    async fn confirm(&self, message: &str) -> bool {
        let (tx, rx) = oneshot::channel();
        let mut pending = self.pending;
        pending.set(Some(PendingConfirm::new(message.to_string(), tx)));

        // A dropped sender (modal torn down) counts as "no"
        let answer = rx.await.unwrap_or(false);
        pending.set(None);
        answer
    }
}

/// Renders the modal while a confirmation is pending
#[component]
pub fn ConfirmHost(
    pending: Signal<Option<PendingConfirm>>,
    title: String,
    confirm_text: String,
    cancel_text: String,
) -> Element {
    let Some(current) = pending.read().clone() else {
        return rsx! {};
    };
    let on_yes = current.clone();
    let on_no = current.clone();

    rsx! {
        ConfirmModal {
            title: title,
            message: current.message.clone(),
            confirm_text: confirm_text,
            cancel_text: cancel_text,
            on_confirm: move |_| on_yes.resolve(true),
            on_cancel: move |_| on_no.resolve(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_resolve_delivers_answer() {
        let (tx, rx) = oneshot::channel();
        let pending = PendingConfirm::new("delete?".to_string(), tx);
        pending.resolve(true);
        assert_eq!(block_on(rx), Ok(true));
    }

    #[test]
    fn test_only_first_answer_counts() {
        let (tx, rx) = oneshot::channel();
        let pending = PendingConfirm::new("delete?".to_string(), tx);
        let clone = pending.clone();
        pending.resolve(false);
        clone.resolve(true);
        assert_eq!(block_on(rx), Ok(false));
    }

    #[test]
    fn test_dropped_prompt_reads_as_error() {
        let (tx, rx) = oneshot::channel::<bool>();
        drop(PendingConfirm::new("delete?".to_string(), tx));
        assert!(block_on(rx).is_err());
    }
}
