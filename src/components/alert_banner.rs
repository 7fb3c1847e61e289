use dioxus::prelude::*;

/// Dismissible error banner shown above the wallet list
#[component]
pub fn AlertBanner(message: String, dismiss_text: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between gap-4 p-4 mb-4 rounded-lg bg-destructive/10 text-destructive",
            role: "alert",
            span { "{message}" }
            button {
                class: "px-3 py-1 rounded-lg hover:bg-destructive/20 transition",
                onclick: move |_| on_dismiss.call(()),
                "{dismiss_text}"
            }
        }
    }
}
