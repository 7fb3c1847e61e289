use dioxus::prelude::*;

use crate::i18n::Strings;
use crate::stores::dashboard::{RowAction, RowActionKind, WalletRow};

/// Wallet list, one row per record, rebuilt from `rows` on every render
#[component]
pub fn WalletTable(
    rows: Vec<WalletRow>,
    strings: &'static Strings,
    on_action: EventHandler<RowAction>,
) -> Element {
    rsx! {
        div {
            class: "overflow-x-auto border border-border rounded-xl",
            table {
                class: "w-full text-sm",
                thead {
                    class: "bg-muted text-left",
                    tr {
                        th { class: "px-4 py-2", "{strings.col_name}" }
                        th { class: "px-4 py-2", "{strings.col_address}" }
                        th { class: "px-4 py-2", "{strings.col_bot_token}" }
                        th { class: "px-4 py-2", "{strings.col_chat_id}" }
                        th { class: "px-4 py-2", "{strings.col_actions}" }
                    }
                }
                tbody {
                    id: "wallet-list",
                    if rows.is_empty() {
                        tr {
                            td {
                                class: "px-4 py-6 text-center text-muted-foreground",
                                colspan: "5",
                                "{strings.empty_list}"
                            }
                        }
                    }
                    for row in rows {
                        tr {
                            key: "{row.id}",
                            class: "border-t border-border",
                            td { class: "px-4 py-2", "{row.name}" }
                            td { class: "px-4 py-2 font-mono break-all", "{row.address}" }
                            td { class: "px-4 py-2 font-mono break-all", "{row.bot_token}" }
                            td { class: "px-4 py-2", "{row.chat_id}" }
                            td {
                                class: "px-4 py-2 whitespace-nowrap",
                                for action in row.actions {
                                    RowButton {
                                        action,
                                        label: match action.kind {
                                            RowActionKind::Edit => strings.edit,
                                            RowActionKind::Delete => strings.delete,
                                        },
                                        on_action,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RowButton(action: RowAction, label: &'static str, on_action: EventHandler<RowAction>) -> Element {
    let class = match action.kind {
        RowActionKind::Edit => "edit-btn px-3 py-1 mr-2 rounded-lg hover:bg-accent transition",
        RowActionKind::Delete => "delete-btn px-3 py-1 rounded-lg text-destructive hover:bg-destructive/10 transition",
    };

    rsx! {
        button {
            class,
            r#type: "button",
            "data-id": "{action.id}",
            onclick: move |_| on_action.call(action),
            "{label}"
        }
    }
}
