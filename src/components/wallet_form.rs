use dioxus::prelude::*;

use crate::i18n::Strings;
use crate::stores::dashboard::{FormField, FormMode, WalletForm};

/// Inputs in display order. None are marked required; the server validates.
fn form_fields(strings: &'static Strings) -> [(FormField, &'static str); 6] {
    [
        (FormField::Name, strings.col_name),
        (FormField::Address, strings.col_address),
        (FormField::BotToken, strings.col_bot_token),
        (FormField::ChatId, strings.col_chat_id),
        (FormField::NotificationUrl, strings.field_notification_url),
        (FormField::NotificationApiKey, strings.field_notification_api_key),
    ]
}

/// Create/edit form for a single wallet
#[component]
pub fn WalletFormPanel(
    form: WalletForm,
    mode: FormMode,
    title: &'static str,
    submit_label: &'static str,
    error: Option<String>,
    submitting: bool,
    strings: &'static Strings,
    on_input: EventHandler<(FormField, String)>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let fields = form_fields(strings);

    rsx! {
        section {
            id: "wallet-form",
            class: "mt-8 p-6 border border-border rounded-xl",
            h2 {
                id: "form-title",
                class: "text-xl font-bold mb-4",
                "{title}"
            }
            form {
                id: "add-wallet-form",
                class: "grid gap-4",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                for (field, caption) in fields {
                    label {
                        key: "{caption}",
                        class: "flex flex-col gap-1",
                        span { class: "text-sm text-muted-foreground", "{caption}" }
                        input {
                            class: "px-3 py-2 border border-border rounded-lg bg-background",
                            r#type: if field == FormField::NotificationApiKey { "password" } else { "text" },
                            value: form.get(field).to_string(),
                            oninput: move |e| on_input.call((field, e.value())),
                        }
                    }
                }
                if let Some(message) = error {
                    p {
                        id: "form-error",
                        class: "text-sm text-destructive",
                        "{message}"
                    }
                }
                div {
                    class: "flex gap-3 justify-end",
                    if matches!(mode, FormMode::Edit(_)) {
                        button {
                            r#type: "button",
                            class: "px-4 py-2 rounded-lg hover:bg-accent transition",
                            onclick: move |_| on_cancel.call(()),
                            "{strings.cancel}"
                        }
                    }
                    button {
                        id: "form-submit-btn",
                        r#type: "submit",
                        class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition disabled:opacity-50",
                        disabled: submitting,
                        "{submit_label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn test_every_payload_field_has_an_input() {
        let fields = form_fields(Locale::En.strings());
        let order: Vec<FormField> = fields.iter().map(|(f, _)| *f).collect();
        assert_eq!(
            order,
            vec![
                FormField::Name,
                FormField::Address,
                FormField::BotToken,
                FormField::ChatId,
                FormField::NotificationUrl,
                FormField::NotificationApiKey,
            ]
        );

        // Blank inputs still produce a submittable payload
        let blank = WalletForm::default();
        for (field, _) in fields {
            assert_eq!(blank.get(field), "");
        }
        assert_eq!(fields[4].1, "Notification URL");
    }
}
