//! Dashboard view controller
//!
//! Headless state machine behind the wallet admin page. The form is either in
//! `Create` or `Edit(id)` mode; every successful mutation re-reads the list
//! from the server and replaces the cache wholesale. Components render from
//! `snapshot()` and get told to re-render through the `on_change` callback.

use async_trait::async_trait;
use std::cell::RefCell;
use std::rc::Rc;

use crate::i18n::Strings;
use crate::services::error::ApiError;
use crate::services::wallet_api::{Wallet, WalletId, WalletPayload, WalletRepository};
use crate::stores::session::Session;
use crate::stores::wallet_cache::WalletCache;

/// Asks the user to confirm a destructive action
#[async_trait(?Send)]
pub trait Confirm {
    async fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(WalletId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Address,
    BotToken,
    ChatId,
    NotificationUrl,
    NotificationApiKey,
}

/// Current input values of the wallet form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletForm {
    pub name: String,
    pub address: String,
    pub bot_token: String,
    pub chat_id: String,
    pub notification_url: String,
    pub notification_api_key: String,
}

impl WalletForm {
    pub fn from_wallet(wallet: &Wallet) -> Self {
        Self {
            name: wallet.name.clone(),
            address: wallet.address.clone(),
            bot_token: wallet.bot_token.clone(),
            chat_id: wallet.chat_id.clone(),
            notification_url: wallet.notification_url.clone().unwrap_or_default(),
            notification_api_key: wallet.notification_api_key.clone().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Address => self.address = value,
            FormField::BotToken => self.bot_token = value,
            FormField::ChatId => self.chat_id = value,
            FormField::NotificationUrl => self.notification_url = value,
            FormField::NotificationApiKey => self.notification_api_key = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Address => &self.address,
            FormField::BotToken => &self.bot_token,
            FormField::ChatId => &self.chat_id,
            FormField::NotificationUrl => &self.notification_url,
            FormField::NotificationApiKey => &self.notification_api_key,
        }
    }

    pub fn to_payload(&self) -> WalletPayload {
        WalletPayload {
            name: self.name.clone(),
            address: self.address.clone(),
            bot_token: self.bot_token.clone(),
            chat_id: self.chat_id.clone(),
            notification_url: self.notification_url.clone(),
            notification_api_key: self.notification_api_key.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowActionKind {
    Edit,
    Delete,
}

/// A button on a table row, tagged with the wallet it acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowAction {
    pub kind: RowActionKind,
    pub id: WalletId,
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq)]
pub struct WalletRow {
    pub id: WalletId,
    pub name: String,
    pub address: String,
    pub bot_token: String,
    pub chat_id: String,
    pub actions: [RowAction; 2],
}

impl WalletRow {
    fn from_wallet(wallet: &Wallet) -> Self {
        Self {
            id: wallet.id,
            name: wallet.name.clone(),
            address: wallet.address.clone(),
            bot_token: wallet.bot_token.clone(),
            chat_id: wallet.chat_id.clone(),
            actions: [
                RowAction { kind: RowActionKind::Edit, id: wallet.id },
                RowAction { kind: RowActionKind::Delete, id: wallet.id },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub mode: FormMode,
    pub form: WalletForm,
    pub form_title: &'static str,
    pub submit_label: &'static str,
    pub form_error: Option<String>,
    pub rows: Vec<WalletRow>,
    pub alert: Option<String>,
    pub submitting: bool,
    pub cache: WalletCache,
}

impl DashboardState {
    fn new(strings: &'static Strings) -> Self {
        Self {
            mode: FormMode::Create,
            form: WalletForm::default(),
            form_title: strings.create_title,
            submit_label: strings.create_submit,
            form_error: None,
            rows: Vec::new(),
            alert: None,
            submitting: false,
            cache: WalletCache::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved,
    Rejected(String),
    /// A submit is already in flight
    Busy,
    SessionEnded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Deleted,
    Failed,
    SessionEnded,
}

pub struct DashboardController<R: WalletRepository, C: Confirm> {
    repo: Rc<R>,
    confirm: Rc<C>,
    session: Session,
    strings: &'static Strings,
    state: Rc<RefCell<DashboardState>>,
    on_change: Rc<dyn Fn()>,
}

impl<R: WalletRepository, C: Confirm> Clone for DashboardController<R, C> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            confirm: self.confirm.clone(),
            session: self.session.clone(),
            strings: self.strings,
            state: self.state.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<R: WalletRepository, C: Confirm> DashboardController<R, C> {
    pub fn new(
        repo: Rc<R>,
        confirm: Rc<C>,
        session: Session,
        strings: &'static Strings,
        on_change: Rc<dyn Fn()>,
    ) -> Self {
        Self {
            repo,
            confirm,
            session,
            strings,
            state: Rc::new(RefCell::new(DashboardState::new(strings))),
            on_change,
        }
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    fn mutate(&self, f: impl FnOnce(&mut DashboardState)) {
        f(&mut self.state.borrow_mut());
        (self.on_change)();
    }

    pub fn set_field(&self, field: FormField, value: String) {
        self.mutate(|s| s.form.set(field, value));
    }

    /// Replace the rendered rows with `wallets`, in order
    pub fn render_list(&self, wallets: &[Wallet]) {
        let rows = wallets.iter().map(WalletRow::from_wallet).collect();
        self.mutate(|s| s.rows = rows);
    }

    pub fn enter_create_mode(&self) {
        let strings = self.strings;
        self.mutate(|s| {
            s.mode = FormMode::Create;
            s.form = WalletForm::default();
            s.form_error = None;
            s.form_title = strings.create_title;
            s.submit_label = strings.create_submit;
        });
    }

    pub fn enter_edit_mode(&self, wallet: &Wallet) {
        let strings = self.strings;
        let form = WalletForm::from_wallet(wallet);
        self.mutate(|s| {
            s.mode = FormMode::Edit(wallet.id);
            s.form = form;
            s.form_error = None;
            s.form_title = strings.edit_title;
            s.submit_label = strings.edit_submit;
        });
    }

    /// Look `id` up in the cache and load it into the form. Returns whether it
    /// was found, so the caller can scroll the form into view.
    pub fn on_edit_request(&self, id: WalletId) -> bool {
        let wallet = self.state.borrow().cache.find(id).cloned();
        match wallet {
            Some(wallet) => {
                self.enter_edit_mode(&wallet);
                true
            }
            None => {
                log::warn!("Edit requested for unknown wallet {}", id);
                false
            }
        }
    }

    pub async fn on_submit(&self) -> SubmitOutcome {
        let (mode, payload) = {
            let mut state = self.state.borrow_mut();
            if state.submitting {
                return SubmitOutcome::Busy;
            }
            state.submitting = true;
            (state.mode, state.form.to_payload())
        };
        (self.on_change)();

        let result = match mode {
            FormMode::Edit(id) => self.repo.update(id, &payload).await,
            FormMode::Create => self.repo.create(&payload).await,
        };

        self.mutate(|s| s.submitting = false);

        let error = match result {
            Ok(response) if response.ok() => {
                log::info!("Wallet saved ({:?})", mode);
                self.enter_create_mode();
                self.refresh().await;
                return SubmitOutcome::Saved;
            }
            Ok(response) => ApiError::ValidationFailed(response.error_message()),
            Err(ApiError::AuthExpired) => return SubmitOutcome::SessionEnded,
            Err(e) => e,
        };
        log::warn!("Failed to save wallet: {}", error);

        let message = match error {
            ApiError::ValidationFailed(Some(msg)) => msg,
            _ => self.strings.operation_failed.to_string(),
        };
        let shown = message.clone();
        self.mutate(|s| s.form_error = Some(shown));
        SubmitOutcome::Rejected(message)
    }

    pub async fn on_delete_request(&self, id: WalletId) -> DeleteOutcome {
        if !self.confirm.confirm(self.strings.confirm_delete).await {
            return DeleteOutcome::Declined;
        }

        let error = match self.repo.delete(id).await {
            Ok(true) => {
                log::info!("Deleted wallet {}", id);
                self.refresh().await;
                return DeleteOutcome::Deleted;
            }
            Ok(false) => ApiError::DeletionFailed,
            Err(ApiError::AuthExpired) => return DeleteOutcome::SessionEnded,
            Err(e) => e,
        };
        log::error!("Failed to delete wallet {}: {}", id, error);

        let message = self.strings.delete_failed.to_string();
        self.mutate(|s| s.alert = Some(message));
        DeleteOutcome::Failed
    }

    /// Re-read the list and repaint. Failures are only logged.
    pub async fn refresh(&self) {
        match self.repo.list().await {
            Ok(wallets) => {
                self.render_list(&wallets);
                self.mutate(|s| s.cache.replace(wallets));
            }
            Err(ApiError::AuthExpired) => {}
            Err(e) => log::error!("Failed to refresh wallets: {}", e),
        }
    }

    pub fn dismiss_alert(&self) {
        self.mutate(|s| s.alert = None);
    }

    pub fn logout(&self) {
        self.session.logout();
    }
}
