use gloo_storage::{LocalStorage, Storage};
use std::rc::Rc;

use crate::config::AppConfig;

/// Durable key-value storage holding the bearer token
pub trait TokenStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Full-page navigation
pub trait Redirect {
    fn redirect(&self, path: &str);
}

/// Browser localStorage, read and written as raw strings so the value stays
/// interchangeable with anything else on the origin that reads `accessToken`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStorage;

impl TokenStorage for LocalTokenStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            log::error!("Failed to persist token: {:?}", e);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = LocalStorage::raw().remove_item(key) {
            log::error!("Failed to remove token: {:?}", e);
        }
    }
}

/// Navigates by assigning `window.location.href`, dropping all in-page state
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserRedirect;

impl Redirect for BrowserRedirect {
    fn redirect(&self, path: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.location().set_href(path) {
                    log::error!("Failed to navigate to {}: {:?}", path, e);
                }
            }
            None => log::error!("No window available to navigate to {}", path),
        }
    }
}

/// Result of guarding a page load
#[derive(Debug, Clone, PartialEq)]
pub enum SessionGate {
    /// Page may continue; carries the token when one is present
    Proceed { token: Option<String> },
    /// Session was cleared and a redirect issued; stop initializing
    Abort,
}

/// Session context shared by the API client and the views
///
/// Owns the token lifecycle: read on every call, written by the login flow,
/// cleared by logout. Storage and navigation are injected so the guard can be
/// exercised without a browser.
#[derive(Clone)]
pub struct Session {
    config: AppConfig,
    storage: Rc<dyn TokenStorage>,
    redirect: Rc<dyn Redirect>,
}

impl Session {
    pub fn new(config: AppConfig, storage: Rc<dyn TokenStorage>, redirect: Rc<dyn Redirect>) -> Self {
        Self {
            config,
            storage,
            redirect,
        }
    }

    /// Session backed by localStorage and `window.location`
    pub fn browser(config: AppConfig) -> Self {
        Self::new(config, Rc::new(LocalTokenStorage), Rc::new(BrowserRedirect))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn get_token(&self) -> Option<String> {
        self.storage
            .get(&self.config.token_key)
            .filter(|t| !t.is_empty())
    }

    pub fn store_token(&self, token: &str) {
        self.storage.set(&self.config.token_key, token);
    }

    /// Admin area, excluding the login page itself
    pub fn is_protected_path(&self, path: &str) -> bool {
        path.contains(&self.config.admin_path) && !path.contains("/login")
    }

    pub fn require_session(&self, current_path: &str) -> SessionGate {
        let token = self.get_token();
        if self.is_protected_path(current_path) && token.is_none() {
            log::info!("No session for {}, redirecting to login", current_path);
            self.logout();
            return SessionGate::Abort;
        }
        SessionGate::Proceed { token }
    }

    /// Clear the token and go to the login page. Safe to call repeatedly.
    pub fn logout(&self) {
        self.storage.remove(&self.config.token_key);
        self.redirect.redirect(&self.config.login_path);
    }

    /// Leave the login page for the admin area
    pub fn enter_admin(&self) {
        self.redirect.redirect(&self.config.admin_path);
    }
}

#[cfg(test)]
pub mod fakes {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MemoryTokenStorage {
        values: RefCell<HashMap<String, String>>,
    }

    impl MemoryTokenStorage {
        pub fn with_token(key: &str, token: &str) -> Self {
            let storage = Self::default();
            storage.set(key, token);
            storage
        }

        pub fn value(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
    }

    impl TokenStorage for MemoryTokenStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.value(key)
        }

        fn set(&self, key: &str, value: &str) {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.values.borrow_mut().remove(key);
        }
    }

    #[derive(Default)]
    pub struct RecordingRedirect {
        visits: RefCell<Vec<String>>,
    }

    impl RecordingRedirect {
        pub fn visits(&self) -> Vec<String> {
            self.visits.borrow().clone()
        }
    }

    impl Redirect for RecordingRedirect {
        fn redirect(&self, path: &str) {
            self.visits.borrow_mut().push(path.to_string());
        }
    }

    /// Session over in-memory fakes, optionally holding `token`
    pub fn session_with(token: Option<&str>) -> (Session, Rc<MemoryTokenStorage>, Rc<RecordingRedirect>) {
        let config = AppConfig::default();
        let storage = Rc::new(match token {
            Some(t) => MemoryTokenStorage::with_token(&config.token_key, t),
            None => MemoryTokenStorage::default(),
        });
        let redirect = Rc::new(RecordingRedirect::default());
        let session = Session::new(config, storage.clone(), redirect.clone());
        (session, storage, redirect)
    }
}
