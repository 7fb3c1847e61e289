use std::cell::RefCell;
use std::rc::Rc;

use crate::i18n::Strings;
use crate::services::auth_api;
use crate::services::http::HttpTransport;
use crate::stores::session::Session;

/// Login form state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub error: Option<String>,
    pub submitting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn,
    Rejected,
    Busy,
}

pub struct LoginController<T: HttpTransport> {
    transport: Rc<T>,
    session: Session,
    strings: &'static Strings,
    state: Rc<RefCell<LoginState>>,
    on_change: Rc<dyn Fn()>,
}

impl<T: HttpTransport> Clone for LoginController<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            session: self.session.clone(),
            strings: self.strings,
            state: self.state.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<T: HttpTransport> LoginController<T> {
    pub fn new(transport: Rc<T>, session: Session, strings: &'static Strings, on_change: Rc<dyn Fn()>) -> Self {
        Self {
            transport,
            session,
            strings,
            state: Rc::new(RefCell::new(LoginState::default())),
            on_change,
        }
    }

    pub fn snapshot(&self) -> LoginState {
        self.state.borrow().clone()
    }

    fn mutate(&self, f: impl FnOnce(&mut LoginState)) {
        f(&mut self.state.borrow_mut());
        (self.on_change)();
    }

    pub fn set_username(&self, value: String) {
        self.mutate(|s| s.username = value);
    }

    pub fn set_password(&self, value: String) {
        self.mutate(|s| s.password = value);
    }

    /// Exchange the entered credentials for a token. On success the token is
    /// persisted and the page moves to the admin area; on failure the fields
    /// are left as typed.
    pub async fn submit(&self) -> LoginOutcome {
        let (username, password) = {
            let mut state = self.state.borrow_mut();
            if state.submitting {
                return LoginOutcome::Busy;
            }
            state.submitting = true;
            (state.username.clone(), state.password.clone())
        };
        (self.on_change)();

        let result = auth_api::login(self.transport.as_ref(), self.session.config(), &username, &password).await;

        match result {
            Ok(token) => {
                log::info!("Logged in as {}", username);
                self.session.store_token(&token);
                self.mutate(|s| {
                    s.submitting = false;
                    s.error = None;
                });
                self.session.enter_admin();
                LoginOutcome::LoggedIn
            }
            Err(e) => {
                log::warn!("Login failed: {}", e);
                let message = self.strings.credentials_invalid.to_string();
                self.mutate(|s| {
                    s.submitting = false;
                    s.error = Some(message);
                });
                LoginOutcome::Rejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::services::http::mock::MockTransport;
    use crate::stores::session::fakes::session_with;
    use futures::executor::block_on;

    fn controller(transport: Rc<MockTransport>, session: Session) -> LoginController<MockTransport> {
        LoginController::new(transport, session, Locale::Ko.strings(), Rc::new(|| {}))
    }

    #[test]
    fn test_successful_login_stores_token_and_redirects() {
        let (session, storage, redirect) = session_with(None);
        let transport = Rc::new(MockTransport::new());
        transport.respond(200, r#"{"access_token":"jwt-1"}"#);

        let login = controller(transport, session);
        login.set_username("admin".to_string());
        login.set_password("secret".to_string());

        assert_eq!(block_on(login.submit()), LoginOutcome::LoggedIn);
        assert_eq!(storage.value("accessToken").as_deref(), Some("jwt-1"));
        assert_eq!(redirect.visits(), vec!["/admin".to_string()]);
    }

    #[test]
    fn test_rejected_login_keeps_fields() {
        let (session, storage, redirect) = session_with(None);
        let transport = Rc::new(MockTransport::new());
        transport.respond(401, r#"{"msg":"Bad username or password"}"#);

        let login = controller(transport, session);
        login.set_username("admin".to_string());
        login.set_password("wrong".to_string());

        assert_eq!(block_on(login.submit()), LoginOutcome::Rejected);
        let state = login.snapshot();
        assert_eq!(state.error.as_deref(), Some("아이디 또는 비밀번호가 잘못되었습니다."));
        assert_eq!(state.username, "admin");
        assert_eq!(state.password, "wrong");
        assert!(!state.submitting);
        assert_eq!(storage.value("accessToken"), None);
        assert!(redirect.visits().is_empty());
    }

    #[test]
    fn test_transport_failure_is_rejected() {
        let (session, _, _) = session_with(None);
        let transport = Rc::new(MockTransport::new());
        transport.fail("offline");

        let login = controller(transport, session);
        assert_eq!(block_on(login.submit()), LoginOutcome::Rejected);
        assert!(login.snapshot().error.is_some());
    }

    #[test]
    fn test_double_submit_is_busy() {
        let (session, _, _) = session_with(None);
        let transport = Rc::new(MockTransport::new());
        let login = controller(transport.clone(), session);
        login.state.borrow_mut().submitting = true;

        assert_eq!(block_on(login.submit()), LoginOutcome::Busy);
        assert_eq!(transport.request_count(), 0);
    }
}
