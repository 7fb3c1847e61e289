//! Wallet CRUD client for `/api/wallets`
//!
//! Every call goes through `WalletApi::send`, which attaches the bearer token
//! and runs the response through `AuthInterceptor`. A 401 anywhere ends the
//! session there, before the body is looked at.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::services::error::ApiError;
use crate::services::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::stores::session::Session;

pub type WalletId = i64;

/// Wallet record as returned by `GET /api/wallets`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wallet {
    pub id: WalletId,
    pub name: String,
    pub address: String,
    pub bot_token: String,
    pub chat_id: String,
    #[serde(default)]
    pub notification_url: Option<String>,
    #[serde(default)]
    pub notification_api_key: Option<String>,
}

/// Body of POST/PUT requests
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WalletPayload {
    pub name: String,
    pub address: String,
    pub bot_token: String,
    pub chat_id: String,
    pub notification_url: String,
    pub notification_api_key: String,
}

/// Server-side wallet collection, as seen by the dashboard
#[async_trait(?Send)]
pub trait WalletRepository {
    async fn list(&self) -> Result<Vec<Wallet>, ApiError>;
    async fn create(&self, payload: &WalletPayload) -> Result<HttpResponse, ApiError>;
    async fn update(&self, id: WalletId, payload: &WalletPayload) -> Result<HttpResponse, ApiError>;
    async fn delete(&self, id: WalletId) -> Result<bool, ApiError>;
}

/// Response stage that turns 401 into a logout
#[derive(Clone)]
pub struct AuthInterceptor {
    session: Session,
}

impl AuthInterceptor {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn intercept(&self, response: HttpResponse) -> Result<HttpResponse, ApiError> {
        if response.status == 401 {
            log::warn!("Token rejected by server, logging out");
            self.session.logout();
            return Err(ApiError::AuthExpired);
        }
        Ok(response)
    }
}

pub struct WalletApi<T: HttpTransport> {
    transport: Rc<T>,
    session: Session,
    interceptor: AuthInterceptor,
}

impl<T: HttpTransport> WalletApi<T> {
    pub fn new(transport: Rc<T>, session: Session) -> Self {
        let interceptor = AuthInterceptor::new(session.clone());
        Self {
            transport,
            session,
            interceptor,
        }
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let Some(token) = self.session.get_token() else {
            log::warn!("No token for {} {}, logging out", request.method.as_str(), request.url);
            self.session.logout();
            return Err(ApiError::AuthExpired);
        };

        let request = request.header("Authorization", format!("Bearer {}", token));
        let response = self.transport.send(request).await?;
        self.interceptor.intercept(response)
    }

    fn write_request(&self, method: HttpMethod, url: String, payload: &WalletPayload) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(payload)?;
        Ok(HttpRequest::new(method, url).json_body(body))
    }
}

#[async_trait(?Send)]
impl<T: HttpTransport> WalletRepository for WalletApi<T> {
    async fn list(&self) -> Result<Vec<Wallet>, ApiError> {
        let url = self.session.config().wallets_url();
        let response = self.send(HttpRequest::new(HttpMethod::Get, url)).await?;

        if !response.ok() {
            return Err(ApiError::RequestFailed { status: response.status });
        }

        response.json()
    }

    async fn create(&self, payload: &WalletPayload) -> Result<HttpResponse, ApiError> {
        let url = self.session.config().wallets_url();
        let request = self.write_request(HttpMethod::Post, url, payload)?;
        self.send(request).await
    }

    async fn update(&self, id: WalletId, payload: &WalletPayload) -> Result<HttpResponse, ApiError> {
        let url = self.session.config().wallet_url(id);
        let request = self.write_request(HttpMethod::Put, url, payload)?;
        self.send(request).await
    }

    async fn delete(&self, id: WalletId) -> Result<bool, ApiError> {
        let url = self.session.config().wallet_url(id);
        let response = self.send(HttpRequest::new(HttpMethod::Delete, url)).await?;
        Ok(response.ok())
    }
}
