//! HTTP seam between the API clients and the browser
//!
//! `HttpTransport` is the only place a request actually leaves the page.
//! The browser implementation goes through `gloo-net`; tests script responses
//! with `mock::MockTransport`.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::services::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Outgoing request with a JSON body already serialized
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn json_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self.header("Content-Type", "application/json")
    }

    #[cfg(test)]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Response with the body read eagerly as text
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// JSON error body shape used by the server: `{"msg": "..."}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    msg: Option<String>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Build a response once the status is known. An unreadable body is
    /// logged and left empty so the status still reaches the caller.
    pub fn from_body_read<E: std::fmt::Display>(status: u16, body: Result<String, E>) -> Self {
        match body {
            Ok(body) => Self::new(status, body),
            Err(e) => {
                log::warn!("Failed to read body of {} response: {}", status, e);
                Self::new(status, String::new())
            }
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Server-supplied `msg` from an error body, if present and non-empty
    pub fn error_message(&self) -> Option<String> {
        serde_json::from_str::<ErrorBody>(&self.body)
            .ok()
            .and_then(|b| b.msg)
            .filter(|m| !m.is_empty())
    }
}

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Fetch-backed transport used in the browser
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        log::debug!("{} {}", request.method.as_str(), request.url);

        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = built
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response.text().await;

        Ok(HttpResponse::from_body_read(status, body))
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays queued responses in order and records every request
    #[derive(Default)]
    pub struct MockTransport {
        responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(&self, status: u16, body: &str) {
            self.responses
                .borrow_mut()
                .push_back(Ok(HttpResponse::new(status, body)));
        }

        /// Status arrives but the body stream breaks
        pub fn respond_unreadable(&self, status: u16) {
            let body: Result<String, &str> = Err("stream aborted");
            self.responses
                .borrow_mut()
                .push_back(Ok(HttpResponse::from_body_read(status, body)));
        }

        pub fn fail(&self, message: &str) {
            self.responses
                .borrow_mut()
                .push_back(Err(ApiError::Transport(message.to_string())));
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.borrow().clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for MockTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_covers_2xx_only() {
        assert!(HttpResponse::new(200, "").ok());
        assert!(HttpResponse::new(201, "").ok());
        assert!(!HttpResponse::new(400, "").ok());
        assert!(!HttpResponse::new(401, "").ok());
        assert!(!HttpResponse::new(500, "").ok());
    }

    #[test]
    fn test_error_message_reads_msg_field() {
        let res = HttpResponse::new(400, r#"{"msg":"Wallet address already exists"}"#);
        assert_eq!(res.error_message().as_deref(), Some("Wallet address already exists"));
    }

    #[test]
    fn test_error_message_absent() {
        assert_eq!(HttpResponse::new(400, "{}").error_message(), None);
        assert_eq!(HttpResponse::new(400, r#"{"msg":""}"#).error_message(), None);
        assert_eq!(HttpResponse::new(500, "<html>oops</html>").error_message(), None);
    }

    #[test]
    fn test_unreadable_body_keeps_status() {
        let res = HttpResponse::from_body_read(401, Err::<String, _>("connection reset"));
        assert_eq!(res, HttpResponse::new(401, ""));
        assert_eq!(res.error_message(), None);
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let req = HttpRequest::new(HttpMethod::Post, "/api/wallets").json_body("{}".to_string());
        assert_eq!(req.header_value("content-type"), Some("application/json"));
        assert_eq!(req.body.as_deref(), Some("{}"));
    }
}
