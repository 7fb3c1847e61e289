use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::services::error::ApiError;
use crate::services::http::{HttpMethod, HttpRequest, HttpTransport};

#[derive(Debug, Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// POST credentials to the login endpoint and return the issued access token
pub async fn login<T: HttpTransport + ?Sized>(
    transport: &T,
    config: &AppConfig,
    username: &str,
    password: &str,
) -> Result<String, ApiError> {
    let body = serde_json::to_string(&Credentials { username, password })?;
    let request = HttpRequest::new(HttpMethod::Post, config.login_url()).json_body(body);

    let response = transport.send(request).await?;
    if !response.ok() {
        log::info!("Login rejected with status {}", response.status);
        return Err(ApiError::CredentialsInvalid);
    }

    let parsed: LoginResponse = response.json()?;
    Ok(parsed.access_token)
}
