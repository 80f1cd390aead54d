/**
 * API Client
 *
 * Blocking HTTP calls against the employee admin server. Each call builds a
 * short-lived tokio runtime, so these functions are meant to run on a
 * background thread, never on the UI thread.
 *
 * Failures are returned as the server's `message` when the body carries one,
 * otherwise as a network or status description.
 */

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::shared::{
    EmployeeRecord, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
    RegisterResponse, UpdateRequest, UpdateResponse,
};

/// Login with NIK and password, returning the session token
pub fn login(config: &Config, nik: String, password: String) -> Result<String, String> {
    let url = config.api_url("/api/login");
    let request = LoginRequest { nik, password };

    block_on(async move {
        let response = Client::new()
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(network_error)?;
        let body: LoginResponse = parse(response).await?;
        Ok(body.token)
    })
}

/// Employee bound to the stored token
pub fn get_me(config: &Config) -> Result<EmployeeRecord, String> {
    let url = config.api_url("/api/me");
    let token = config.get_token().cloned().unwrap_or_default();

    block_on(async move {
        let response = Client::new()
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(network_error)?;
        parse(response).await
    })
}

/// All employees
pub fn list_users(config: &Config) -> Result<Vec<EmployeeRecord>, String> {
    let url = config.api_url("/api/users");

    block_on(async move {
        let response = Client::new().get(&url).send().await.map_err(network_error)?;
        parse(response).await
    })
}

/// Register a new employee
pub fn register_user(config: &Config, request: RegisterRequest) -> Result<EmployeeRecord, String> {
    let url = config.api_url("/api/register");

    block_on(async move {
        let response = Client::new()
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(network_error)?;
        let body: RegisterResponse = parse(response).await?;
        Ok(body.new_user)
    })
}

/// Update name, email and position of an employee
pub fn update_user(config: &Config, request: UpdateRequest) -> Result<EmployeeRecord, String> {
    let url = config.api_url("/api/update");

    block_on(async move {
        let response = Client::new()
            .put(&url)
            .json(&request)
            .send()
            .await
            .map_err(network_error)?;
        let body: UpdateResponse = parse(response).await?;
        Ok(body.updated_user)
    })
}

/// Delete an employee by NIK
pub fn delete_user(config: &Config, nik: &str) -> Result<String, String> {
    let mut url = reqwest::Url::parse(&config.api_url("/api/users"))
        .map_err(|e| format!("Invalid server URL: {}", e))?;
    url.path_segments_mut()
        .map_err(|_| "Invalid server URL".to_string())?
        .push(nik);

    block_on(async move {
        let response = Client::new().delete(url).send().await.map_err(network_error)?;
        let body: MessageResponse = parse(response).await?;
        Ok(body.message)
    })
}

fn block_on<T>(future: impl std::future::Future<Output = Result<T, String>>) -> Result<T, String> {
    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;
    rt.block_on(future)
}

fn network_error(err: reqwest::Error) -> String {
    tracing::warn!("Request failed: {}", err);
    format!("Network error: {}", err)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    if !status.is_success() {
        return Err(error_message(status.as_u16(), &text));
    }

    serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Message to show for a failed response
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<MessageResponse>(body)
        .map(|body| body.message)
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                format!("Request failed with status {}", status)
            } else {
                format!("Request failed with status {}: {}", status, body.trim())
            }
        })
}
