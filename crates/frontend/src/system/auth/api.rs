use contracts::api::ApiMessage;
use gloo_net::http::Request;
use serde::Serialize;

use crate::shared::api_utils::api_base;

#[derive(Serialize)]
struct LoginRequest {
    username: String,
    password: String,
}

/// Login with username and password. Returns the account record on success.
pub async fn login(username: String, password: String) -> Result<serde_json::Value, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&format!("{}/api/admin/login", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err("Invalid credentials".to_string());
    }

    let reply = response
        .json::<ApiMessage>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if reply.message == "success" {
        Ok(reply.data)
    } else {
        Err("Invalid credentials".to_string())
    }
}
