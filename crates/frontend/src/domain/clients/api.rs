use contracts::api::ApiEnvelope;
use contracts::clients::{Client, ClientDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

pub async fn fetch_clients() -> Result<Vec<Client>, String> {
    let response = Request::get(&format!("{}/api/clients", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<ApiEnvelope<Vec<Client>>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_client(id: i64) -> Result<Client, String> {
    let response = Request::get(&format!("{}/api/clients/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<ApiEnvelope<Client>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_client(dto: &ClientDto) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/clients", api_base()))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    Ok(())
}

pub async fn update_client(id: i64, dto: &ClientDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/clients/{}", api_base(), id))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    Ok(())
}

/// Delete a client. Existing job orders keep their copied client details.
pub async fn delete_client(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/clients/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    Ok(())
}
