use contracts::api::ApiEnvelope;
use contracts::staff::{StaffDto, StaffMember};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

pub async fn fetch_staff() -> Result<Vec<StaffMember>, String> {
    let response = Request::get(&format!("{}/api/staff", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<ApiEnvelope<Vec<StaffMember>>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn create_staff(dto: &StaffDto) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/staff", api_base()))
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

pub async fn update_staff(id: i64, dto: &StaffDto) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/staff/{}", api_base(), id))
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

pub async fn delete_staff(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/staff/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    Ok(())
}
