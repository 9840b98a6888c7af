use contracts::api::ApiEnvelope;
use contracts::jobs::{Job, JobSummary, OrderForm, StatusUpdate};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::shared::api_utils::api_base;

/// Fetch the job list, optionally narrowed to one client's history.
pub async fn fetch_jobs(client_id: Option<i64>) -> Result<Vec<JobSummary>, String> {
    let url = match client_id {
        Some(id) => format!("{}/api/jobs?client_id={}", api_base(), id),
        None => format!("{}/api/jobs", api_base()),
    };
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<ApiEnvelope<Vec<JobSummary>>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn fetch_job(id: i64) -> Result<Job, String> {
    let response = Request::get(&format!("{}/api/jobs/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<ApiEnvelope<Job>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// The job endpoints take multipart bodies: the header fields one by one
/// plus the line items as a single JSON-encoded `items` field, leaving room
/// for artwork file parts alongside.
fn build_form_data(form: &OrderForm) -> Result<FormData, String> {
    let data = FormData::new().map_err(|e| format!("Failed to create form data: {:?}", e))?;
    for (key, value) in form.header.form_fields() {
        data.append_with_str(key, value)
            .map_err(|e| format!("Failed to append field: {:?}", e))?;
    }
    data.append_with_str("items", &form.items_json()?)
        .map_err(|e| format!("Failed to append items: {:?}", e))?;
    Ok(data)
}

pub async fn create_job(form: &OrderForm) -> Result<(), String> {
    let body = build_form_data(form)?;
    let response = Request::post(&format!("{}/api/jobs", api_base()))
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    Ok(())
}

pub async fn update_job(id: i64, form: &OrderForm) -> Result<(), String> {
    let body = build_form_data(form)?;
    let response = Request::put(&format!("{}/api/jobs/{}", api_base(), id))
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    Ok(())
}

pub async fn update_status(id: i64, status: String) -> Result<(), String> {
    let response = Request::put(&format!("{}/api/jobs/{}/status", api_base(), id))
        .json(&StatusUpdate { status })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    Ok(())
}

pub async fn delete_job(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/jobs/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    Ok(())
}
