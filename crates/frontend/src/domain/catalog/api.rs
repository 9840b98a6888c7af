use contracts::api::{ApiEnvelope, CreatedId};
use contracts::catalog::{
    Catalog, Category, CategoryDto, Product, ProductDto, Setting, SettingDto,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_products() -> Result<Vec<Product>, String> {
    fetch_list("/api/products").await
}

pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    fetch_list("/api/categories").await
}

pub async fn fetch_settings() -> Result<Vec<Setting>, String> {
    fetch_list("/api/settings").await
}

/// Load the whole catalog in one go; the order forms and the admin screen
/// both need all three lists together.
pub async fn fetch_catalog() -> Result<Catalog, String> {
    let products = fetch_products().await?;
    let categories = fetch_categories().await?;
    let settings = fetch_settings().await?;
    Ok(Catalog::new(products, categories, settings))
}

pub async fn create_product(dto: &ProductDto) -> Result<(), String> {
    post_json("/api/products", dto).await.map(|_| ())
}

pub async fn update_product(id: i64, dto: &ProductDto) -> Result<(), String> {
    put_json(&format!("/api/products/{}", id), dto).await
}

pub async fn delete_product(id: i64) -> Result<(), String> {
    delete(&format!("/api/products/{}", id)).await
}

pub async fn create_category(dto: &CategoryDto) -> Result<(), String> {
    post_json("/api/categories", dto).await.map(|_| ())
}

pub async fn update_category(id: i64, dto: &CategoryDto) -> Result<(), String> {
    put_json(&format!("/api/categories/{}", id), dto).await
}

pub async fn delete_category(id: i64) -> Result<(), String> {
    delete(&format!("/api/categories/{}", id)).await
}

/// Create a setting and return its new id (zero when the backend omits it).
pub async fn create_setting(dto: &SettingDto) -> Result<i64, String> {
    let created = post_json("/api/settings", dto).await?;
    Ok(created.id.unwrap_or_default())
}

pub async fn update_setting(id: i64, dto: &SettingDto) -> Result<(), String> {
    put_json(&format!("/api/settings/{}", id), dto).await
}

pub async fn delete_setting(id: i64) -> Result<(), String> {
    delete(&format!("/api/settings/{}", id)).await
}

async fn fetch_list<T>(path: &str) -> Result<Vec<T>, String>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<ApiEnvelope<Vec<T>>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

async fn post_json<B: serde::Serialize>(path: &str, body: &B) -> Result<CreatedId, String> {
    let response = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response.json::<CreatedId>().await.or(Ok(CreatedId::default()))
}

async fn put_json<B: serde::Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = Request::put(&api_url(path))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    Ok(())
}

async fn delete(path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    Ok(())
}
