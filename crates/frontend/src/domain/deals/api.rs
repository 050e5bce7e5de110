use contracts::domain::deal::{Deal, DealFormData, DealStage};
use contracts::shared::page::PageResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fetch one page of deals
pub async fn fetch_deals(page: u64, size: u64) -> Result<PageResponse<Deal>, String> {
    let response = Request::get(&format!(
        "{}/api/deals?page={}&size={}",
        api_base(),
        page,
        size
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch deals: {}", response.status()));
    }

    response
        .json::<PageResponse<Deal>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch a single deal by id
pub async fn fetch_deal(id: i64) -> Result<Deal, String> {
    let response = Request::get(&format!("{}/api/deals/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch deal: {}", response.status()));
    }

    response
        .json::<Deal>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch all deals in the given stage
pub async fn fetch_by_stage(stage: DealStage) -> Result<Vec<Deal>, String> {
    let response = Request::get(&format!(
        "{}/api/deals/stage/{}",
        api_base(),
        stage.as_str()
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch deals: {}", response.status()));
    }

    response
        .json::<Vec<Deal>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new deal
pub async fn create_deal(form: DealFormData) -> Result<Deal, String> {
    let response = Request::post(&format!("{}/api/deals", api_base()))
        .json(&form)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create deal: {}", response.status()));
    }

    response
        .json::<Deal>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Update existing deal
pub async fn update_deal(id: i64, form: DealFormData) -> Result<Deal, String> {
    let response = Request::put(&format!("{}/api/deals/{}", api_base(), id))
        .json(&form)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update deal: {}", response.status()));
    }

    response
        .json::<Deal>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Move deal to another pipeline stage
pub async fn move_stage(id: i64, stage: DealStage) -> Result<Deal, String> {
    let response = Request::patch(&format!(
        "{}/api/deals/{}/stage?stage={}",
        api_base(),
        id,
        stage.as_str()
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to move deal: {}", response.status()));
    }

    response
        .json::<Deal>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete deal
pub async fn delete_deal(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/deals/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete deal: {}", response.status()));
    }

    Ok(())
}

/// Total revenue across won deals
pub async fn fetch_total_revenue() -> Result<f64, String> {
    let response = Request::get(&format!("{}/api/deals/analytics/revenue", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch revenue: {}", response.status()));
    }

    response
        .json::<f64>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Won/total conversion rate in percent
pub async fn fetch_conversion_rate() -> Result<f64, String> {
    let response = Request::get(&format!(
        "{}/api/deals/analytics/conversion-rate",
        api_base()
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Failed to fetch conversion rate: {}",
            response.status()
        ));
    }

    response
        .json::<f64>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
