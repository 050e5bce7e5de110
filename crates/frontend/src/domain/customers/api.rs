use contracts::domain::customer::{Customer, CustomerFormData, CustomerStatus};
use contracts::shared::page::PageResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Fetch one page of customers
pub async fn fetch_customers(page: u64, size: u64) -> Result<PageResponse<Customer>, String> {
    let response = Request::get(&format!(
        "{}/api/customers?page={}&size={}",
        api_base(),
        page,
        size
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch customers: {}", response.status()));
    }

    response
        .json::<PageResponse<Customer>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch a single customer by id
pub async fn fetch_customer(id: i64) -> Result<Customer, String> {
    let response = Request::get(&format!("{}/api/customers/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch customer: {}", response.status()));
    }

    response
        .json::<Customer>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch all customers in the given status
pub async fn fetch_by_status(status: CustomerStatus) -> Result<Vec<Customer>, String> {
    let response = Request::get(&format!(
        "{}/api/customers/status/{}",
        api_base(),
        status.as_str()
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch customers: {}", response.status()));
    }

    response
        .json::<Vec<Customer>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Search customers by name
pub async fn search_customers(name: &str) -> Result<Vec<Customer>, String> {
    let response = Request::get(&format!(
        "{}/api/customers/search?name={}",
        api_base(),
        urlencoding::encode(name)
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to search customers: {}", response.status()));
    }

    response
        .json::<Vec<Customer>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create new customer
pub async fn create_customer(form: CustomerFormData) -> Result<Customer, String> {
    let response = Request::post(&format!("{}/api/customers", api_base()))
        .json(&form)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create customer: {}", response.status()));
    }

    response
        .json::<Customer>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Update existing customer
pub async fn update_customer(id: i64, form: CustomerFormData) -> Result<Customer, String> {
    let response = Request::put(&format!("{}/api/customers/{}", api_base(), id))
        .json(&form)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update customer: {}", response.status()));
    }

    response
        .json::<Customer>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Change customer status
pub async fn change_status(id: i64, status: CustomerStatus) -> Result<Customer, String> {
    let response = Request::patch(&format!(
        "{}/api/customers/{}/status?status={}",
        api_base(),
        id,
        status.as_str()
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to change status: {}", response.status()));
    }

    response
        .json::<Customer>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete customer
pub async fn delete_customer(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/customers/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete customer: {}", response.status()));
    }

    Ok(())
}
