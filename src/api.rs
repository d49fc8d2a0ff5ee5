//! API client for the Strata backend

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_net::http::Request;
use leptos::prelude::on_cleanup;

use crate::types::*;

/// Handle tied to the current view's reactive owner. Spawned requests check
/// it before writing results, so a late response cannot land on a view that
/// has already unmounted.
#[derive(Clone)]
pub struct ViewGuard(Arc<AtomicBool>);

impl ViewGuard {
    pub fn mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Create a guard that flips to unmounted when the owning view is cleaned up
pub fn view_guard() -> ViewGuard {
    let alive = Arc::new(AtomicBool::new(true));
    let flag = alive.clone();
    on_cleanup(move || flag.store(false, Ordering::Relaxed));
    ViewGuard(alive)
}

/// GET a JSON resource
pub async fn fetch_json<T: serde::de::DeserializeOwned>(
    url: &str,
    token: Option<String>,
) -> Result<T, String> {
    let req = if let Some(t) = token {
        Request::get(url).header("Authorization", &format!("Bearer {}", t))
    } else {
        Request::get(url)
    };

    let resp = req
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        let status = resp.status();
        if let Ok(err) = resp.json::<ApiError>().await {
            return Err(err.error);
        }
        return Err(format!("Request failed with status {}", status));
    }

    resp.json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body and parse a JSON response
pub async fn post_json<T, R>(url: &str, body: &T, token: Option<String>) -> Result<R, String>
where
    T: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    let req = Request::post(url).header("Content-Type", "application/json");

    let req = if let Some(t) = token {
        req.header("Authorization", &format!("Bearer {}", t))
    } else {
        req
    };

    let req = req
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;

    let resp = req
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        let status = resp.status();
        if let Ok(err) = resp.json::<ApiError>().await {
            return Err(err.error);
        }
        return Err(format!("Request failed with status {}", status));
    }

    resp.json::<R>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body where only the status matters
pub async fn post_and_check<T: serde::Serialize>(
    url: &str,
    body: &T,
    token: Option<String>,
) -> Result<(), String> {
    send_and_check(Request::post(url), body, token).await
}

/// PUT a JSON body where only the status matters
pub async fn put_and_check<T: serde::Serialize>(
    url: &str,
    body: &T,
    token: Option<String>,
) -> Result<(), String> {
    send_and_check(Request::put(url), body, token).await
}

async fn send_and_check<T: serde::Serialize>(
    req: gloo_net::http::RequestBuilder,
    body: &T,
    token: Option<String>,
) -> Result<(), String> {
    let req = req.header("Content-Type", "application/json");

    let req = if let Some(t) = token {
        req.header("Authorization", &format!("Bearer {}", t))
    } else {
        req
    };

    let req = req
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;

    let resp = req
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        let status = resp.status();
        if let Ok(err) = resp.json::<ApiError>().await {
            return Err(err.error);
        }
        return Err(format!("Request failed with status {}", status));
    }

    Ok(())
}

/// DELETE a resource
pub async fn delete_and_check(url: &str, token: Option<String>) -> Result<(), String> {
    let req = if let Some(t) = token {
        Request::delete(url).header("Authorization", &format!("Bearer {}", t))
    } else {
        Request::delete(url)
    };

    let resp = req
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        let status = resp.status();
        if let Ok(err) = resp.json::<ApiError>().await {
            return Err(err.error);
        }
        return Err(format!("Request failed with status {}", status));
    }

    Ok(())
}

/// Log in and obtain the session identity
pub async fn login(base: &str, payload: &LoginPayload) -> Result<LoginResponse, String> {
    post_json(&format!("{}/Auth/login", base), payload, None).await
}

/// Register a new account
pub async fn register(base: &str, payload: &RegisterPayload) -> Result<(), String> {
    post_and_check(&format!("{}/Auth/register", base), payload, None).await
}

pub async fn fetch_buildings(base: &str, token: Option<String>) -> Result<Vec<Building>, String> {
    fetch_json(&format!("{}/Building", base), token).await
}

pub async fn create_building(
    base: &str,
    payload: &BuildingPayload,
    token: Option<String>,
) -> Result<(), String> {
    post_and_check(&format!("{}/Building", base), payload, token).await
}

pub async fn update_building(
    base: &str,
    id: &str,
    payload: &BuildingPayload,
    token: Option<String>,
) -> Result<(), String> {
    put_and_check(&format!("{}/Building/{}", base, id), payload, token).await
}

pub async fn delete_building(base: &str, id: &str, token: Option<String>) -> Result<(), String> {
    delete_and_check(&format!("{}/Building/{}", base, id), token).await
}

pub async fn fetch_owners(base: &str, token: Option<String>) -> Result<Vec<Owner>, String> {
    fetch_json(&format!("{}/Owner", base), token).await
}

/// Look up the caller's own owner profile; an error doubles as "no profile"
pub async fn owner_by_email(
    base: &str,
    email: &str,
    token: Option<String>,
) -> Result<Owner, String> {
    fetch_json(&format!("{}/Owner/by-email/{}", base, email), token).await
}

pub async fn create_owner(
    base: &str,
    payload: &OwnerPayload,
    token: Option<String>,
) -> Result<(), String> {
    post_and_check(&format!("{}/Owner", base), payload, token).await
}

pub async fn update_owner(
    base: &str,
    id: &str,
    payload: &OwnerPayload,
    token: Option<String>,
) -> Result<(), String> {
    put_and_check(&format!("{}/Owner/{}", base, id), payload, token).await
}

pub async fn delete_owner(base: &str, id: &str, token: Option<String>) -> Result<(), String> {
    delete_and_check(&format!("{}/Owner/{}", base, id), token).await
}

pub async fn fetch_tenants(base: &str, token: Option<String>) -> Result<Vec<Tenant>, String> {
    fetch_json(&format!("{}/Tenant", base), token).await
}

/// Look up the caller's own tenant profile; an error doubles as "no profile"
pub async fn tenant_by_email(
    base: &str,
    email: &str,
    token: Option<String>,
) -> Result<Tenant, String> {
    fetch_json(&format!("{}/Tenant/by-email/{}", base, email), token).await
}

pub async fn create_tenant(
    base: &str,
    payload: &TenantPayload,
    token: Option<String>,
) -> Result<(), String> {
    post_and_check(&format!("{}/Tenant", base), payload, token).await
}

pub async fn update_tenant(
    base: &str,
    id: &str,
    payload: &TenantPayload,
    token: Option<String>,
) -> Result<(), String> {
    put_and_check(&format!("{}/Tenant/{}", base, id), payload, token).await
}

pub async fn delete_tenant(base: &str, id: &str, token: Option<String>) -> Result<(), String> {
    delete_and_check(&format!("{}/Tenant/{}", base, id), token).await
}

pub async fn fetch_requests(
    base: &str,
    token: Option<String>,
) -> Result<Vec<MaintenanceRequest>, String> {
    fetch_json(&format!("{}/MaintenanceRequest", base), token).await
}

/// Listing scoped server-side to the caller's building and unit
pub async fn fetch_requests_scoped(
    base: &str,
    scope: &RequestScope,
    token: Option<String>,
) -> Result<Vec<MaintenanceRequest>, String> {
    post_json(&format!("{}/MaintenanceRequest/user", base), scope, token).await
}

pub async fn create_request(
    base: &str,
    payload: &MaintenancePayload,
    token: Option<String>,
) -> Result<(), String> {
    post_and_check(&format!("{}/MaintenanceRequest", base), payload, token).await
}

pub async fn update_request(
    base: &str,
    id: &str,
    payload: &MaintenancePayload,
    token: Option<String>,
) -> Result<(), String> {
    put_and_check(&format!("{}/MaintenanceRequest/{}", base, id), payload, token).await
}

/// Inline status mutation; sends only the new status
pub async fn update_request_status(
    base: &str,
    id: &str,
    status: MaintenanceStatus,
    token: Option<String>,
) -> Result<(), String> {
    put_and_check(
        &format!("{}/MaintenanceRequest/{}", base, id),
        &StatusUpdate { status },
        token,
    )
    .await
}

pub async fn delete_request(base: &str, id: &str, token: Option<String>) -> Result<(), String> {
    delete_and_check(&format!("{}/MaintenanceRequest/{}", base, id), token).await
}
