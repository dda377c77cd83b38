//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Pages apply
//! owner mutations locally before calling these, so a failed forward is
//! logged and otherwise ignored.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use market::draft::NewListing;
use market::profile::ProfileForm;
use market::submission::SubmitReceipt;
use market::{ListingId, ListingStatus, Viewer};

#[cfg(any(test, feature = "hydrate"))]
fn listing_endpoint(id: ListingId) -> String {
    format!("/api/me/listings/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn listing_status_endpoint(id: ListingId) -> String {
    format!("/api/me/listings/{id}/status")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_body(status: ListingStatus) -> serde_json::Value {
    serde_json::json!({ "status": status })
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Fetch the current viewer from `/api/session`.
/// Returns `None` on failure or on the server.
pub async fn fetch_viewer() -> Option<Viewer> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/session").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Viewer>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Forward a status change via `PATCH /api/me/listings/{id}/status`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn update_listing_status(id: ListingId, status: ListingStatus) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&listing_status_endpoint(id))
            .json(&status_body(status))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("status update", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, status);
        Err("not available on server".to_owned())
    }
}

/// Forward a confirmed delete via `DELETE /api/me/listings/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn delete_listing(id: ListingId) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&listing_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Submit a validated listing via `POST /api/listings`.
///
/// The server holds the request for its configured delay and acknowledges
/// it without storing anything.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn submit_listing(listing: &NewListing) -> Result<SubmitReceipt, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/listings")
            .json(listing)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("create listing", resp.status()));
        }
        resp.json::<SubmitReceipt>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = listing;
        Err("not available on server".to_owned())
    }
}

/// Send profile edits via `PUT /api/me/profile`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn save_profile(form: &ProfileForm) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put("/api/me/profile")
            .json(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("profile update", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err("not available on server".to_owned())
    }
}
