//! Catalog, listing creation, and owner listing routes.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use market::catalog::{CatalogQuery, CategoryFilter, SortKey};
use market::draft::NewListing;
use market::manager::{StatusCounts, StatusTab};
use market::submission::SubmitReceipt;
use market::{Listing, ListingId, ListingStatus, MarketError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::session::MemberViewer;
use crate::services::store::StoreError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OwnerParams {
    pub tab: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: ListingStatus,
}

#[derive(Debug, Serialize)]
pub struct OwnerListingsResponse {
    pub listings: Vec<Listing>,
    pub counts: StatusCounts,
}

/// Query-string controls to a catalog query. Category and sort use their
/// display labels; an unknown label is a bad request.
pub(crate) fn catalog_query(params: CatalogParams) -> Result<CatalogQuery, StatusCode> {
    let category = match params.category.as_deref() {
        None | Some("") => CategoryFilter::All,
        Some(label) => CategoryFilter::from_label(label).ok_or(StatusCode::BAD_REQUEST)?,
    };
    let sort = match params.sort.as_deref() {
        None | Some("") => SortKey::default(),
        Some(label) => SortKey::from_label(label).ok_or(StatusCode::BAD_REQUEST)?,
    };
    Ok(CatalogQuery { search: params.q.unwrap_or_default(), category, sort })
}

pub(crate) fn store_error_to_status(err: StoreError) -> StatusCode {
    match err {
        StoreError::Market(MarketError::ListingNotFound(_)) => StatusCode::NOT_FOUND,
        StoreError::Market(MarketError::InvalidStatusTarget(_)) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// `GET /api/listings` — public catalog, filtered.
pub async fn list_catalog(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> Result<Json<Vec<Listing>>, StatusCode> {
    let query = catalog_query(params)?;
    Ok(Json(state.store.catalog(&query).await))
}

/// `POST /api/listings` — accept a new listing after the configured delay.
///
/// Nothing is stored; the receipt only acknowledges the request.
pub async fn create_listing(
    State(state): State<AppState>,
    Json(listing): Json<NewListing>,
) -> Result<(StatusCode, Json<SubmitReceipt>), StatusCode> {
    if let Err(e) = listing.check() {
        tracing::debug!(error = %e, "rejecting listing");
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    tokio::time::sleep(state.config.submit_delay).await;

    let receipt = SubmitReceipt { receipt_id: Uuid::new_v4().to_string() };
    tracing::info!(
        receipt_id = %receipt.receipt_id,
        title = %listing.title,
        images = listing.images.len(),
        "listing accepted"
    );
    Ok((StatusCode::ACCEPTED, Json(receipt)))
}

/// `GET /api/me/listings` — the member's listings under `?tab=`.
pub async fn list_owned(
    State(state): State<AppState>,
    _member: MemberViewer,
    Query(params): Query<OwnerParams>,
) -> Result<Json<OwnerListingsResponse>, StatusCode> {
    let tab = match params.tab.as_deref() {
        None | Some("") => StatusTab::All,
        Some(raw) => StatusTab::from_str(raw).ok_or(StatusCode::BAD_REQUEST)?,
    };
    let (listings, counts) = state.store.owner_listings(tab).await;
    Ok(Json(OwnerListingsResponse { listings, counts }))
}

/// `PATCH /api/me/listings/:id/status` — pause or activate.
pub async fn update_status(
    State(state): State<AppState>,
    MemberViewer(member): MemberViewer,
    Path(id): Path<u32>,
    Json(body): Json<StatusBody>,
) -> Result<Json<Listing>, StatusCode> {
    let id = ListingId(id);
    let listing = state.store.set_status(id, body.status).await.map_err(store_error_to_status)?;
    tracing::info!(member = %member.id, listing_id = %id, status = body.status.as_str(), "listing status changed");
    Ok(Json(listing))
}

/// `DELETE /api/me/listings/:id` — remove a listing.
pub async fn delete_listing(
    State(state): State<AppState>,
    MemberViewer(member): MemberViewer,
    Path(id): Path<u32>,
) -> Result<StatusCode, StatusCode> {
    let id = ListingId(id);
    state.store.delete_listing(id).await.map_err(store_error_to_status)?;
    tracing::info!(member = %member.id, listing_id = %id, "listing deleted");
    Ok(StatusCode::NO_CONTENT)
}
