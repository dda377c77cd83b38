use super::*;
use crate::config::ViewerMode;
use crate::state::test_helpers::test_app_state;
use market::{Category, Condition, Price};

fn new_listing() -> NewListing {
    NewListing {
        title: "Road Bike".into(),
        description: "Lightly used".into(),
        price: Price::dollars(350),
        category: Category::Sports,
        condition: Condition::Good,
        location: "Austin, TX".into(),
        images: vec!["bike.jpg".into()],
    }
}

#[test]
fn catalog_query_uses_labels() {
    let query = catalog_query(CatalogParams {
        q: Some("chair".into()),
        category: Some("Home & Garden".into()),
        sort: Some("Price: Low to High".into()),
    })
    .unwrap();
    assert_eq!(query.search, "chair");
    assert_eq!(query.category, CategoryFilter::Only(Category::HomeGarden));
    assert_eq!(query.sort, SortKey::PriceLowToHigh);
}

#[test]
fn catalog_query_defaults_and_rejects_unknown() {
    assert_eq!(catalog_query(CatalogParams::default()).unwrap(), CatalogQuery::default());
    let bad = CatalogParams { category: Some("Boats".into()), ..CatalogParams::default() };
    assert_eq!(catalog_query(bad).unwrap_err(), StatusCode::BAD_REQUEST);
}

#[test]
fn store_error_to_status_maps_variants() {
    let err = StoreError::Market(MarketError::ListingNotFound(ListingId(9)));
    assert_eq!(store_error_to_status(err), StatusCode::NOT_FOUND);
    let err = StoreError::Market(MarketError::InvalidStatusTarget(ListingStatus::Sold));
    assert_eq!(store_error_to_status(err), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_catalog_filters() {
    let state = test_app_state(ViewerMode::Anonymous);
    let params = CatalogParams { q: Some("zzz-no-match".into()), ..CatalogParams::default() };
    let Json(hits) = list_catalog(State(state.clone()), Query(params)).await.unwrap();
    assert!(hits.is_empty());
    let Json(all) = list_catalog(State(state), Query(CatalogParams::default())).await.unwrap();
    assert_eq!(all.len(), 6);
}

#[tokio::test]
async fn create_listing_accepts_without_storing() {
    let state = test_app_state(ViewerMode::Anonymous);
    let (status, Json(receipt)) = create_listing(State(state.clone()), Json(new_listing())).await.unwrap();
    assert_eq!(status, StatusCode::ACCEPTED);
    assert!(Uuid::parse_str(&receipt.receipt_id).is_ok());

    let Json(all) = list_catalog(State(state), Query(CatalogParams::default())).await.unwrap();
    assert!(all.iter().all(|l| l.title != "Road Bike"));
}

#[tokio::test]
async fn create_listing_rejects_blank_title() {
    let state = test_app_state(ViewerMode::Anonymous);
    let listing = NewListing { title: "   ".into(), ..new_listing() };
    let err = create_listing(State(state), Json(listing)).await.unwrap_err();
    assert_eq!(err, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_listing_waits_for_configured_delay() {
    let mut state = test_app_state(ViewerMode::Anonymous);
    state.config = std::sync::Arc::new(crate::config::ServerConfig {
        submit_delay: std::time::Duration::from_millis(50),
        ..crate::config::ServerConfig::default()
    });
    let start = tokio::time::Instant::now();
    create_listing(State(state), Json(new_listing())).await.unwrap();
    assert!(start.elapsed() >= std::time::Duration::from_millis(50));
}

#[tokio::test]
async fn owner_routes_change_and_delete() {
    let state = test_app_state(ViewerMode::Member);
    let member = || MemberViewer(market::fixtures::demo_member());

    let Json(updated) =
        update_status(State(state.clone()), member(), Path(1), Json(StatusBody { status: ListingStatus::Paused }))
            .await
            .unwrap();
    assert_eq!(updated.status, ListingStatus::Paused);

    let status = delete_listing(State(state.clone()), member(), Path(2)).await.unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);

    let params = OwnerParams { tab: Some("paused".into()) };
    let Json(resp) = list_owned(State(state), member(), Query(params)).await.unwrap();
    assert_eq!(resp.counts, StatusCounts { total: 3, active: 0, paused: 2, sold: 1 });
    assert_eq!(resp.listings.len(), 2);
}

#[tokio::test]
async fn owner_routes_reject_sold_target_and_unknown_id() {
    let state = test_app_state(ViewerMode::Member);
    let member = || MemberViewer(market::fixtures::demo_member());

    let err = update_status(State(state.clone()), member(), Path(1), Json(StatusBody { status: ListingStatus::Sold }))
        .await
        .unwrap_err();
    assert_eq!(err, StatusCode::UNPROCESSABLE_ENTITY);

    let err = delete_listing(State(state), member(), Path(404)).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_owned_rejects_unknown_tab() {
    let state = test_app_state(ViewerMode::Member);
    let params = OwnerParams { tab: Some("archived".into()) };
    let err = list_owned(State(state), MemberViewer(market::fixtures::demo_member()), Query(params))
        .await
        .unwrap_err();
    assert_eq!(err, StatusCode::BAD_REQUEST);
}
