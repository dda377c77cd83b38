use super::*;
use market::catalog::CategoryFilter;
use market::Category;

#[tokio::test]
async fn catalog_filters_by_search_and_category() {
    let store = MemoryStore::seeded();
    let all = store.catalog(&CatalogQuery::default()).await;
    assert_eq!(all.len(), 6);

    let query = CatalogQuery { search: "iphone".into(), ..CatalogQuery::default() };
    let hits = store.catalog(&query).await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, ListingId(1));

    let query = CatalogQuery { category: CategoryFilter::Only(Category::HomeGarden), ..CatalogQuery::default() };
    assert!(store.catalog(&query).await.iter().all(|l| l.category == Category::HomeGarden));
}

#[tokio::test]
async fn owner_listings_by_tab_with_counts() {
    let store = MemoryStore::seeded();
    let (active, counts) = store.owner_listings(StatusTab::Active).await;
    assert_eq!(active.len(), 2);
    assert_eq!(counts, StatusCounts { total: 4, active: 2, paused: 1, sold: 1 });
}

#[tokio::test]
async fn set_status_changes_only_status() {
    let store = MemoryStore::seeded();
    let (before, _) = store.owner_listings(StatusTab::All).await;
    let updated = store.set_status(ListingId(1), ListingStatus::Paused).await.unwrap();
    let original = before.iter().find(|l| l.id == ListingId(1)).unwrap();
    assert_eq!(updated.status, ListingStatus::Paused);
    assert_eq!(Listing { status: original.status, ..updated }, *original);

    let (_, counts) = store.owner_listings(StatusTab::All).await;
    assert_eq!(counts.paused, 2);
}

#[tokio::test]
async fn set_status_rejects_sold_and_unknown() {
    let store = MemoryStore::seeded();
    assert!(matches!(
        store.set_status(ListingId(1), ListingStatus::Sold).await,
        Err(StoreError::Market(MarketError::InvalidStatusTarget(ListingStatus::Sold)))
    ));
    assert!(matches!(
        store.set_status(ListingId(99), ListingStatus::Active).await,
        Err(StoreError::Market(MarketError::ListingNotFound(ListingId(99))))
    ));
}

#[tokio::test]
async fn delete_removes_exactly_one() {
    let store = MemoryStore::seeded();
    let removed = store.delete_listing(ListingId(2)).await.unwrap();
    assert_eq!(removed.id, ListingId(2));
    let (remaining, counts) = store.owner_listings(StatusTab::All).await;
    assert_eq!(counts.total, 3);
    assert!(remaining.iter().all(|l| l.id != ListingId(2)));
    assert!(store.delete_listing(ListingId(2)).await.is_err());
}

#[tokio::test]
async fn profile_is_demo_profile() {
    let store = MemoryStore::seeded();
    assert_eq!(store.profile().await, fixtures::demo_profile());
}
