use super::*;
use crate::fixtures::owner_listings;

fn owner() -> OwnerListings {
    OwnerListings::new(owner_listings())
}

fn ids(listings: &[&Listing]) -> Vec<u32> {
    listings.iter().map(|l| l.id.0).collect()
}

// =============================================================
// Tabs and counts
// =============================================================

#[test]
fn tabs_partition_by_exact_status() {
    let set = owner();
    assert_eq!(ids(&set.by_tab(StatusTab::All)), vec![1, 2, 3, 4]);
    assert_eq!(ids(&set.by_tab(StatusTab::Active)), vec![1, 2]);
    assert_eq!(ids(&set.by_tab(StatusTab::Paused)), vec![3]);
    assert_eq!(ids(&set.by_tab(StatusTab::Sold)), vec![4]);
}

#[test]
fn status_tabs_cover_set_without_duplicates() {
    let set = owner();
    let mut seen: Vec<u32> = [StatusTab::Active, StatusTab::Paused, StatusTab::Sold]
        .into_iter()
        .flat_map(|tab| ids(&set.by_tab(tab)))
        .collect();
    seen.sort_unstable();
    let mut all = ids(&set.by_tab(StatusTab::All));
    all.sort_unstable();
    assert_eq!(seen, all);
    assert_eq!(all.len(), set.all().len());
}

#[test]
fn counts_match_tabs() {
    let set = owner();
    let counts = set.counts();
    assert_eq!(counts, StatusCounts { total: 4, active: 2, paused: 1, sold: 1 });
    for tab in StatusTab::ALL {
        assert_eq!(counts.for_tab(tab), set.by_tab(tab).len());
    }
}

#[test]
fn empty_set_has_zero_counts() {
    let set = OwnerListings::default();
    assert_eq!(set.counts(), StatusCounts::default());
    assert!(set.by_tab(StatusTab::All).is_empty());
}

#[test]
fn status_tab_parses_lowercase() {
    assert_eq!(StatusTab::from_str("paused"), Some(StatusTab::Paused));
    assert_eq!(StatusTab::from_str("all"), Some(StatusTab::All));
    assert_eq!(StatusTab::from_str("Paused"), None);
}

// =============================================================
// Status changes
// =============================================================

#[test]
fn pause_then_activate_restores_record() {
    let mut set = owner();
    let original = set.get(ListingId(1)).cloned().unwrap();

    set.set_status(ListingId(1), ListingStatus::Paused).unwrap();
    assert_eq!(set.get(ListingId(1)).unwrap().status, ListingStatus::Paused);

    set.set_status(ListingId(1), ListingStatus::Active).unwrap();
    assert_eq!(set.get(ListingId(1)), Some(&original));
}

#[test]
fn set_status_only_touches_target_listing() {
    let mut set = owner();
    let before = set.clone();
    set.set_status(ListingId(3), ListingStatus::Active).unwrap();

    for listing in set.all() {
        let old = before.get(listing.id).unwrap();
        if listing.id == ListingId(3) {
            assert_eq!(Listing { status: old.status, ..listing.clone() }, *old);
        } else {
            assert_eq!(listing, old);
        }
    }
}

#[test]
fn set_status_rejects_sold_target() {
    let mut set = owner();
    assert_eq!(
        set.set_status(ListingId(1), ListingStatus::Sold),
        Err(MarketError::InvalidStatusTarget(ListingStatus::Sold))
    );
    assert_eq!(set, owner());
}

#[test]
fn set_status_unknown_id() {
    let mut set = owner();
    assert_eq!(
        set.set_status(ListingId(99), ListingStatus::Paused),
        Err(MarketError::ListingNotFound(ListingId(99)))
    );
}

#[test]
fn set_status_on_sold_listing_is_not_blocked() {
    let mut set = owner();
    set.set_status(ListingId(4), ListingStatus::Active).unwrap();
    let bike = set.get(ListingId(4)).unwrap();
    assert_eq!(bike.status, ListingStatus::Active);
    assert!(bike.sold_on.is_some());
}

#[test]
fn offered_change_per_status() {
    assert_eq!(offered_change(ListingStatus::Active), Some(StatusChange::Pause));
    assert_eq!(offered_change(ListingStatus::Paused), Some(StatusChange::Activate));
    assert_eq!(offered_change(ListingStatus::Sold), None);
    assert_eq!(StatusChange::Pause.target(), ListingStatus::Paused);
    assert_eq!(StatusChange::Activate.target(), ListingStatus::Active);
}

#[test]
fn apply_offered_change_toggles_and_skips_sold() {
    let mut set = owner();
    assert_eq!(set.apply_offered_change(ListingId(1)), Ok(Some(ListingStatus::Paused)));
    assert_eq!(set.apply_offered_change(ListingId(1)), Ok(Some(ListingStatus::Active)));
    assert_eq!(set.apply_offered_change(ListingId(4)), Ok(None));
    assert_eq!(set.get(ListingId(4)).unwrap().status, ListingStatus::Sold);
}

// =============================================================
// Delete
// =============================================================

#[test]
fn cancelled_delete_leaves_set_unchanged() {
    let mut set = owner();
    let before = set.clone();
    let request = set.request_delete(ListingId(2)).unwrap();
    assert_eq!(request.title, "Gaming Setup - Complete Package");
    assert_eq!(set.resolve_delete(request, Confirmation::Cancelled), None);
    assert_eq!(set, before);
}

#[test]
fn confirmed_delete_removes_by_id() {
    let mut set = owner();
    let request = set.request_delete(ListingId(2)).unwrap();
    let removed = set.resolve_delete(request, Confirmation::Confirmed).unwrap();
    assert_eq!(removed.id, ListingId(2));
    assert_eq!(ids(&set.by_tab(StatusTab::All)), vec![1, 3, 4]);
    assert_eq!(set.counts().active, 1);
}

#[test]
fn confirming_twice_removes_once() {
    let mut set = owner();
    let request = set.request_delete(ListingId(3)).unwrap();
    assert!(set.resolve_delete(request.clone(), Confirmation::Confirmed).is_some());
    assert!(set.resolve_delete(request, Confirmation::Confirmed).is_none());
    assert_eq!(set.all().len(), 3);
}

#[test]
fn request_delete_unknown_id() {
    let set = owner();
    assert_eq!(set.request_delete(ListingId(42)), Err(MarketError::ListingNotFound(ListingId(42))));
}

#[test]
fn delete_prompt_text() {
    let request = owner().request_delete(ListingId(1)).unwrap();
    assert_eq!(request.prompt(), "Are you sure you want to delete this listing?");
}
