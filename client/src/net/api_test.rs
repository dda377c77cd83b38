use super::*;

#[test]
fn listing_endpoint_formats_expected_path() {
    assert_eq!(listing_endpoint(ListingId(3)), "/api/me/listings/3");
}

#[test]
fn listing_status_endpoint_formats_expected_path() {
    assert_eq!(listing_status_endpoint(ListingId(12)), "/api/me/listings/12/status");
}

#[test]
fn status_body_uses_lowercase_status() {
    assert_eq!(status_body(ListingStatus::Paused), serde_json::json!({ "status": "paused" }));
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("delete", 404), "delete failed: 404");
    assert_eq!(request_failed_message("create listing", 401), "create listing failed: 401");
}

